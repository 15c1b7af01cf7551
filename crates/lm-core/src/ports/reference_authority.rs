use std::path::Path;

use crate::media::ExternalReference;

/// Converts filesystem paths into references another application may read.
pub trait ReferenceAuthorityPort: Send + Sync {
    /// Derive a reference for `path` under `authority`.
    ///
    /// Must fail for any path the authority is not configured to expose.
    fn reference_for(&self, authority: &str, path: &Path) -> anyhow::Result<ExternalReference>;
}
