use std::path::PathBuf;

use crate::media::StorageCategory;

/// Resolves the physical path of a public, user-visible directory.
pub trait PublicDirectoryPort: Send + Sync {
    fn resolve_public_directory(&self, category: StorageCategory) -> anyhow::Result<PathBuf>;
}
