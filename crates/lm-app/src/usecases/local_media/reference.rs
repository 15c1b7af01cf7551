use std::path::PathBuf;

use lm_core::ports::ReferenceAuthorityPort;
use lm_core::{AppIdentity, ExternalReference, LocalMedia, LocalMediaError, LocalMediaResult};

/// Filesystem path of `media`, or a precondition violation if its location
/// does not address the local filesystem.
pub fn require_local_file(media: &LocalMedia) -> LocalMediaResult<PathBuf> {
    media.location.to_file_path().ok_or_else(|| {
        LocalMediaError::precondition(format!(
            "media location {} does not address the local filesystem",
            media.location
        ))
    })
}

/// Derive the reference handed to other applications in place of `path`.
pub fn derive_external_reference(
    authority: &dyn ReferenceAuthorityPort,
    identity: &AppIdentity,
    path: &std::path::Path,
) -> LocalMediaResult<ExternalReference> {
    authority
        .reference_for(&identity.file_provider_authority(), path)
        .map_err(|err| LocalMediaError::io("Failed to derive a shareable reference", err))
}
