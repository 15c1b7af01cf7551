//! Media domain values.
//!
//! Everything here is an immutable value: constructed by the caller or by an
//! adapter, consumed read-only by the service.

mod capability;
mod handoff;
mod location;
mod reference;

pub use capability::{StorageCapability, StorageCategory, MANAGED_STORE_MIN_API_LEVEL};
pub use handoff::{HandoffAction, RecipientGrant, SurfaceId, UiContext};
pub use location::{MediaLocation, LOCAL_FILE_SCHEMES};
pub use reference::{AppIdentity, ExternalReference, EXTERNAL_REFERENCE_SCHEME};

/// Display metadata declared by the caller for a media resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaInfo {
    /// Display name, also used as the file name when persisting.
    pub name: String,
    pub mime_type: String,
}

/// A media resource addressed by a local locator.
///
/// A parameter object, not a managed entity: it has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalMedia {
    pub location: MediaLocation,
    pub info: MediaInfo,
}

impl LocalMedia {
    pub fn new(
        location: MediaLocation,
        name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            location,
            info: MediaInfo {
                name: name.into(),
                mime_type: mime_type.into(),
            },
        }
    }
}
