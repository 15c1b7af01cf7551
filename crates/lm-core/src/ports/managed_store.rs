use tokio::io::AsyncWrite;

use crate::media::StorageCategory;

pub type MediaSink = Box<dyn AsyncWrite + Send + Unpin>;

/// Description of a user-visible entry to create through the storage broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStorageEntry {
    pub display_name: String,
    pub mime_type: String,
    pub category: StorageCategory,
}

/// Storage broker that creates user-visible entries without exposing their
/// physical location.
#[async_trait::async_trait]
pub trait ManagedStorePort: Send + Sync {
    /// Create a new entry and return a writable sink for it.
    ///
    /// Returns `Ok(None)` when the broker refuses to create the entry.
    /// Name collisions follow the broker's own policy.
    async fn create_entry(&self, entry: &NewStorageEntry) -> anyhow::Result<Option<MediaSink>>;
}
