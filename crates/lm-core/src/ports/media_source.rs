use tokio::io::AsyncRead;

use crate::media::MediaLocation;

pub type MediaReader = Box<dyn AsyncRead + Send + Unpin>;

#[async_trait::async_trait]
pub trait MediaSourcePort: Send + Sync {
    /// Open the backing stream of a media location.
    ///
    /// Returns `Ok(None)` when the resource has no readable stream.
    async fn open_read(&self, location: &MediaLocation) -> anyhow::Result<Option<MediaReader>>;
}
