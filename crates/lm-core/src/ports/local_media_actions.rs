use crate::errors::LocalMediaResult;
use crate::media::LocalMedia;

/// Actions a host can request on a local media resource.
#[async_trait::async_trait]
pub trait LocalMediaActionsPort: Send + Sync {
    /// Persist the media into user-visible downloads storage.
    async fn save(&self, media: LocalMedia) -> LocalMediaResult<()>;

    /// Offer the media to another application through a chooser.
    async fn share(&self, media: LocalMedia) -> LocalMediaResult<()>;

    /// Open the media in another application's viewer.
    async fn open(&self, media: LocalMedia) -> LocalMediaResult<()>;
}
