use anyhow::Context;
use async_trait::async_trait;
use lm_core::ports::{MediaReader, MediaSourcePort};
use lm_core::MediaLocation;
use tokio::fs;

/// Opens read streams for media stored on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMediaSource;

impl FsMediaSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MediaSourcePort for FsMediaSource {
    /// Opens the file behind a local location.
    ///
    /// Returns `Ok(None)` for non-local locations, missing files and anything
    /// that is not a regular file.
    async fn open_read(&self, location: &MediaLocation) -> anyhow::Result<Option<MediaReader>> {
        let Some(path) = location.to_file_path() else {
            return Ok(None);
        };

        let file = match fs::File::open(&path).await {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Media file does not exist");
                return Ok(None);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to open {}", path.display()))
            }
        };

        let metadata = file
            .metadata()
            .await
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        if !metadata.is_file() {
            return Ok(None);
        }

        Ok(Some(Box::new(file)))
    }
}
