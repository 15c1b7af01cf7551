//! Capability-gated persistence behind `save`.
//!
//! The selector inspects the host capability on every call, picks exactly one
//! [`StorageStrategy`], and runs the shared transfer into the sink it opens.

mod transfer;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use lm_core::config::AbsentResourcePolicy;
use lm_core::ports::{
    HostCapabilityPort, ManagedStorePort, MediaSink, MediaSourcePort, NewStorageEntry,
    PublicDirectoryPort,
};
use lm_core::{LocalMedia, LocalMediaError, LocalMediaResult, StorageCapability, StorageCategory};

pub use transfer::transfer;

pub const DEFAULT_TRANSFER_BUFFER_BYTES: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferSettings {
    pub buffer_bytes: usize,
    pub absent_resource: AbsentResourcePolicy,
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            buffer_bytes: DEFAULT_TRANSFER_BUFFER_BYTES,
            absent_resource: AbsentResourcePolicy::default(),
        }
    }
}

/// A resource that was needed for the save but did not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentResource {
    /// The storage broker returned no entry.
    BrokerRefused,
    /// The media's input stream could not be opened.
    SourceUnavailable,
}

impl AbsentResource {
    fn describe(&self) -> &'static str {
        match self {
            Self::BrokerRefused => "storage broker refused to create an entry",
            Self::SourceUnavailable => "media input stream is unavailable",
        }
    }
}

/// Result of a completed `persist` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Written { strategy: StorageCapability, bytes: u64 },
    /// Nothing was written; only reachable with [`AbsentResourcePolicy::Ignore`].
    Skipped { strategy: StorageCapability, reason: AbsentResource },
}

/// Persistence strategy chosen for a single save.
pub enum StorageStrategy {
    ManagedStore(Arc<dyn ManagedStorePort>),
    DirectPath(Arc<dyn PublicDirectoryPort>),
}

impl StorageStrategy {
    pub fn capability(&self) -> StorageCapability {
        match self {
            Self::ManagedStore(_) => StorageCapability::ManagedStore,
            Self::DirectPath(_) => StorageCapability::DirectPath,
        }
    }

    /// Obtain the writable sink for `media`, or `None` if the broker refused.
    async fn open_sink(&self, media: &LocalMedia) -> anyhow::Result<Option<MediaSink>> {
        match self {
            Self::ManagedStore(broker) => {
                let entry = NewStorageEntry {
                    display_name: media.info.name.clone(),
                    mime_type: media.info.mime_type.clone(),
                    category: StorageCategory::Downloads,
                };
                broker.create_entry(&entry).await
            }
            Self::DirectPath(directories) => {
                let dir = directories.resolve_public_directory(StorageCategory::Downloads)?;
                let target = dir.join(plain_file_name(&media.info.name)?);
                tokio::fs::create_dir_all(&dir)
                    .await
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                let file = tokio::fs::File::create(&target)
                    .await
                    .with_context(|| format!("Failed to create {}", target.display()))?;
                Ok(Some(Box::new(file)))
            }
        }
    }
}

/// The display name must be a single path component so the direct path
/// strategy cannot write outside the public directory.
fn plain_file_name(name: &str) -> anyhow::Result<&str> {
    match Path::new(name).file_name().and_then(|n| n.to_str()) {
        Some(file_name) if file_name == name => Ok(file_name),
        _ => anyhow::bail!("display name {name:?} is not a plain file name"),
    }
}

pub struct StorageStrategySelector {
    host_capability: Arc<dyn HostCapabilityPort>,
    managed_store: Arc<dyn ManagedStorePort>,
    public_directory: Arc<dyn PublicDirectoryPort>,
    media_source: Arc<dyn MediaSourcePort>,
    settings: TransferSettings,
}

impl StorageStrategySelector {
    pub fn new(
        host_capability: Arc<dyn HostCapabilityPort>,
        managed_store: Arc<dyn ManagedStorePort>,
        public_directory: Arc<dyn PublicDirectoryPort>,
        media_source: Arc<dyn MediaSourcePort>,
        settings: TransferSettings,
    ) -> Self {
        Self {
            host_capability,
            managed_store,
            public_directory,
            media_source,
            settings,
        }
    }

    /// Pick the strategy for the host capability observed right now.
    pub fn select(&self) -> StorageStrategy {
        match self.host_capability.storage_capability() {
            StorageCapability::ManagedStore => {
                StorageStrategy::ManagedStore(self.managed_store.clone())
            }
            StorageCapability::DirectPath => {
                StorageStrategy::DirectPath(self.public_directory.clone())
            }
        }
    }

    /// Copy the media's bytes into user-visible downloads storage.
    ///
    /// The input stream is opened before the sink so that an unreadable media
    /// never leaves an empty entry behind.
    pub async fn persist(&self, media: &LocalMedia) -> LocalMediaResult<PersistOutcome> {
        let strategy = self.select();
        let capability = strategy.capability();
        tracing::debug!(strategy = capability.as_str(), "Selected storage strategy");

        let Some(reader) = self
            .media_source
            .open_read(&media.location)
            .await
            .map_err(|err| LocalMediaError::io("Failed to open media input stream", err))?
        else {
            return self.absent(capability, AbsentResource::SourceUnavailable);
        };

        let Some(sink) = strategy
            .open_sink(media)
            .await
            .map_err(|err| LocalMediaError::io("Failed to open storage sink", err))?
        else {
            return self.absent(capability, AbsentResource::BrokerRefused);
        };

        let bytes = transfer(reader, sink, self.settings.buffer_bytes)
            .await
            .map_err(|err| LocalMediaError::io("Failed to transfer media bytes", err))?;

        Ok(PersistOutcome::Written {
            strategy: capability,
            bytes,
        })
    }

    fn absent(
        &self,
        strategy: StorageCapability,
        reason: AbsentResource,
    ) -> LocalMediaResult<PersistOutcome> {
        match self.settings.absent_resource {
            AbsentResourcePolicy::Fail => Err(LocalMediaError::io(
                "Nothing was saved",
                anyhow::anyhow!(reason.describe()),
            )),
            AbsentResourcePolicy::Ignore => {
                tracing::warn!(
                    strategy = strategy.as_str(),
                    reason = reason.describe(),
                    "Save skipped without writing"
                );
                Ok(PersistOutcome::Skipped { strategy, reason })
            }
        }
    }
}
