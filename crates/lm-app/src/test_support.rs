//! Fakes and mocks shared by the unit tests of this crate.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use async_trait::async_trait;
use lm_core::ports::*;
use lm_core::{
    ExternalReference, MediaLocation, RecipientGrant, StorageCapability, StorageCategory,
    UiContext,
};
use tokio::io::AsyncWrite;

mockall::mock! {
    pub PublicDirectory {}

    impl PublicDirectoryPort for PublicDirectory {
        fn resolve_public_directory(&self, category: StorageCategory) -> anyhow::Result<PathBuf>;
    }
}

mockall::mock! {
    pub ReferenceAuthority {}

    impl ReferenceAuthorityPort for ReferenceAuthority {
        fn reference_for(&self, authority: &str, path: &Path) -> anyhow::Result<ExternalReference>;
    }
}

mockall::mock! {
    pub Presenter {}

    impl HandoffPresenterPort for Presenter {
        fn present_send(
            &self,
            ui: &UiContext,
            reference: &ExternalReference,
            mime_type: &str,
            grant: RecipientGrant,
        ) -> anyhow::Result<()>;

        fn present_view(
            &self,
            ui: &UiContext,
            reference: &ExternalReference,
            mime_type: &str,
            grant: RecipientGrant,
        ) -> anyhow::Result<()>;
    }
}

/// Sink that keeps every byte written to it.
#[derive(Clone, Default)]
pub struct RecordingSink {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl RecordingSink {
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.lock().unwrap().clone()
    }
}

impl AsyncWrite for RecordingSink {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<std::io::Result<usize>> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// In-memory media source keyed by location.
#[derive(Default)]
pub struct MemoryMediaSource {
    contents: HashMap<MediaLocation, Vec<u8>>,
    pub opens: AtomicUsize,
}

impl MemoryMediaSource {
    pub fn with(location: &MediaLocation, bytes: Vec<u8>) -> Self {
        let mut contents = HashMap::new();
        contents.insert(location.clone(), bytes);
        Self {
            contents,
            opens: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl MediaSourcePort for MemoryMediaSource {
    async fn open_read(&self, location: &MediaLocation) -> anyhow::Result<Option<MediaReader>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .contents
            .get(location)
            .cloned()
            .map(|bytes| Box::new(Cursor::new(bytes)) as MediaReader))
    }
}

/// Storage broker that records every entry it creates.
pub struct RecordingBroker {
    refuse: bool,
    pub entries: Mutex<Vec<(NewStorageEntry, RecordingSink)>>,
}

impl RecordingBroker {
    pub fn accepting() -> Self {
        Self {
            refuse: false,
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn refusing() -> Self {
        Self {
            refuse: true,
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn written(&self, index: usize) -> Vec<u8> {
        self.entries.lock().unwrap()[index].1.bytes()
    }
}

#[async_trait]
impl ManagedStorePort for RecordingBroker {
    async fn create_entry(&self, entry: &NewStorageEntry) -> anyhow::Result<Option<MediaSink>> {
        if self.refuse {
            return Ok(None);
        }
        let sink = RecordingSink::default();
        self.entries
            .lock()
            .unwrap()
            .push((entry.clone(), sink.clone()));
        Ok(Some(Box::new(sink)))
    }
}

pub struct FixedCapability(pub StorageCapability);

impl HostCapabilityPort for FixedCapability {
    fn storage_capability(&self) -> StorageCapability {
        self.0
    }
}

/// UI context slot the test controls directly.
#[derive(Default)]
pub struct TestUiContext(pub Mutex<Option<UiContext>>);

impl TestUiContext {
    pub fn registered(ui: UiContext) -> Self {
        Self(Mutex::new(Some(ui)))
    }
}

impl UiContextPort for TestUiContext {
    fn current(&self) -> Option<UiContext> {
        self.0.lock().unwrap().clone()
    }
}

/// Runs background work on the test runtime and foreground work inline.
#[derive(Default)]
pub struct InlineDispatcher {
    pub background: AtomicUsize,
    pub foreground: AtomicUsize,
}

impl DispatcherPort for InlineDispatcher {
    fn dispatch_background(&self, task: BackgroundTask) -> Result<(), DispatchError> {
        self.background.fetch_add(1, Ordering::SeqCst);
        tokio::spawn(task);
        Ok(())
    }

    fn dispatch_foreground(&self, task: ForegroundTask) -> Result<(), DispatchError> {
        self.foreground.fetch_add(1, Ordering::SeqCst);
        task();
        Ok(())
    }
}
