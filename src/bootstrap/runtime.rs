//! # Local media runtime
//!
//! The assembled service plus the host-facing handles that come with it: the
//! UI context slot the host registers surfaces in, the stream of handoff
//! requests the host must present, and the foreground queue the host drains.

use std::path::PathBuf;
use std::sync::Arc;

use lm_app::LocalMediaService;
use lm_core::ports::LocalMediaActionsPort;
use lm_core::{AppIdentity, ExternalReference, UiContext};
use lm_infra::fs::FsFileProvider;
use lm_platform::dispatcher::ForegroundQueue;
use lm_platform::handoff::HandoffEventReceiver;
use lm_platform::ui_context::{UiContextGuard, UiContextSlot};

pub struct LocalMediaRuntime {
    service: Arc<LocalMediaService>,
    ui_context: Arc<UiContextSlot>,
    file_provider: Arc<FsFileProvider>,
    identity: AppIdentity,
    handoff_events: Option<HandoffEventReceiver>,
    foreground: Option<ForegroundQueue>,
}

impl LocalMediaRuntime {
    pub(crate) fn new(
        service: Arc<LocalMediaService>,
        ui_context: Arc<UiContextSlot>,
        file_provider: Arc<FsFileProvider>,
        identity: AppIdentity,
        handoff_events: HandoffEventReceiver,
        foreground: ForegroundQueue,
    ) -> Self {
        Self {
            service,
            ui_context,
            file_provider,
            identity,
            handoff_events: Some(handoff_events),
            foreground: Some(foreground),
        }
    }

    pub fn service(&self) -> Arc<LocalMediaService> {
        self.service.clone()
    }

    /// The service behind its public contract.
    pub fn actions(&self) -> Arc<dyn LocalMediaActionsPort> {
        self.service.clone()
    }

    pub fn identity(&self) -> &AppIdentity {
        &self.identity
    }

    /// Registers `ui` as the active UI context until the guard is dropped.
    pub fn attach_ui(&self, ui: UiContext) -> UiContextGuard {
        self.ui_context.attach(ui)
    }

    pub fn ui_context(&self) -> &Arc<UiContextSlot> {
        &self.ui_context
    }

    /// Handoff requests for the host UI. Can be taken once.
    pub fn take_handoff_events(&mut self) -> Option<HandoffEventReceiver> {
        self.handoff_events.take()
    }

    /// Foreground work queue. Can be taken once; the host either drains it
    /// from its UI loop or moves it onto a dedicated thread.
    pub fn take_foreground_queue(&mut self) -> Option<ForegroundQueue> {
        self.foreground.take()
    }

    /// Maps a reference issued by this runtime back to the file it names.
    pub fn resolve_reference(&self, reference: &ExternalReference) -> anyhow::Result<PathBuf> {
        self.file_provider
            .resolve(&self.identity.file_provider_authority(), reference)
    }
}
