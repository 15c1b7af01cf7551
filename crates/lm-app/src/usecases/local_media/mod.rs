//! Save, share and open a local media resource on behalf of the host.

mod reference;

use std::sync::Arc;

use async_trait::async_trait;
use lm_core::ports::{
    DispatcherPort, HandoffPresenterPort, LocalMediaActionsPort, ReferenceAuthorityPort,
    UiContextPort,
};
use lm_core::{
    AppIdentity, HandoffAction, LocalMedia, LocalMediaError, LocalMediaResult, RecipientGrant,
};
use tracing::{info_span, Instrument, Span};

use crate::deps::LocalMediaDeps;
use crate::execution::{on_background, on_foreground};
use crate::storage::{PersistOutcome, StorageStrategySelector};

pub use reference::{derive_external_reference, require_local_file};

/// Public entry point for local media actions.
///
/// Every operation validates the media location first, does its file work on
/// the background context, and reports a classified [`LocalMediaError`]
/// rather than panicking. `share` and `open` additionally hop to the
/// foreground context, where the UI context is read exactly once.
pub struct LocalMediaService {
    dispatcher: Arc<dyn DispatcherPort>,
    ui_context: Arc<dyn UiContextPort>,
    selector: Arc<StorageStrategySelector>,
    reference_authority: Arc<dyn ReferenceAuthorityPort>,
    presenter: Arc<dyn HandoffPresenterPort>,
    identity: AppIdentity,
}

impl LocalMediaService {
    pub fn new(deps: LocalMediaDeps) -> Self {
        let selector = StorageStrategySelector::new(
            deps.host_capability,
            deps.managed_store,
            deps.public_directory,
            deps.media_source,
            deps.transfer,
        );

        Self {
            dispatcher: deps.dispatcher,
            ui_context: deps.ui_context,
            selector: Arc::new(selector),
            reference_authority: deps.reference_authority,
            presenter: deps.presenter,
            identity: deps.identity,
        }
    }

    /// Persist `media` into user-visible downloads storage.
    ///
    /// Not idempotent: two saves of the same media may create two entries.
    pub async fn save(&self, media: LocalMedia) -> LocalMediaResult<()> {
        let span = info_span!(
            "usecase.local_media.save",
            media.name = %media.info.name,
            media.mime = %media.info.mime_type
        );

        async {
            let result = self.run_save(media).await;
            log_outcome("Save on disk", &result);
            result
        }
        .instrument(span)
        .await
    }

    /// Offer `media` to another application through a chooser.
    pub async fn share(&self, media: LocalMedia) -> LocalMediaResult<()> {
        let span = info_span!(
            "usecase.local_media.share",
            media.name = %media.info.name,
            media.mime = %media.info.mime_type
        );

        async {
            let result = self.run_handoff(media, HandoffAction::Send).await;
            log_outcome("Share media", &result);
            result
        }
        .instrument(span)
        .await
    }

    /// Open `media` in another application's viewer.
    pub async fn open(&self, media: LocalMedia) -> LocalMediaResult<()> {
        let span = info_span!(
            "usecase.local_media.open",
            media.name = %media.info.name,
            media.mime = %media.info.mime_type
        );

        async {
            let result = self.run_handoff(media, HandoffAction::View).await;
            log_outcome("Open media", &result);
            result
        }
        .instrument(span)
        .await
    }

    async fn run_save(&self, media: LocalMedia) -> LocalMediaResult<()> {
        require_local_file(&media)?;

        let selector = self.selector.clone();
        let outcome = on_background(
            self.dispatcher.as_ref(),
            async move { selector.persist(&media).await }.in_current_span(),
        )
        .await??;

        if let PersistOutcome::Written { strategy, bytes } = outcome {
            tracing::debug!(strategy = strategy.as_str(), bytes, "Media bytes persisted");
        }
        Ok(())
    }

    async fn run_handoff(&self, media: LocalMedia, action: HandoffAction) -> LocalMediaResult<()> {
        let path = require_local_file(&media)?;

        let authority = self.reference_authority.clone();
        let identity = self.identity.clone();
        let reference = on_background(
            self.dispatcher.as_ref(),
            async move { derive_external_reference(authority.as_ref(), &identity, &path) }
                .in_current_span(),
        )
        .await??;

        let ui_context = self.ui_context.clone();
        let presenter = self.presenter.clone();
        let mime_type = media.info.mime_type;
        let span = Span::current();

        on_foreground(self.dispatcher.as_ref(), move || {
            let _entered = span.enter();
            // Snapshot taken at the hop; a context registered later is not observed.
            let ui = ui_context
                .current()
                .ok_or(LocalMediaError::ContextUnavailable)?;

            let presented = match action {
                HandoffAction::Send => {
                    presenter.present_send(&ui, &reference, &mime_type, RecipientGrant::Read)
                }
                HandoffAction::View => {
                    presenter.present_view(&ui, &reference, &mime_type, RecipientGrant::Read)
                }
            };
            presented.map_err(|err| {
                LocalMediaError::io(format!("Failed to present {} handoff", action.as_str()), err)
            })
        })
        .await?
    }
}

fn log_outcome(operation: &str, result: &LocalMediaResult<()>) {
    match result {
        Ok(()) => tracing::info!("{operation} succeeded"),
        Err(err) => tracing::error!(error = %err, kind = err.kind(), "{operation} failed"),
    }
}

#[async_trait]
impl LocalMediaActionsPort for LocalMediaService {
    async fn save(&self, media: LocalMedia) -> LocalMediaResult<()> {
        LocalMediaService::save(self, media).await
    }

    async fn share(&self, media: LocalMedia) -> LocalMediaResult<()> {
        LocalMediaService::share(self, media).await
    }

    async fn open(&self, media: LocalMedia) -> LocalMediaResult<()> {
        LocalMediaService::open(self, media).await
    }
}
