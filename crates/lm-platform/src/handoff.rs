//! Handoff presenter that forwards requests to the host UI layer.
//!
//! The host owns the receiving end and renders the chooser or launches the
//! viewer itself; this side only describes what must be presented.

use lm_core::ports::HandoffPresenterPort;
use lm_core::{ExternalReference, HandoffAction, RecipientGrant, SurfaceId, UiContext};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffEvent {
    pub surface: SurfaceId,
    pub action: HandoffAction,
    pub reference: ExternalReference,
    pub mime_type: String,
    pub grant: RecipientGrant,
}

pub type HandoffEventReceiver = mpsc::UnboundedReceiver<HandoffEvent>;

pub struct ChannelHandoffPresenter {
    events: mpsc::UnboundedSender<HandoffEvent>,
}

impl ChannelHandoffPresenter {
    pub fn new() -> (Self, HandoffEventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { events: tx }, rx)
    }

    fn present(
        &self,
        action: HandoffAction,
        ui: &UiContext,
        reference: &ExternalReference,
        mime_type: &str,
        grant: RecipientGrant,
    ) -> anyhow::Result<()> {
        let event = HandoffEvent {
            surface: ui.surface().clone(),
            action,
            reference: reference.clone(),
            mime_type: mime_type.to_string(),
            grant,
        };
        self.events
            .send(event)
            .map_err(|_| anyhow::anyhow!("host UI stopped receiving handoff requests"))?;
        tracing::debug!(
            action = action.as_str(),
            surface = %ui.surface(),
            reference = %reference,
            "Handoff requested"
        );
        Ok(())
    }
}

impl HandoffPresenterPort for ChannelHandoffPresenter {
    fn present_send(
        &self,
        ui: &UiContext,
        reference: &ExternalReference,
        mime_type: &str,
        grant: RecipientGrant,
    ) -> anyhow::Result<()> {
        self.present(HandoffAction::Send, ui, reference, mime_type, grant)
    }

    fn present_view(
        &self,
        ui: &UiContext,
        reference: &ExternalReference,
        mime_type: &str,
        grant: RecipientGrant,
    ) -> anyhow::Result<()> {
        self.present(HandoffAction::View, ui, reference, mime_type, grant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn reference() -> ExternalReference {
        ExternalReference::from_url(
            Url::parse("content://org.example.media.fileprovider/cache/a.jpg").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn send_and_view_are_forwarded_in_order() {
        let (presenter, mut events) = ChannelHandoffPresenter::new();
        let ui = UiContext::new(SurfaceId::new("main"));

        presenter
            .present_send(&ui, &reference(), "image/jpeg", RecipientGrant::Read)
            .unwrap();
        presenter
            .present_view(&ui, &reference(), "image/jpeg", RecipientGrant::Read)
            .unwrap();

        let first = events.try_recv().unwrap();
        assert_eq!(first.action, HandoffAction::Send);
        assert_eq!(first.surface, SurfaceId::new("main"));
        assert_eq!(first.reference, reference());
        assert_eq!(first.mime_type, "image/jpeg");
        assert_eq!(first.grant, RecipientGrant::Read);

        assert_eq!(events.try_recv().unwrap().action, HandoffAction::View);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn closed_receiver_fails_the_presentation() {
        let (presenter, events) = ChannelHandoffPresenter::new();
        drop(events);

        let ui = UiContext::new(SurfaceId::new("main"));
        assert!(presenter
            .present_view(&ui, &reference(), "video/mp4", RecipientGrant::Read)
            .is_err());
    }
}
