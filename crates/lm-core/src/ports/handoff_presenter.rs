use crate::media::{ExternalReference, RecipientGrant, UiContext};

/// Hands a resource off to another application through the host UI.
///
/// Both methods are only ever called from the foreground context, with a UI
/// context observed at that moment.
pub trait HandoffPresenterPort: Send + Sync {
    /// Present a chooser offering to send the resource to another application.
    fn present_send(
        &self,
        ui: &UiContext,
        reference: &ExternalReference,
        mime_type: &str,
        grant: RecipientGrant,
    ) -> anyhow::Result<()>;

    /// Ask the host to launch a viewer for the resource.
    fn present_view(
        &self,
        ui: &UiContext,
        reference: &ExternalReference,
        mime_type: &str,
        grant: RecipientGrant,
    ) -> anyhow::Result<()>;
}
