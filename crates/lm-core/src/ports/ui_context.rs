use crate::media::UiContext;

/// Read side of the single UI context slot.
///
/// Registration and clearing belong to the host's UI lifecycle; consumers only
/// take snapshots and must not hold them across suspension points.
pub trait UiContextPort: Send + Sync {
    fn current(&self) -> Option<UiContext>;
}
