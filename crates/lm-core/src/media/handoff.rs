use std::fmt;

/// Identifier of the UI surface a [`UiContext`] belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceId(String);

impl SurfaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to a live UI surface, required to present any handoff.
///
/// Supplied by the host when a surface attaches and withdrawn when it detaches.
/// The service only ever reads a snapshot of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiContext {
    surface: SurfaceId,
}

impl UiContext {
    pub fn new(surface: SurfaceId) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &SurfaceId {
        &self.surface
    }
}

/// Permission granted to the application receiving a handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientGrant {
    Read,
}

/// Kind of handoff requested from the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffAction {
    /// Generic "send" through a chooser.
    Send,
    /// Launch a viewer.
    View,
}

impl HandoffAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::View => "view",
        }
    }
}
