//! Single-slot holder for the UI context.
//!
//! The host registers a context when a UI surface attaches and clears it when
//! the surface is torn down. At most one context is registered at a time.

use std::sync::{Arc, RwLock};

use lm_core::ports::UiContextPort;
use lm_core::{SurfaceId, UiContext};

#[derive(Default)]
pub struct UiContextSlot {
    current: RwLock<Option<UiContext>>,
}

impl UiContextSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `ui`, replacing any context registered before it.
    pub fn register(&self, ui: UiContext) {
        tracing::debug!(surface = %ui.surface(), "UI context registered");
        *self.write() = Some(ui);
    }

    /// Clear whatever context is registered.
    pub fn clear(&self) {
        if self.write().take().is_some() {
            tracing::debug!("UI context cleared");
        }
    }

    /// Clear the slot only if `surface` still owns it.
    ///
    /// Returns whether the slot was cleared.
    pub fn clear_if_owned_by(&self, surface: &SurfaceId) -> bool {
        let mut current = self.write();
        if current.as_ref().is_some_and(|ui| ui.surface() == surface) {
            *current = None;
            tracing::debug!(surface = %surface, "UI context cleared");
            return true;
        }
        false
    }

    /// Register `ui` for as long as the returned guard lives.
    pub fn attach(self: &Arc<Self>, ui: UiContext) -> UiContextGuard {
        let surface = ui.surface().clone();
        self.register(ui);
        UiContextGuard {
            slot: Arc::clone(self),
            surface,
        }
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<UiContext>> {
        // A panic while holding the lock leaves a plain Option behind; keep using it.
        self.current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl UiContextPort for UiContextSlot {
    fn current(&self) -> Option<UiContext> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// Keeps a UI context registered until dropped.
///
/// Dropping clears the slot only if a later surface has not replaced it.
#[must_use = "the UI context is cleared as soon as the guard is dropped"]
pub struct UiContextGuard {
    slot: Arc<UiContextSlot>,
    surface: SurfaceId,
}

impl UiContextGuard {
    pub fn surface(&self) -> &SurfaceId {
        &self.surface
    }
}

impl Drop for UiContextGuard {
    fn drop(&mut self) {
        self.slot.clear_if_owned_by(&self.surface);
    }
}
