//! Port interfaces for the application layer
//!
//! Ports define the contract between the local media use cases and the
//! platform/infrastructure implementations that back them. The service only
//! depends on these traits; adapters live in `lm-platform` and `lm-infra`.

pub mod app_dirs;
mod dispatcher;
pub mod errors;
mod handoff_presenter;
mod host_capability;
mod local_media_actions;
mod managed_store;
mod media_source;
mod public_directory;
mod reference_authority;
mod ui_context;

pub use app_dirs::AppDirsPort;
pub use dispatcher::{BackgroundTask, DispatcherPort, ForegroundTask};
pub use errors::{AppDirsError, DispatchError};
pub use handoff_presenter::HandoffPresenterPort;
pub use host_capability::HostCapabilityPort;
pub use local_media_actions::LocalMediaActionsPort;
pub use managed_store::{ManagedStorePort, MediaSink, NewStorageEntry};
pub use media_source::{MediaReader, MediaSourcePort};
pub use public_directory::PublicDirectoryPort;
pub use reference_authority::ReferenceAuthorityPort;
pub use ui_context::UiContextPort;
