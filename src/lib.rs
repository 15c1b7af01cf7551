//! Host-facing entry point of the local media service.
//!
//! A host loads its configuration, initialises tracing, and wires a
//! [`LocalMediaRuntime`](bootstrap::LocalMediaRuntime) onto its tokio runtime:
//!
//! ```rust,no_run
//! use local_media_lib::bootstrap::{init_tracing_subscriber, load_config, wire_default};
//!
//! # fn main() -> anyhow::Result<()> {
//! let runtime = tokio::runtime::Runtime::new()?;
//! init_tracing_subscriber()?;
//! let config = load_config("local-media.toml".into())?;
//! let mut media = wire_default(&config, runtime.handle().clone())?;
//! let _foreground = media.take_foreground_queue().map(|queue| queue.spawn_thread());
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;

pub use lm_app::LocalMediaService;
pub use lm_core::{
    ExternalReference, LocalMedia, LocalMediaError, LocalMediaResult, MediaLocation, SurfaceId,
    UiContext,
};
