//! # lm-core
//!
//! Core domain models and ports for the local media service.
//!
//! This crate contains pure domain types and the port traits the application
//! layer depends on. It performs no I/O of its own.

pub mod app_dirs;
pub mod config;
pub mod errors;
pub mod media;
pub mod ports;

pub use config::AppConfig;
pub use errors::{LocalMediaError, LocalMediaResult};
pub use media::{
    AppIdentity, ExternalReference, HandoffAction, LocalMedia, MediaInfo, MediaLocation,
    RecipientGrant, StorageCapability, StorageCategory, SurfaceId, UiContext,
};
