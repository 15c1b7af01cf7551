//! # lm-platform
//!
//! Host integration for the local media service.
//!
//! This crate contains the implementations that depend on the host process and
//! operating system: execution contexts, the UI context slot, directory
//! resolution, capability detection and the handoff channel to the host UI.

pub mod app_dirs;
pub mod capability;
pub mod dispatcher;
pub mod handoff;
pub mod public_dirs;
pub mod ui_context;
