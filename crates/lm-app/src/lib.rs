//! Local media application layer
//!
//! This crate contains the use cases exposed to the host (`save`, `share`,
//! `open`), the storage strategy selection behind `save`, and the primitives
//! that hop a logical task between the background and foreground contexts.

pub mod app_paths;
pub mod deps;
pub mod execution;
pub mod storage;
pub mod usecases;

pub use deps::LocalMediaDeps;
pub use storage::{StorageStrategy, StorageStrategySelector, TransferSettings};
pub use usecases::local_media::LocalMediaService;

#[cfg(test)]
mod test_support;
