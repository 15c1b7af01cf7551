//! Business logic use cases
//!
//! save  → StorageStrategySelector → managed store | direct path
//! share → reference derivation → foreground hop → chooser
//! open  → reference derivation → foreground hop → viewer

pub mod local_media;
