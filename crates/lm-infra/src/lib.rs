//! Filesystem adapters for the local media service.

pub mod fs;
