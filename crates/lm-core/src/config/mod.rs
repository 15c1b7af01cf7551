//! # Configuration DTOs
//!
//! Pure data: TOML is mapped onto these structs without validation. A missing
//! value stays empty or `None`; defaults are applied where the service is wired.

mod app_config;

pub use app_config::{AbsentResourcePolicy, AppConfig, SharedRootConfig};
