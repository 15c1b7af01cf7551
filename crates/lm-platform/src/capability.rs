//! Host capability detection for storage.
//!
//! Decides, per call, whether the host can broker user-visible entries or
//! whether the legacy direct path strategy must be used.

use lm_core::ports::HostCapabilityPort;
use lm_core::StorageCapability;

/// Environment variable overriding the declared host API level.
pub const HOST_API_LEVEL_ENV: &str = "LM_HOST_API_LEVEL";

/// Resolve the host API level.
///
/// # Detection Logic
///
/// 1. `LM_HOST_API_LEVEL`, when set to a valid integer
/// 2. the level declared in configuration
/// 3. none: the host has no versioned storage broker
pub fn detect_host_api_level(configured: Option<u32>) -> Option<u32> {
    match std::env::var(HOST_API_LEVEL_ENV) {
        Ok(raw) => match raw.trim().parse::<u32>() {
            Ok(level) => Some(level),
            Err(_) => {
                tracing::warn!(value = %raw, "Ignoring invalid {HOST_API_LEVEL_ENV}");
                configured
            }
        },
        Err(_) => configured,
    }
}

/// Detect the storage capability of the current host.
///
/// Hosts without a declared API level have no storage broker and always use
/// the direct path strategy.
pub fn detect_storage_capability(configured: Option<u32>) -> StorageCapability {
    match detect_host_api_level(configured) {
        Some(level) => StorageCapability::for_api_level(level),
        None => StorageCapability::DirectPath,
    }
}

/// Re-evaluates the host capability on every call.
pub struct HostCapabilityDetector {
    configured_api_level: Option<u32>,
}

impl HostCapabilityDetector {
    pub fn new(configured_api_level: Option<u32>) -> Self {
        Self {
            configured_api_level,
        }
    }
}

impl HostCapabilityPort for HostCapabilityDetector {
    fn storage_capability(&self) -> StorageCapability {
        detect_storage_capability(self.configured_api_level)
    }
}
