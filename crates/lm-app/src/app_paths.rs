use std::path::PathBuf;

use lm_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub logs_dir: PathBuf,
    /// Default directory exposed to other applications through the file provider.
    pub shared_media_dir: PathBuf,
    /// Default root of the managed store when none is configured.
    pub managed_store_root: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            logs_dir: dirs.app_data_root.join("logs"),
            shared_media_dir: dirs.app_cache_root.join("media"),
            managed_store_root: dirs.app_data_root.join("store"),
        }
    }
}
