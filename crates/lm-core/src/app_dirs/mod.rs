use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_cache_root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dirs_is_pure_fact_container() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/local-media"),
            app_cache_root: PathBuf::from("/tmp/cache/local-media"),
        };
        assert!(dirs.app_data_root.ends_with("local-media"));
        assert!(dirs.app_cache_root.starts_with("/tmp/cache"));
    }
}
