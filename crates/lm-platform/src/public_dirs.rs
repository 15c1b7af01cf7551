use std::path::PathBuf;

use anyhow::Context;
use lm_core::ports::PublicDirectoryPort;
use lm_core::StorageCategory;

/// Resolves public directories through the platform's user directories.
pub struct DirsPublicDirectory {
    downloads_override: Option<PathBuf>,
}

impl DirsPublicDirectory {
    pub fn new(downloads_override: Option<PathBuf>) -> Self {
        Self { downloads_override }
    }
}

impl PublicDirectoryPort for DirsPublicDirectory {
    fn resolve_public_directory(&self, category: StorageCategory) -> anyhow::Result<PathBuf> {
        match category {
            StorageCategory::Downloads => match &self.downloads_override {
                Some(dir) => Ok(dir.clone()),
                None => dirs::download_dir().context("Public downloads directory is unavailable"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_the_platform_directory() {
        let directory = DirsPublicDirectory::new(Some(PathBuf::from("/srv/downloads")));
        assert_eq!(
            directory
                .resolve_public_directory(StorageCategory::Downloads)
                .unwrap(),
            PathBuf::from("/srv/downloads")
        );
    }
}
