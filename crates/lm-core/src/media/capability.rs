/// Lowest host API level whose storage broker can create user-visible entries.
pub const MANAGED_STORE_MIN_API_LEVEL: u32 = 29;

/// Persistence strategy supported by the current host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageCapability {
    /// Host brokers creation of user-visible entries (newer hosts).
    ManagedStore,
    /// Caller resolves a public directory and writes to it directly (older hosts).
    DirectPath,
}

impl StorageCapability {
    pub fn for_api_level(api_level: u32) -> Self {
        if api_level >= MANAGED_STORE_MIN_API_LEVEL {
            Self::ManagedStore
        } else {
            Self::DirectPath
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManagedStore => "managed_store",
            Self::DirectPath => "direct_path",
        }
    }
}

/// Logical category of user-visible storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageCategory {
    Downloads,
}

impl StorageCategory {
    /// Directory name of the category inside a storage root.
    pub fn directory_name(&self) -> &'static str {
        match self {
            Self::Downloads => "Download",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn managed_store_starts_at_min_api_level() {
        assert_eq!(StorageCapability::for_api_level(28), StorageCapability::DirectPath);
        assert_eq!(StorageCapability::for_api_level(29), StorageCapability::ManagedStore);
        assert_eq!(StorageCapability::for_api_level(34), StorageCapability::ManagedStore);
        assert_eq!(StorageCapability::for_api_level(0), StorageCapability::DirectPath);
    }
}
