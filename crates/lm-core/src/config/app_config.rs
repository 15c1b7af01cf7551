use std::path::PathBuf;

use serde::Deserialize;

/// What to do when the storage broker refuses an entry or the media's input
/// stream cannot be opened during a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsentResourcePolicy {
    /// Report the save as an I/O failure.
    #[default]
    Fail,
    /// Treat the save as a successful no-op and log a warning.
    Ignore,
}

impl AbsentResourcePolicy {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "fail" => Some(Self::Fail),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }
}

/// A directory the file provider is allowed to expose, under a public name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SharedRootConfig {
    pub name: String,
    pub path: PathBuf,
}

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Host application identifier (may be empty - that is a fact, not an error)
    pub application_id: String,

    /// Host platform API level, if declared
    pub host_api_level: Option<u32>,

    /// Override for the public downloads directory used by the direct path strategy
    pub downloads_dir: Option<PathBuf>,

    /// Root under which the managed store creates its entries
    pub managed_store_root: Option<PathBuf>,

    /// Size of the intermediate buffer used when transferring bytes
    pub transfer_buffer_bytes: Option<usize>,

    /// `None` when the key is missing or holds an unknown value
    pub absent_resource: Option<AbsentResourcePolicy>,

    /// Directories exposed through the file provider
    pub shared_roots: Vec<SharedRootConfig>,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Must not contain validation or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str| toml_value.get(name);

        let shared_roots = match section("sharing").and_then(|s| s.get("roots")) {
            Some(roots) => roots.clone().try_into::<Vec<SharedRootConfig>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            application_id: section("app")
                .and_then(|a| a.get("application_id"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            host_api_level: section("host")
                .and_then(|h| h.get("api_level"))
                .and_then(|v| v.as_integer())
                .and_then(|v| u32::try_from(v).ok()),
            downloads_dir: section("storage")
                .and_then(|s| s.get("downloads_dir"))
                .and_then(|v| v.as_str())
                .map(PathBuf::from),
            managed_store_root: section("storage")
                .and_then(|s| s.get("managed_store_root"))
                .and_then(|v| v.as_str())
                .map(PathBuf::from),
            transfer_buffer_bytes: section("storage")
                .and_then(|s| s.get("transfer_buffer_bytes"))
                .and_then(|v| v.as_integer())
                .and_then(|v| usize::try_from(v).ok()),
            absent_resource: section("storage")
                .and_then(|s| s.get("absent_resource"))
                .and_then(|v| v.as_str())
                .and_then(AbsentResourcePolicy::parse),
            shared_roots,
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            application_id: String::new(),
            host_api_level: None,
            downloads_dir: None,
            managed_store_root: None,
            transfer_buffer_bytes: None,
            absent_resource: None,
            shared_roots: Vec::new(),
        }
    }
}
