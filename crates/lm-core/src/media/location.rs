use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

/// Schemes that address the local filesystem namespace.
pub const LOCAL_FILE_SCHEMES: &[&str] = &["file", "local"];

/// Internal resource locator of a media resource, e.g. `file:///tmp/a.jpg`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaLocation(Url);

impl MediaLocation {
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw).map(Self)
    }

    pub fn from_file_path(path: impl AsRef<std::path::Path>) -> Option<Self> {
        Url::from_file_path(path).ok().map(Self)
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Whether the locator addresses the local filesystem: a local-file scheme,
    /// a hierarchical path, and no host other than `localhost`.
    pub fn is_local_file(&self) -> bool {
        if !LOCAL_FILE_SCHEMES.contains(&self.0.scheme()) || self.0.cannot_be_a_base() {
            return false;
        }
        matches!(self.0.host_str(), None | Some("") | Some("localhost"))
    }

    /// Filesystem path addressed by this locator, if it is a local-file locator.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if !self.is_local_file() {
            return None;
        }
        self.0.to_file_path().ok()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl FromStr for MediaLocation {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MediaLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
