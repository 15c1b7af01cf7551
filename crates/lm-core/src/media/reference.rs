use std::fmt;

use url::Url;

pub const EXTERNAL_REFERENCE_SCHEME: &str = "content";

const FILE_PROVIDER_SUFFIX: &str = ".fileprovider";

/// Identity of the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub application_id: String,
}

impl AppIdentity {
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
        }
    }

    /// Authority under which this application exposes files to others.
    pub fn file_provider_authority(&self) -> String {
        format!("{}{}", self.application_id, FILE_PROVIDER_SUFFIX)
    }
}

/// Capability-scoped reference to a resource that may be handed to another
/// application without revealing its filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalReference(Url);

impl ExternalReference {
    /// Wraps a `content://` URL. Returns `None` for any other scheme.
    pub fn from_url(url: Url) -> Option<Self> {
        (url.scheme() == EXTERNAL_REFERENCE_SCHEME).then_some(Self(url))
    }

    pub fn authority(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ExternalReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
