//! Error kinds surfaced by the local media service boundary.

use thiserror::Error;

/// Classified failure of a `save`, `share` or `open` call.
///
/// Every public operation of the service resolves to `Ok(())` or one of
/// these kinds; nothing panics across the service boundary.
#[derive(Debug, Error)]
pub enum LocalMediaError {
    /// The media location does not address the local filesystem.
    ///
    /// This is a programming error on the caller's side and is never retried.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// No UI context was registered when the foreground phase ran.
    ///
    /// Recoverable: the caller may retry once a UI surface is attached.
    #[error("no UI context is registered")]
    ContextUnavailable,

    /// Opening, creating or transferring through a stream failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    /// An execution context was closed, or dropped the task before it completed.
    #[error("dispatch failed: {0}")]
    Dispatch(String),
}

impl LocalMediaError {
    #[must_use]
    pub fn io(context: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Io {
            context: context.into(),
            source: source.into(),
        }
    }

    #[must_use]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionViolation(message.into())
    }

    /// Short, stable name of the error kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PreconditionViolation(_) => "precondition_violation",
            Self::ContextUnavailable => "context_unavailable",
            Self::Io { .. } => "io_failure",
            Self::Dispatch(_) => "dispatch",
        }
    }
}

pub type LocalMediaResult<T> = Result<T, LocalMediaError>;
