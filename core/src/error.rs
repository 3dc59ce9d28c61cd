//! # Failure Signaling
//!
//! Defines the error raised when a data-access operation fails.
//!
//! The type is a pure signal: it carries a message and, optionally, the
//! lower-level error that triggered the failure. It performs no retry or
//! recovery of its own; callers propagate it with `?` until a boundary
//! interprets it.

use std::error::Error;

use thiserror::Error;

/// Convenience alias for fallible data-access operations.
pub type GectorResult<T> = std::result::Result<T, GectorError>;

/// A failed data-access operation.
///
/// Immutable after construction: the message and the optional underlying
/// cause are fixed at the point of failure. `Display` renders the message
/// alone; the cause remains reachable through [`std::error::Error::source`]
/// so reporting layers can walk the full chain.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct GectorError {
    message: String,
    #[source]
    cause: Option<Box<dyn Error + Send + Sync>>,
}

impl GectorError {
    /// Signals a failure described by `message`, with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Signals a failure that wraps a lower-level error.
    ///
    /// Accepts anything convertible into a boxed error, so call sites can
    /// hand over concrete error values directly:
    ///
    /// ```
    /// use gector_core::GectorError;
    ///
    /// let io = std::io::Error::other("connection reset");
    /// let err = GectorError::with_cause("failed to read column family", io);
    /// assert!(err.cause().is_some());
    /// ```
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// The human-readable description given at construction.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying error this failure wraps, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}
