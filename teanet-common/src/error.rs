//! # Teanet Error Types
//!
//! ## Design Principles
//!
//! 1. **Closed Taxonomy**: A lookup fails in exactly one of three ways.
//! 2. **Cause Preserved**: Transport and decode failures keep the underlying
//!    error as their `source()`.
//! 3. **Client-Facing Display**: `Display` is the text echoed to the client
//!    after the lookup error label.
//! 4. **No Retry Hints**: Nothing in the system retries, so errors carry no
//!    recoverability flags.

use thiserror::Error;

/// Boxed cause for transport failures, independent of the HTTP stack.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type used by lookup implementations.
pub type LookupResult<T> = core::result::Result<T, LookupError>;

/// Coarse kind of a lookup failure, used as a structured log field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LookupErrorKind {
    /// The request never produced a response (DNS, connect, TLS, body read).
    Transport,
    /// The upstream answered with a non-success status.
    UpstreamStatus,
    /// The response body was not the expected JSON shape.
    Decode,
}

impl LookupErrorKind {
    /// Returns a stable lowercase label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::UpstreamStatus => "upstream_status",
            Self::Decode => "decode",
        }
    }
}

/// Errors produced by a summary lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport failure carrying the underlying cause.
    #[error("{0}")]
    Transport(#[source] BoxError),

    /// Upstream returned a non-success HTTP status; the body is not parsed.
    #[error("Wikipedia returned status {0}")]
    UpstreamStatus(u16),

    /// The response body could not be decoded.
    #[error("{0}")]
    Decode(#[source] serde_json::Error),
}

impl LookupError {
    /// Wraps any transport-level error.
    pub fn transport(cause: impl Into<BoxError>) -> Self {
        Self::Transport(cause.into())
    }

    /// Returns the coarse kind of the error.
    pub const fn kind(&self) -> LookupErrorKind {
        match self {
            Self::Transport(_) => LookupErrorKind::Transport,
            Self::UpstreamStatus(_) => LookupErrorKind::UpstreamStatus,
            Self::Decode(_) => LookupErrorKind::Decode,
        }
    }

    /// Returns the upstream status code, if that is why the lookup failed.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::{LookupError, LookupErrorKind};

    #[test]
    fn upstream_status_display_contains_code() {
        let err = LookupError::UpstreamStatus(404);
        assert_eq!(err.to_string(), "Wikipedia returned status 404");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.kind(), LookupErrorKind::UpstreamStatus);
    }

    #[test]
    fn transport_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = LookupError::transport(io);
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.source().is_some());
        assert_eq!(err.kind().as_str(), "transport");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn decode_maps_kind() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LookupError::Decode(cause);
        assert_eq!(err.kind(), LookupErrorKind::Decode);
    }
}
