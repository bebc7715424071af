//! Transport error taxonomy.

use thiserror::Error;

/// Errors surfaced by a transport implementation.
///
/// The pool absorbs these on the task-fetch path (an empty result plus an
/// observer event) and propagates them unchanged on the submission path.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not reach the gateway host.
    #[error("connection to {host} failed: {message}")]
    Connect {
        /// Host that could not be reached.
        host: String,
        /// Description of the connection failure.
        message: String,
    },

    /// The request did not complete in time.
    #[error("request to {host} timed out after {elapsed_ms}ms")]
    Timeout {
        /// Host the request was sent to.
        host: String,
        /// Elapsed time before the transport gave up, in milliseconds.
        elapsed_ms: u64,
    },

    /// The gateway answered with a protocol-level failure.
    #[error("gateway {host} returned status {code}: {message}")]
    Status {
        /// Host that answered.
        host: String,
        /// Protocol status code.
        code: u16,
        /// Message carried with the status.
        message: String,
    },

    /// The gateway response could not be decoded.
    #[error("failed to decode response from {host}: {message}")]
    Decode {
        /// Host whose response was malformed.
        host: String,
        /// Description of the decode failure.
        message: String,
    },

    /// Any other transport-level failure.
    #[error("transport error: {message}")]
    Other {
        /// Description of the failure.
        message: String,
    },
}

impl TransportError {
    /// Create a connection error.
    pub fn connect(host: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connect {
            host: host.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error.
    pub fn timeout(host: impl Into<String>, elapsed_ms: u64) -> Self {
        Self::Timeout {
            host: host.into(),
            elapsed_ms,
        }
    }

    /// Create a protocol status error.
    pub fn status(host: impl Into<String>, code: u16, message: impl Into<String>) -> Self {
        Self::Status {
            host: host.into(),
            code,
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(host: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            host: host.into(),
            message: message.into(),
        }
    }

    /// Create a generic transport error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether a scheduling loop may reasonably retry after this error.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connect { .. } | Self::Timeout { .. } => true,
            Self::Status { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
            Self::Decode { .. } | Self::Other { .. } => false,
        }
    }

    /// The host involved, when the error is tied to one.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        match self {
            Self::Connect { host, .. }
            | Self::Timeout { host, .. }
            | Self::Status { host, .. }
            | Self::Decode { host, .. } => Some(host),
            Self::Other { .. } => None,
        }
    }
}
