use std::fmt;
use thiserror::Error;

/// Message used for transport failures where no response was received
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your internet connection.";

/// Message used whenever a failure carries no usable text of its own
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Classified failure of a remote call
///
/// The set of variants is closed: every failure that crosses the safe-call
/// boundary ends up as exactly one of these. `code` is the HTTP status where
/// one exists and `0` otherwise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No HTTP interaction took place (connectivity, DNS, timeout)
    #[error("{message}")]
    Network { message: String, code: u16 },

    /// The transport raised a protocol failure carrying a status code
    #[error("{message}")]
    Http { message: String, code: u16 },

    /// HTTP 500-599
    #[error("{message}")]
    Server { message: String, code: u16 },

    /// HTTP 400-499
    #[error("{message}")]
    Client { message: String, code: u16 },

    /// Anything else, including unexpected local failures
    #[error("{message}")]
    Unknown { message: String, code: u16 },
}

/// Fieldless tag of an [`ApiError`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Network,
    Http,
    Server,
    Client,
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Network => "network",
            ErrorKind::Http => "http",
            ErrorKind::Server => "server",
            ErrorKind::Client => "client",
            ErrorKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl ApiError {
    /// Connectivity failure with the default message and code 0
    pub fn network() -> Self {
        ApiError::Network {
            message: NETWORK_ERROR_MESSAGE.to_string(),
            code: 0,
        }
    }

    pub fn http(message: impl Into<String>, code: u16) -> Self {
        ApiError::Http {
            message: non_empty(message),
            code,
        }
    }

    pub fn server(message: impl Into<String>, code: u16) -> Self {
        ApiError::Server {
            message: non_empty(message),
            code,
        }
    }

    pub fn client(message: impl Into<String>, code: u16) -> Self {
        ApiError::Client {
            message: non_empty(message),
            code,
        }
    }

    pub fn unknown(message: impl Into<String>, code: u16) -> Self {
        ApiError::Unknown {
            message: non_empty(message),
            code,
        }
    }

    /// Build the variant matching a status code bucket
    ///
    /// 400-499 is a client error, 500-599 a server error, anything else unknown.
    pub fn from_status(message: impl Into<String>, code: u16) -> Self {
        match code {
            400..=499 => ApiError::client(message, code),
            500..=599 => ApiError::server(message, code),
            _ => ApiError::unknown(message, code),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Network { message, .. }
            | ApiError::Http { message, .. }
            | ApiError::Server { message, .. }
            | ApiError::Client { message, .. }
            | ApiError::Unknown { message, .. } => message,
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            ApiError::Network { code, .. }
            | ApiError::Http { code, .. }
            | ApiError::Server { code, .. }
            | ApiError::Client { code, .. }
            | ApiError::Unknown { code, .. } => *code,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::Http { .. } => ErrorKind::Http,
            ApiError::Server { .. } => ErrorKind::Server,
            ApiError::Client { .. } => ErrorKind::Client,
            ApiError::Unknown { .. } => ErrorKind::Unknown,
        }
    }
}

fn non_empty(message: impl Into<String>) -> String {
    let message = message.into();
    if message.trim().is_empty() {
        UNEXPECTED_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_defaults() {
        let error = ApiError::network();
        assert_eq!(error.kind(), ErrorKind::Network);
        assert_eq!(error.code(), 0);
        assert_eq!(error.message(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_empty_message_replaced() {
        let error = ApiError::client("   ", 400);
        assert_eq!(error.message(), UNEXPECTED_ERROR_MESSAGE);
        assert_eq!(error.code(), 400);
    }

    #[test]
    fn test_from_status_buckets() {
        assert_eq!(ApiError::from_status("x", 400).kind(), ErrorKind::Client);
        assert_eq!(ApiError::from_status("x", 499).kind(), ErrorKind::Client);
        assert_eq!(ApiError::from_status("x", 500).kind(), ErrorKind::Server);
        assert_eq!(ApiError::from_status("x", 599).kind(), ErrorKind::Server);
        assert_eq!(ApiError::from_status("x", 302).kind(), ErrorKind::Unknown);
        assert_eq!(ApiError::from_status("x", 600).kind(), ErrorKind::Unknown);
    }

    #[test]
    fn test_display_is_message() {
        let error = ApiError::server("Service down", 503);
        assert_eq!(error.to_string(), "Service down");
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(ApiError::client("a", 404), ApiError::client("a", 404));
        assert_ne!(ApiError::client("a", 404), ApiError::server("a", 404));
    }
}
