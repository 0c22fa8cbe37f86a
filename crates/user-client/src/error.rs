use thiserror::Error;

/// Failure raised by the transport before a response could be classified
#[derive(Error, Debug)]
pub enum Error {
    /// No response was obtained (refused connection, DNS, timeout)
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The transport treated a received response as a failure
    ///
    /// Only produced by transports that raise on status (reqwest's
    /// `error_for_status`); `UserApiClient` hands error statuses to the mapper instead.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Error::Http {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }

        if err.is_connect() || err.is_timeout() || err.is_request() {
            Error::Connect(err.to_string())
        } else {
            Error::Unexpected(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
