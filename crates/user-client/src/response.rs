use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP response as seen by the safe-call wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub body: Option<T>,
    pub error_body: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a body
    pub fn success(status: u16, body: T) -> Self {
        Self {
            status,
            body: Some(body),
            error_body: None,
        }
    }

    /// Failed response with an optional raw error body
    pub fn failure(status: u16, error_body: Option<String>) -> Self {
        Self {
            status,
            body: None,
            error_body,
        }
    }

    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Read a reqwest response, decoding JSON on success
    ///
    /// An empty success body becomes `None`. On failure the body is kept as
    /// text; an unreadable or empty body becomes `None`.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.ok().filter(|b| !b.is_empty());
            debug!(status = status.as_u16(), has_body = error_body.is_some(), "Received error response");
            return Ok(Self::failure(status.as_u16(), error_body));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Self {
                status: status.as_u16(),
                body: None,
                error_body: None,
            });
        }

        let body = serde_json::from_slice(&bytes)
            .map_err(|e| Error::Unexpected(format!("Failed to decode response body: {}", e)))?;

        Ok(Self::success(status.as_u16(), body))
    }
}
