use crate::api_error::{ApiError, UNEXPECTED_ERROR_MESSAGE};
use crate::dto::ErrorResponseDto;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Strategy turning a raw failure payload into an [`ApiError`]
pub trait ApiErrorMapper: Send + Sync {
    /// Classify an error body and HTTP status code. Must never fail.
    fn map_error(&self, error_body: Option<&str>, status_code: u16) -> ApiError;
}

impl<M: ApiErrorMapper + ?Sized> ApiErrorMapper for &M {
    fn map_error(&self, error_body: Option<&str>, status_code: u16) -> ApiError {
        (**self).map_error(error_body, status_code)
    }
}

impl<M: ApiErrorMapper + ?Sized> ApiErrorMapper for Arc<M> {
    fn map_error(&self, error_body: Option<&str>, status_code: u16) -> ApiError {
        (**self).map_error(error_body, status_code)
    }
}

impl<M: ApiErrorMapper + ?Sized> ApiErrorMapper for Box<M> {
    fn map_error(&self, error_body: Option<&str>, status_code: u16) -> ApiError {
        (**self).map_error(error_body, status_code)
    }
}

/// Parses `{"message": ..., "code": ...}` bodies and buckets by status code
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultApiErrorMapper;

impl DefaultApiErrorMapper {
    fn extract_message(error_body: Option<&str>) -> Option<String> {
        let body = error_body?;
        match serde_json::from_str::<ErrorResponseDto>(body) {
            Ok(dto) => dto.message.filter(|m| !m.trim().is_empty()),
            Err(e) => {
                debug!(error = %e, "Error body is not a recognised error response");
                None
            }
        }
    }
}

impl ApiErrorMapper for DefaultApiErrorMapper {
    fn map_error(&self, error_body: Option<&str>, status_code: u16) -> ApiError {
        let message = Self::extract_message(error_body)
            .unwrap_or_else(|| format!("{} (code {})", UNEXPECTED_ERROR_MESSAGE, status_code));

        ApiError::from_status(message, status_code)
    }
}

/// Replaces the message of selected status codes with fixed text
///
/// Overridden codes ignore the body entirely. All other codes go to the
/// fallback untouched, so overrides stack by nesting one mapper in another.
#[derive(Debug, Clone)]
pub struct StatusOverrideMapper<F = DefaultApiErrorMapper> {
    overrides: HashMap<u16, String>,
    fallback: F,
}

impl<F: ApiErrorMapper> StatusOverrideMapper<F> {
    pub fn new(fallback: F) -> Self {
        Self {
            overrides: HashMap::new(),
            fallback,
        }
    }

    /// Add a fixed message for a status code
    pub fn with_override(mut self, status_code: u16, message: impl Into<String>) -> Self {
        self.overrides.insert(status_code, message.into());
        self
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<F: ApiErrorMapper> ApiErrorMapper for StatusOverrideMapper<F> {
    fn map_error(&self, error_body: Option<&str>, status_code: u16) -> ApiError {
        match self.overrides.get(&status_code) {
            Some(message) => ApiError::from_status(message.clone(), status_code),
            None => self.fallback.map_error(error_body, status_code),
        }
    }
}

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const USER_FORBIDDEN_MESSAGE: &str = "You don't have permission to access this user";

/// Error mapper for the user endpoints
#[derive(Debug, Clone)]
pub struct UserApiErrorMapper<F = DefaultApiErrorMapper> {
    inner: StatusOverrideMapper<F>,
}

impl UserApiErrorMapper {
    pub fn new() -> Self {
        Self::with_fallback(DefaultApiErrorMapper)
    }
}

impl Default for UserApiErrorMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ApiErrorMapper> UserApiErrorMapper<F> {
    pub fn with_fallback(fallback: F) -> Self {
        Self {
            inner: StatusOverrideMapper::new(fallback)
                .with_override(404, USER_NOT_FOUND_MESSAGE)
                .with_override(403, USER_FORBIDDEN_MESSAGE),
        }
    }
}

impl<F: ApiErrorMapper> ApiErrorMapper for UserApiErrorMapper<F> {
    fn map_error(&self, error_body: Option<&str>, status_code: u16) -> ApiError {
        self.inner.map_error(error_body, status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_error::ErrorKind;

    #[test]
    fn test_client_range_without_body() {
        let mapper = DefaultApiErrorMapper;
        for code in 400..=499 {
            let error = mapper.map_error(None, code);
            assert_eq!(error.kind(), ErrorKind::Client);
            assert_eq!(error.code(), code);
            assert!(error.message().contains(&code.to_string()));
        }
    }

    #[test]
    fn test_client_range_with_unparseable_body() {
        let mapper = DefaultApiErrorMapper;
        for code in 400..=499 {
            let error = mapper.map_error(Some("<html>oops</html>"), code);
            assert_eq!(error.kind(), ErrorKind::Client);
            assert!(error.message().contains(&code.to_string()));
        }
    }

    #[test]
    fn test_server_range() {
        let mapper = DefaultApiErrorMapper;
        for code in 500..=599 {
            assert_eq!(mapper.map_error(None, code).kind(), ErrorKind::Server);
            assert_eq!(
                mapper.map_error(Some(r#"{"message":"down"}"#), code).kind(),
                ErrorKind::Server
            );
        }
    }

    #[test]
    fn test_other_codes_are_unknown() {
        let mapper = DefaultApiErrorMapper;
        for code in [0, 200, 204, 301, 399, 600, 999] {
            assert_eq!(mapper.map_error(None, code).kind(), ErrorKind::Unknown);
        }
    }

    #[test]
    fn test_body_message_used() {
        let error = DefaultApiErrorMapper.map_error(Some(r#"{"message": "X"}"#), 418);
        assert_eq!(error, ApiError::client("X", 418));
    }

    #[test]
    fn test_blank_body_message_falls_back() {
        let error = DefaultApiErrorMapper.map_error(Some(r#"{"message": "  "}"#), 500);
        assert_eq!(error.message(), "An unexpected error occurred (code 500)");
    }

    #[test]
    fn test_malformed_body_never_fails() {
        let mapper = DefaultApiErrorMapper;
        for body in ["", "not json", "{", "[1,2,3]", r#"{"message": 5}"#, "null"] {
            let error = mapper.map_error(Some(body), 400);
            assert_eq!(error.kind(), ErrorKind::Client);
            assert!(!error.message().is_empty());
        }
    }

    #[test]
    fn test_user_mapper_overrides() {
        let mapper = UserApiErrorMapper::new();

        let not_found = mapper.map_error(Some(r#"{"message":"ignored"}"#), 404);
        assert_eq!(not_found, ApiError::client("User not found", 404));

        let forbidden = mapper.map_error(None, 403);
        assert_eq!(
            forbidden,
            ApiError::client("You don't have permission to access this user", 403)
        );
    }

    #[test]
    fn test_user_mapper_delegates_other_codes() {
        let mapper = UserApiErrorMapper::new();
        let bodies = [None, Some("garbage"), Some(r#"{"message":"Slow down"}"#)];

        for code in [0, 200, 400, 401, 429, 500, 503, 700] {
            for body in bodies {
                assert_eq!(
                    mapper.map_error(body, code),
                    DefaultApiErrorMapper.map_error(body, code)
                );
            }
        }
    }

    #[test]
    fn test_overrides_stack() {
        let mapper = StatusOverrideMapper::new(UserApiErrorMapper::new())
            .with_override(401, "Please sign in");

        assert_eq!(mapper.map_error(None, 401).message(), "Please sign in");
        assert_eq!(mapper.map_error(None, 404).message(), "User not found");
        assert_eq!(mapper.map_error(None, 502).kind(), ErrorKind::Server);
    }

    #[test]
    fn test_shared_mapper_as_trait_object() {
        let mapper: Arc<dyn ApiErrorMapper> = Arc::new(UserApiErrorMapper::new());
        assert_eq!(mapper.map_error(None, 404).message(), "User not found");
    }
}
