use resource_core::{ApiError, ErrorKind, Resource, User};
use serde::Serialize;

/// Error as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    pub code: u16,
    #[serde(skip)]
    pub kind: ErrorKind,
}

impl From<ApiError> for ErrorInfo {
    fn from(error: ApiError) -> Self {
        Self {
            message: error.message().to_string(),
            code: error.code(),
            kind: error.kind(),
        }
    }
}

/// Snapshot of one fetch as seen by the screen
///
/// Transitions are pure: each returns a new snapshot built from the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState<T> {
    pub is_loading: bool,
    pub data: Option<T>,
    pub error: Option<ErrorInfo>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            data: None,
            error: None,
        }
    }
}

impl<T> ViewState<T> {
    /// Start loading; previous data stays visible, previous error is cleared
    pub fn loading(self) -> Self {
        Self {
            is_loading: true,
            error: None,
            ..self
        }
    }

    pub fn succeeded(self, data: T) -> Self {
        Self {
            is_loading: false,
            data: Some(data),
            error: None,
        }
    }

    /// Record a failure; previous data stays visible
    pub fn failed(self, error: ApiError) -> Self {
        Self {
            is_loading: false,
            error: Some(error.into()),
            ..self
        }
    }

    pub fn reduce(self, resource: Resource<T>) -> Self {
        match resource {
            Resource::Loading => self.loading(),
            Resource::Success(data) => self.succeeded(data),
            Resource::Error(error) => self.failed(error),
        }
    }
}

/// Everything the user screen renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserScreenState {
    pub users: ViewState<Vec<User>>,
    pub selected: ViewState<User>,
}

impl UserScreenState {
    pub fn users_mut(&mut self) -> &mut ViewState<Vec<User>> {
        &mut self.users
    }

    pub fn selected_mut(&mut self) -> &mut ViewState<User> {
        &mut self.selected
    }

    /// First error on screen, list before selection
    pub fn error(&self) -> Option<&ErrorInfo> {
        self.users.error.as_ref().or(self.selected.error.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_keeps_data_clears_error() {
        let state = ViewState {
            is_loading: false,
            data: Some(1),
            error: Some(ApiError::network().into()),
        };

        let next = state.loading();

        assert!(next.is_loading);
        assert_eq!(next.data, Some(1));
        assert!(next.error.is_none());
    }

    #[test]
    fn test_success_after_loading() {
        let state = ViewState::default()
            .reduce(Resource::Loading)
            .reduce(Resource::Success("done"));

        assert_eq!(
            state,
            ViewState {
                is_loading: false,
                data: Some("done"),
                error: None,
            }
        );
    }

    #[test]
    fn test_error_keeps_previous_data() {
        let state = ViewState::default()
            .reduce(Resource::Success(5))
            .reduce(Resource::Loading)
            .reduce(Resource::Error(ApiError::client("User not found", 404)));

        assert!(!state.is_loading);
        assert_eq!(state.data, Some(5));
        let error = state.error.unwrap();
        assert_eq!(error.message, "User not found");
        assert_eq!(error.code, 404);
        assert_eq!(error.kind, ErrorKind::Client);
    }

    #[test]
    fn test_screen_error_prefers_list() {
        let mut screen = UserScreenState::default();
        screen.selected = screen.selected.clone().failed(ApiError::network());
        assert_eq!(screen.error().map(|e| e.code), Some(0));

        screen.users = screen.users.clone().failed(ApiError::server("Down", 500));
        assert_eq!(screen.error().map(|e| e.code), Some(500));
    }
}
