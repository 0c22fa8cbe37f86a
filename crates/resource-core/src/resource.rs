use crate::api_error::ApiError;

/// State of a single remote call attempt
///
/// A new value is produced for every state; values are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error(ApiError),
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Resource::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Resource::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Map the success payload, passing `Loading` and `Error` through
    ///
    /// `f` is only invoked for `Success`.
    pub fn map<U, F>(self, f: F) -> Resource<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Error(error) => Resource::Error(error),
        }
    }

    /// Terminal outcome as a `Result`, or `None` while loading
    pub fn into_result(self) -> Option<Result<T, ApiError>> {
        match self {
            Resource::Loading => None,
            Resource::Success(data) => Some(Ok(data)),
            Resource::Error(error) => Some(Err(error)),
        }
    }
}

impl<T> Resource<Vec<T>> {
    /// Map every element of a successful list payload
    pub fn map_items<U, F>(self, f: F) -> Resource<Vec<U>>
    where
        F: FnMut(T) -> U,
    {
        self.map(|items| items.into_iter().map(f).collect())
    }
}

impl<T> From<ApiError> for Resource<T> {
    fn from(error: ApiError) -> Self {
        Resource::Error(error)
    }
}
