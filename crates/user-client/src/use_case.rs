use crate::api::UserApi;
use crate::repository::UserRepository;
use futures::{Stream, StreamExt};
use resource_core::{Resource, User};

/// Fetch the full user list as domain values
#[derive(Clone)]
pub struct GetUsersUseCase<A> {
    repository: UserRepository<A>,
}

impl<A: UserApi> GetUsersUseCase<A> {
    pub fn new(repository: UserRepository<A>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> impl Stream<Item = Resource<Vec<User>>> + Send + 'static {
        self.repository
            .get_users()
            .map(|resource| resource.map_items(User::from))
    }
}

/// Fetch a single user as a domain value
#[derive(Clone)]
pub struct GetUserUseCase<A> {
    repository: UserRepository<A>,
}

impl<A: UserApi> GetUserUseCase<A> {
    pub fn new(repository: UserRepository<A>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, id: u64) -> impl Stream<Item = Resource<User>> + Send + 'static {
        self.repository
            .get_user(id)
            .map(|resource| resource.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::UserDto;
    use crate::error::{Error, Result};
    use crate::response::ApiResponse;
    use resource_core::ApiError;

    /// In-memory api returning canned responses
    #[derive(Clone)]
    struct FakeUserApi {
        users: Vec<UserDto>,
    }

    impl UserApi for FakeUserApi {
        async fn get_users(&self) -> Result<ApiResponse<Vec<UserDto>>> {
            Ok(ApiResponse::success(200, self.users.clone()))
        }

        async fn get_user(&self, id: u64) -> Result<ApiResponse<UserDto>> {
            match self.users.iter().find(|u| u.id == id) {
                Some(user) => Ok(ApiResponse::success(200, user.clone())),
                None if id == 0 => Err(Error::Connect("offline".to_string())),
                None => Ok(ApiResponse::failure(404, None)),
            }
        }
    }

    fn dto(id: u64, username: &str) -> UserDto {
        UserDto {
            id,
            name: format!("User {}", id),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            phone: None,
            website: None,
        }
    }

    fn use_cases() -> (GetUsersUseCase<FakeUserApi>, GetUserUseCase<FakeUserApi>) {
        let api = FakeUserApi {
            users: vec![dto(1, "ada"), dto(2, "grace"), dto(3, "linus")],
        };
        let repository = UserRepository::new(api);
        (
            GetUsersUseCase::new(repository.clone()),
            GetUserUseCase::new(repository),
        )
    }

    #[tokio::test]
    async fn test_users_mapped_element_wise() {
        let (get_users, _) = use_cases();

        let values: Vec<_> = get_users.execute().collect().await;

        assert_eq!(values.len(), 1);
        let names: Vec<_> = values[0]
            .data()
            .unwrap()
            .iter()
            .map(|u| u.username.as_str())
            .collect();
        assert_eq!(names, vec!["ada", "grace", "linus"]);
    }

    #[tokio::test]
    async fn test_error_passes_through_unchanged() {
        let (_, get_user) = use_cases();

        let values: Vec<_> = get_user.execute(9).collect().await;

        assert_eq!(values, vec![Resource::Error(ApiError::client("User not found", 404))]);
    }

    #[tokio::test]
    async fn test_network_error_passes_through() {
        let (_, get_user) = use_cases();

        let values: Vec<_> = get_user.execute(0).collect().await;

        assert_eq!(values, vec![Resource::Error(ApiError::network())]);
    }
}
