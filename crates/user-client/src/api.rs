use crate::dto::UserDto;
use crate::error::Result;
use crate::response::ApiResponse;
use reqwest::Client;
use resource_core::Config;
use std::future::Future;
use tracing::debug;

/// Remote user directory endpoints
pub trait UserApi: Send + Sync + Clone + 'static {
    /// `GET /users`
    fn get_users(&self) -> impl Future<Output = Result<ApiResponse<Vec<UserDto>>>> + Send;

    /// `GET /users/{id}`
    fn get_user(&self, id: u64) -> impl Future<Output = Result<ApiResponse<UserDto>>> + Send;
}

/// reqwest-backed [`UserApi`]
#[derive(Clone)]
pub struct UserApiClient {
    client: Client,
    base_url: String,
}

impl UserApiClient {
    /// Create a new UserApiClient
    ///
    /// # Arguments
    /// * `config` - Supplies the base URL and the request/connect timeouts
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.user_api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T>(&self, path: &str) -> Result<ApiResponse<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Sending request");

        let response = self.client.get(&url).send().await?;
        ApiResponse::from_reqwest(response).await
    }
}

impl UserApi for UserApiClient {
    async fn get_users(&self) -> Result<ApiResponse<Vec<UserDto>>> {
        self.get("/users").await
    }

    async fn get_user(&self, id: u64) -> Result<ApiResponse<UserDto>> {
        self.get(&format!("/users/{}", id)).await
    }
}
