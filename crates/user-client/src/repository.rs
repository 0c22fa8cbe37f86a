use crate::api::UserApi;
use crate::dto::UserDto;
use crate::safe_call::safe_api_call;
use futures::Stream;
use resource_core::{ApiErrorMapper, Resource, UserApiErrorMapper};
use std::sync::Arc;

/// Wraps every [`UserApi`] call in the safe-call boundary
#[derive(Clone)]
pub struct UserRepository<A> {
    api: A,
    mapper: Arc<dyn ApiErrorMapper>,
}

impl<A: UserApi> UserRepository<A> {
    /// Repository classifying failures with [`UserApiErrorMapper`]
    pub fn new(api: A) -> Self {
        Self::with_mapper(api, Arc::new(UserApiErrorMapper::new()))
    }

    pub fn with_mapper(api: A, mapper: Arc<dyn ApiErrorMapper>) -> Self {
        Self { api, mapper }
    }

    pub fn get_users(&self) -> impl Stream<Item = Resource<Vec<UserDto>>> + Send + 'static {
        let api = self.api.clone();
        safe_api_call(self.mapper.clone(), move || async move { api.get_users().await })
    }

    pub fn get_user(&self, id: u64) -> impl Stream<Item = Resource<UserDto>> + Send + 'static {
        let api = self.api.clone();
        safe_api_call(self.mapper.clone(), move || async move { api.get_user(id).await })
    }
}
