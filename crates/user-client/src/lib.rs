mod api;
mod dto;
mod error;
mod repository;
mod response;
pub mod safe_call;
mod use_case;

pub use api::{UserApi, UserApiClient};
pub use dto::UserDto;
pub use error::{Error, Result};
pub use repository::UserRepository;
pub use response::ApiResponse;
pub use safe_call::{execute_api_call, safe_api_call};
pub use use_case::{GetUserUseCase, GetUsersUseCase};
