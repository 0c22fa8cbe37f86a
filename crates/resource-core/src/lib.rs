pub mod api_error;
pub mod collect;
pub mod config;
pub mod dto;
pub mod error;
pub mod mapper;
pub mod resource;
pub mod user;

pub use api_error::{ApiError, ErrorKind};
pub use collect::{collect_resource, start_with_loading, ResourceCollector};
pub use config::Config;
pub use dto::ErrorResponseDto;
pub use error::Error;
pub use mapper::{ApiErrorMapper, DefaultApiErrorMapper, StatusOverrideMapper, UserApiErrorMapper};
pub use resource::Resource;
pub use user::User;
