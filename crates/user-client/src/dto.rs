use resource_core::User;
use serde::Deserialize;

/// User as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserDto {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            id: dto.id,
            name: dto.name,
            username: dto.username,
            email: dto.email,
            phone: dto.phone.filter(|p| !p.is_empty()),
            website: dto.website.filter(|w| !w.is_empty()),
        }
    }
}
