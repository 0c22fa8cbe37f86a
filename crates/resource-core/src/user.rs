use serde::{Deserialize, Serialize};

/// A person in the user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl User {
    /// `"Leanne Graham (@Bret)"`
    pub fn display_name(&self) -> String {
        format!("{} (@{})", self.name, self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let user = User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: None,
            website: None,
        };

        assert_eq!(user.display_name(), "Leanne Graham (@Bret)");
    }
}
