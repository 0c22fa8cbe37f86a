use crate::state::{ErrorInfo, ViewState};
use resource_core::{ErrorKind, User};

pub fn render_users(state: &ViewState<Vec<User>>) -> String {
    render(state, |users| {
        if users.is_empty() {
            return "No users".to_string();
        }
        users
            .iter()
            .map(|u| format!("{:>4}  {:<32} {}", u.id, u.display_name(), u.email))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

pub fn render_user(state: &ViewState<User>) -> String {
    render(state, |user| {
        let mut lines = vec![
            format!("{} [#{}]", user.display_name(), user.id),
            format!("  email:   {}", user.email),
        ];
        if let Some(phone) = &user.phone {
            lines.push(format!("  phone:   {}", phone));
        }
        if let Some(website) = &user.website {
            lines.push(format!("  website: {}", website));
        }
        lines.join("\n")
    })
}

fn render<T>(state: &ViewState<T>, body: impl FnOnce(&T) -> String) -> String {
    if state.is_loading {
        return "Loading...".to_string();
    }
    if let Some(error) = &state.error {
        return render_error(error);
    }
    match &state.data {
        Some(data) => body(data),
        None => String::new(),
    }
}

pub fn render_error(error: &ErrorInfo) -> String {
    match error.kind {
        ErrorKind::Network => format!("Error: {}", error.message),
        _ => format!("Error {}: {}", error.code, error.message),
    }
}
