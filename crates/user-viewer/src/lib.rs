pub mod render;
pub mod state;
pub mod view_model;

pub use state::{ErrorInfo, UserScreenState, ViewState};
pub use view_model::UserViewModel;
