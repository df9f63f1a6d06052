pub mod auth_state;
pub mod user;

pub use auth_state::AuthState;
pub use user::User;
