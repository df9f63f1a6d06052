// Auth bounded context: mock local login, no credentials leave the process
pub mod application;
pub mod domain;

pub use application::AuthStore;
pub use domain::{AuthState, User};
