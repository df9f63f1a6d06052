// Shared kernel used by every bounded context

pub mod application; // Pagination primitives
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod scheduling; // Debounced tasks
pub mod utils; // Logging and validation

pub use config::AppConfig;
pub use errors::{AppError, AppResult};
