pub mod account;
pub mod enums;
pub mod error;

// Re-export the core types to provide a clean public API.
pub use account::TraderAccount;
pub use enums::{AccountStatus, EvaluationModel, Platform};
pub use error::CoreError;
