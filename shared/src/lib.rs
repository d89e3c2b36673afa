//! Shared types for the hotel front desk
//!
//! Entity records, unified error types and small utility helpers used by
//! the `front-desk` engine and anything that renders its state.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, Notification};
pub use serde::{Deserialize, Serialize};
