//! Unified error system for the front desk
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`Notification`]: Transient operator-facing message built from an error
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Booking errors
//! - 5xxx: Room / hotel errors
//! - 6xxx: Restaurant errors
//! - 8xxx: Staff errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, Notification};
//!
//! let err = AppError::new(ErrorCode::InvalidStatusTransition)
//!     .with_detail("from", "checked-in")
//!     .with_detail("to", "confirmed");
//!
//! let notice = Notification::error(&err);
//! assert_eq!(notice.code, 4002);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, Notification};
