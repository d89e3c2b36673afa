//! 工具模块 - 通用工具函数和类型
//!
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - date parsing and [`DateRange`]
//! - [`validation`] - text length limits

pub mod logger;
pub mod time;
pub mod validation;

pub use time::DateRange;

// Re-export error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode, Notification};
