//! Data models
//!
//! Plain records shared between the front desk engine and the UI layer.
//! Behavior (transition tables, occupancy queries) lives in `front-desk`.
//! All IDs are `String`; timestamps are Unix millis.

pub mod booking;
pub mod hotel;
pub mod restaurant;
pub mod room;
pub mod staff;

// Re-exports
pub use booking::*;
pub use hotel::*;
pub use restaurant::*;
pub use room::*;
pub use staff::*;
