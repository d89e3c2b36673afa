//! Unified error codes for the front desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Booking errors
//! - 5xxx: Room / hotel errors
//! - 6xxx: Restaurant errors
//! - 8xxx: Staff errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the UI layer can map them
/// to localized notification text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 4001,
    /// Status change not permitted by the transition table
    InvalidStatusTransition = 4002,
    /// Check-out is not after check-in
    InvalidDateRange = 4003,
    /// Room type capacity exceeded (reserved, never raised)
    CapacityExceeded = 4004,
    /// Booking id already exists
    BookingAlreadyExists = 4005,

    // ==================== 5xxx: Room / Hotel ====================
    /// Physical room not found
    RoomNotFound = 5001,
    /// Physical room is not available for assignment
    RoomNotAvailable = 5002,
    /// Room status change not permitted
    InvalidRoomStatusTransition = 5003,
    /// Room type not found
    RoomTypeNotFound = 5004,
    /// Hotel not found
    HotelNotFound = 5005,
    /// Room does not match the booking's room type or hotel
    RoomMismatch = 5006,

    // ==================== 6xxx: Restaurant ====================
    /// Restaurant order not found
    OrderNotFound = 6001,
    /// Order is no longer active
    OrderNotActive = 6002,
    /// Order item not found
    OrderItemNotFound = 6003,
    /// Invalid item quantity
    InvalidQuantity = 6004,
    /// Item prep status change not permitted
    InvalidPrepTransition = 6005,
    /// Order status change not permitted
    InvalidOrderTransition = 6006,
    /// Order has no items
    OrderEmpty = 6007,
    /// Menu item not available
    MenuItemUnavailable = 6008,

    // ==================== 8xxx: Staff ====================
    /// Staff member not found
    StaffNotFound = 8001,
    /// Invalid task duration
    InvalidTaskDuration = 8002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
    /// File read/write failed
    IoError = 9006,
    /// Snapshot (de)serialization failed
    SerializationError = 9007,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::InvalidStatusTransition => "Booking status change is not allowed",
            ErrorCode::InvalidDateRange => "Check-out must be after check-in",
            ErrorCode::CapacityExceeded => "Room type capacity exceeded",
            ErrorCode::BookingAlreadyExists => "Booking already exists",

            // Room / Hotel
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomNotAvailable => "Room is not available",
            ErrorCode::InvalidRoomStatusTransition => "Room status change is not allowed",
            ErrorCode::RoomTypeNotFound => "Room type not found",
            ErrorCode::HotelNotFound => "Hotel not found",
            ErrorCode::RoomMismatch => "Room does not match the booking",

            // Restaurant
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderNotActive => "Order is no longer active",
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::InvalidQuantity => "Invalid quantity",
            ErrorCode::InvalidPrepTransition => "Item preparation status change is not allowed",
            ErrorCode::InvalidOrderTransition => "Order status change is not allowed",
            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::MenuItemUnavailable => "Menu item is not available",

            // Staff
            ErrorCode::StaffNotFound => "Staff member not found",
            ErrorCode::InvalidTaskDuration => "Invalid task duration",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::IoError => "File operation failed",
            ErrorCode::SerializationError => "Serialization failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Booking
            4001 => Ok(ErrorCode::BookingNotFound),
            4002 => Ok(ErrorCode::InvalidStatusTransition),
            4003 => Ok(ErrorCode::InvalidDateRange),
            4004 => Ok(ErrorCode::CapacityExceeded),
            4005 => Ok(ErrorCode::BookingAlreadyExists),

            // Room / Hotel
            5001 => Ok(ErrorCode::RoomNotFound),
            5002 => Ok(ErrorCode::RoomNotAvailable),
            5003 => Ok(ErrorCode::InvalidRoomStatusTransition),
            5004 => Ok(ErrorCode::RoomTypeNotFound),
            5005 => Ok(ErrorCode::HotelNotFound),
            5006 => Ok(ErrorCode::RoomMismatch),

            // Restaurant
            6001 => Ok(ErrorCode::OrderNotFound),
            6002 => Ok(ErrorCode::OrderNotActive),
            6003 => Ok(ErrorCode::OrderItemNotFound),
            6004 => Ok(ErrorCode::InvalidQuantity),
            6005 => Ok(ErrorCode::InvalidPrepTransition),
            6006 => Ok(ErrorCode::InvalidOrderTransition),
            6007 => Ok(ErrorCode::OrderEmpty),
            6008 => Ok(ErrorCode::MenuItemUnavailable),

            // Staff
            8001 => Ok(ErrorCode::StaffNotFound),
            8002 => Ok(ErrorCode::InvalidTaskDuration),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::IoError),
            9007 => Ok(ErrorCode::SerializationError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
