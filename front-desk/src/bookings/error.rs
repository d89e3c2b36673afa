use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};
use shared::models::BookingStatus;
use thiserror::Error;

/// Rejected status change
///
/// Carries the booking id and both ends of the attempted edge so the UI can
/// show which move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Booking {booking_id}: cannot move from {from} to {to}")]
pub struct TransitionError {
    pub booking_id: String,
    pub from: BookingStatus,
    pub to: BookingStatus,
}

/// Booking errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    #[error("Check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    #[error("Booking already exists: {0}")]
    BookingAlreadyExists(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type BookingResult<T> = Result<T, BookingError>;

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        let message = err.to_string();
        match err {
            BookingError::InvalidTransition(e) => {
                AppError::with_message(ErrorCode::InvalidStatusTransition, message)
                    .with_detail("booking_id", e.booking_id)
                    .with_detail("from", e.from.as_str())
                    .with_detail("to", e.to.as_str())
            }
            BookingError::InvalidDateRange {
                check_in,
                check_out,
            } => AppError::with_message(ErrorCode::InvalidDateRange, message)
                .with_detail("check_in", check_in.to_string())
                .with_detail("check_out", check_out.to_string()),
            BookingError::BookingNotFound(id) => {
                AppError::with_message(ErrorCode::BookingNotFound, message)
                    .with_detail("booking_id", id)
            }
            BookingError::BookingAlreadyExists(id) => {
                AppError::with_message(ErrorCode::BookingAlreadyExists, message)
                    .with_detail("booking_id", id)
            }
            BookingError::Validation(msg) => AppError::validation(msg),
        }
    }
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        BookingError::from(err).into()
    }
}
