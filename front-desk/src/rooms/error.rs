use shared::error::{AppError, ErrorCode};
use shared::models::RoomStatus;
use thiserror::Error;

/// Room and housekeeping errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Hotel not found: {0}")]
    HotelNotFound(String),

    #[error("Room type not found: {0}")]
    RoomTypeNotFound(String),

    #[error("Room {room_id} is {status}, not available")]
    RoomNotAvailable { room_id: String, status: RoomStatus },

    #[error("No {room_type_id} room available in hotel {hotel_id}")]
    NoRoomAvailable {
        hotel_id: String,
        room_type_id: String,
    },

    #[error("Room {room_id}: cannot move from {from} to {to}")]
    InvalidTransition {
        room_id: String,
        from: RoomStatus,
        to: RoomStatus,
    },

    #[error("Room {room_id} does not match booking {booking_id}")]
    RoomMismatch { room_id: String, booking_id: String },
}

pub type RoomResult<T> = Result<T, RoomError>;

impl From<RoomError> for AppError {
    fn from(err: RoomError) -> Self {
        let message = err.to_string();
        match err {
            RoomError::RoomNotFound(id) => {
                AppError::with_message(ErrorCode::RoomNotFound, message).with_detail("room_id", id)
            }
            RoomError::HotelNotFound(id) => {
                AppError::with_message(ErrorCode::HotelNotFound, message)
                    .with_detail("hotel_id", id)
            }
            RoomError::RoomTypeNotFound(id) => {
                AppError::with_message(ErrorCode::RoomTypeNotFound, message)
                    .with_detail("room_type_id", id)
            }
            RoomError::RoomNotAvailable { room_id, status } => {
                AppError::with_message(ErrorCode::RoomNotAvailable, message)
                    .with_detail("room_id", room_id)
                    .with_detail("status", status.as_str())
            }
            RoomError::NoRoomAvailable {
                hotel_id,
                room_type_id,
            } => AppError::with_message(ErrorCode::RoomNotAvailable, message)
                .with_detail("hotel_id", hotel_id)
                .with_detail("room_type_id", room_type_id),
            RoomError::InvalidTransition { room_id, from, to } => {
                AppError::with_message(ErrorCode::InvalidRoomStatusTransition, message)
                    .with_detail("room_id", room_id)
                    .with_detail("from", from.as_str())
                    .with_detail("to", to.as_str())
            }
            RoomError::RoomMismatch {
                room_id,
                booking_id,
            } => AppError::with_message(ErrorCode::RoomMismatch, message)
                .with_detail("room_id", room_id)
                .with_detail("booking_id", booking_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_available_maps_to_code() {
        let app: AppError = RoomError::RoomNotAvailable {
            room_id: "r101".into(),
            status: RoomStatus::Dirty,
        }
        .into();
        assert_eq!(app.code, ErrorCode::RoomNotAvailable);
        assert_eq!(app.message, "Room r101 is dirty, not available");
        assert_eq!(app.details.unwrap().get("status").unwrap(), "dirty");
    }

    #[test]
    fn test_transition_maps_to_code() {
        let app: AppError = RoomError::InvalidTransition {
            room_id: "r101".into(),
            from: RoomStatus::Occupied,
            to: RoomStatus::Available,
        }
        .into();
        assert_eq!(app.code, ErrorCode::InvalidRoomStatusTransition);
    }
}
