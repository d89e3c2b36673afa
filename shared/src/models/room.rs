//! Physical Room Model (客房)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Housekeeping status of a physical room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Dirty,
    Cleaning,
    Maintenance,
    OutOfOrder,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 6] = [
        RoomStatus::Available,
        RoomStatus::Occupied,
        RoomStatus::Dirty,
        RoomStatus::Cleaning,
        RoomStatus::Maintenance,
        RoomStatus::OutOfOrder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Dirty => "dirty",
            Self::Cleaning => "cleaning",
            Self::Maintenance => "maintenance",
            Self::OutOfOrder => "out-of-order",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical room entity
///
/// Lifecycle is independent of bookings: a room is reassigned across
/// bookings through check-in / check-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalRoom {
    pub id: String,
    pub room_number: String,
    pub floor: i32,
    pub room_type_id: String,
    pub hotel_id: String,
    #[serde(default)]
    pub status: RoomStatus,
    /// Booking currently holding the room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_booking_id: Option<String>,
    /// Key-card code issued at the last check-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_card: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_status_serde() {
        let json = serde_json::to_string(&RoomStatus::OutOfOrder).unwrap();
        assert_eq!(json, "\"out-of-order\"");
        for status in RoomStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_room_defaults_to_available() {
        let room: PhysicalRoom = serde_json::from_str(
            r#"{"id":"r101","room_number":"101","floor":1,"room_type_id":"rt1","hotel_id":"h1"}"#,
        )
        .unwrap();
        assert_eq!(room.status, RoomStatus::Available);
        assert!(room.current_booking_id.is_none());
    }
}
