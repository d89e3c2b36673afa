//! Booking Model (预订)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Timestamp;

/// Booking lifecycle status
///
/// Serialized in kebab-case (`checked-in`, `checked-out`) to match the
/// status strings shown on the booking board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 6] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked-in",
            Self::CheckedOut => "checked-out",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown booking status: {}", s))
    }
}

/// Guest contact record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GuestContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
}

/// Booking entity
///
/// `check_in` is the inclusive first night, `check_out` the exclusive
/// departure day. `check_out > check_in` always holds for stored bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    /// Hotel reference
    pub hotel_id: String,
    /// Room type reference (used for availability counts)
    pub room_type_id: String,
    /// Room type display name snapshot
    pub room_name: String,
    /// Rate plan display name snapshot
    pub plan_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    /// Number of rooms held by this booking (>= 1)
    pub rooms: u32,
    pub guest: GuestContact,
    /// Total amount in currency unit
    pub total_amount: f64,
    #[serde(default)]
    pub status: BookingStatus,
    /// Payment method tag (CARD, CASH, PAY_AT_HOTEL, ...)
    pub payment_method: String,
    pub created_at: Timestamp,
    /// Actual check-in time, set by the checked-in transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<Timestamp>,
    /// Actual check-out time, set by the checked-out transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<Timestamp>,
    /// Assigned physical room (set at check-in)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl Booking {
    /// Number of nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}

/// Create booking payload (quick-booking / booking form submission)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub hotel_id: String,
    pub room_type_id: String,
    pub room_name: String,
    pub plan_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default = "default_rooms")]
    pub rooms: u32,
    pub guest: GuestContact,
    pub total_amount: f64,
    pub payment_method: String,
    /// Initial status: `pending` (default) or `confirmed`
    #[serde(default)]
    pub status: Option<BookingStatus>,
    pub special_requests: Option<String>,
}

fn default_rooms() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_is_kebab_case() {
        let json = serde_json::to_string(&BookingStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"checked-in\"");

        let status: BookingStatus = serde_json::from_str("\"checked-out\"").unwrap();
        assert_eq!(status, BookingStatus::CheckedOut);
    }

    #[test]
    fn test_status_from_str_matches_display() {
        for status in BookingStatus::ALL {
            assert_eq!(status.to_string().parse::<BookingStatus>(), Ok(status));
        }
        assert!("checkedin".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_booking_create_defaults() {
        let json = r#"{
            "hotel_id": "h1",
            "room_type_id": "rt1",
            "room_name": "Deluxe King",
            "plan_name": "Room Only",
            "check_in": "2026-03-10",
            "check_out": "2026-03-13",
            "adults": 2,
            "guest": {"name": "Ana", "email": "ana@example.com", "phone": "", "country": "ES"},
            "total_amount": 360.0,
            "payment_method": "CARD",
            "special_requests": null
        }"#;
        let payload: BookingCreate = serde_json::from_str(json).unwrap();
        assert_eq!(payload.rooms, 1);
        assert_eq!(payload.children, 0);
        assert!(payload.status.is_none());
    }
}
