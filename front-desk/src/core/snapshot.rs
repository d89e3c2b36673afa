//! JSON snapshot of the whole front desk state
//!
//! Used to seed a [`super::HotelStore`] at startup. Every collection is
//! optional in the document.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::models::{Booking, Hotel, MenuItem, PhysicalRoom, RestaurantOrder, StaffMember};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub rooms: Vec<PhysicalRoom>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    #[serde(default)]
    pub orders: Vec<RestaurantOrder>,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read a snapshot file
pub fn load_snapshot(path: impl AsRef<Path>) -> AppResult<Snapshot> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_detail("path", path.display().to_string())
    })?;
    let snapshot = Snapshot::from_json(&json)?;
    tracing::info!(
        path = %path.display(),
        hotels = snapshot.hotels.len(),
        bookings = snapshot.bookings.len(),
        rooms = snapshot.rooms.len(),
        "Loaded snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_empty_document() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_partial_document() {
        let snapshot = Snapshot::from_json(
            r#"{"menu": [{"id":"m1","name":"Tortilla","category":"Tapas","price":6.5}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.menu.len(), 1);
        assert!(snapshot.bookings.is_empty());
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let err = Snapshot::from_json("{\"bookings\": 3}").unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_snapshot("/definitely/not/here.json").unwrap_err();
        assert_eq!(err.code, ErrorCode::IoError);
        assert!(err.details.unwrap().contains_key("path"));
    }
}
