//! Physical room status (客房状态) and check-in/check-out assignment
//!
//! ```text
//! available ──► occupied ──► dirty ◄──► cleaning
//!     ▲ │                      │            │
//!     │ └──► maintenance ◄──► out-of-order  │
//!     └────────────────────────┴────────────┘
//! ```

use serde::Serialize;
use shared::models::{Booking, PhysicalRoom, RoomStatus};

use super::error::{RoomError, RoomResult};

/// Statuses reachable from `status` in one step
pub fn allowed_room_targets(status: RoomStatus) -> &'static [RoomStatus] {
    use RoomStatus::*;
    match status {
        Available => &[Occupied, Maintenance, OutOfOrder],
        Occupied => &[Dirty],
        Dirty => &[Cleaning, Available],
        Cleaning => &[Available, Dirty],
        Maintenance => &[Available, OutOfOrder],
        OutOfOrder => &[Maintenance, Available],
    }
}

pub fn can_change_room_status(from: RoomStatus, to: RoomStatus) -> bool {
    allowed_room_targets(from).contains(&to)
}

/// Move a room to `target`, returning the updated copy
pub fn change_room_status(room: &PhysicalRoom, target: RoomStatus) -> RoomResult<PhysicalRoom> {
    if !can_change_room_status(room.status, target) {
        tracing::warn!(
            room_id = %room.id,
            from = %room.status,
            to = %target,
            "Rejected room status change"
        );
        return Err(RoomError::InvalidTransition {
            room_id: room.id.clone(),
            from: room.status,
            to: target,
        });
    }
    let mut updated = room.clone();
    updated.status = target;
    Ok(updated)
}

/// Numeric room numbers order by value ("102" < "1001"), others after them
fn room_number_key(number: &str) -> (u64, &str) {
    (number.parse::<u32>().map_or(u64::MAX, u64::from), number)
}

/// First available room of the booking's hotel and room type, by room number
pub fn find_available_room<'a>(
    rooms: &'a [PhysicalRoom],
    hotel_id: &str,
    room_type_id: &str,
) -> Option<&'a PhysicalRoom> {
    rooms
        .iter()
        .filter(|r| {
            r.status == RoomStatus::Available
                && r.hotel_id == hotel_id
                && r.room_type_id == room_type_id
        })
        .min_by(|a, b| room_number_key(&a.room_number).cmp(&room_number_key(&b.room_number)))
}

/// Occupy `room` for `booking` and hand out `key_card`
pub fn assign_room(
    room: &PhysicalRoom,
    booking: &Booking,
    key_card: String,
) -> RoomResult<PhysicalRoom> {
    if room.hotel_id != booking.hotel_id || room.room_type_id != booking.room_type_id {
        return Err(RoomError::RoomMismatch {
            room_id: room.id.clone(),
            booking_id: booking.id.clone(),
        });
    }
    if room.status != RoomStatus::Available {
        return Err(RoomError::RoomNotAvailable {
            room_id: room.id.clone(),
            status: room.status,
        });
    }
    let mut updated = change_room_status(room, RoomStatus::Occupied)?;
    updated.current_booking_id = Some(booking.id.clone());
    updated.key_card = Some(key_card);
    Ok(updated)
}

/// Free the room after check-out: dirty, unlinked, key card revoked
pub fn release_room(room: &PhysicalRoom) -> RoomResult<PhysicalRoom> {
    let mut updated = change_room_status(room, RoomStatus::Dirty)?;
    updated.current_booking_id = None;
    updated.key_card = None;
    Ok(updated)
}

/// Room count per status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoomStatusSummary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub dirty: usize,
    pub cleaning: usize,
    pub maintenance: usize,
    pub out_of_order: usize,
}

impl RoomStatusSummary {
    pub fn get(&self, status: RoomStatus) -> usize {
        match status {
            RoomStatus::Available => self.available,
            RoomStatus::Occupied => self.occupied,
            RoomStatus::Dirty => self.dirty,
            RoomStatus::Cleaning => self.cleaning,
            RoomStatus::Maintenance => self.maintenance,
            RoomStatus::OutOfOrder => self.out_of_order,
        }
    }

    /// Occupied share of sellable rooms (maintenance/out-of-order excluded), in percent
    pub fn occupancy_rate(&self) -> f64 {
        let sellable = self.total - self.maintenance - self.out_of_order;
        if sellable == 0 {
            return 0.0;
        }
        self.occupied as f64 * 100.0 / sellable as f64
    }
}

/// Count rooms per status, optionally for one hotel
pub fn room_status_summary(rooms: &[PhysicalRoom], hotel_id: Option<&str>) -> RoomStatusSummary {
    let mut summary = RoomStatusSummary::default();
    for room in rooms
        .iter()
        .filter(|r| hotel_id.is_none_or(|id| r.hotel_id == id))
    {
        summary.total += 1;
        let slot = match room.status {
            RoomStatus::Available => &mut summary.available,
            RoomStatus::Occupied => &mut summary.occupied,
            RoomStatus::Dirty => &mut summary.dirty,
            RoomStatus::Cleaning => &mut summary.cleaning,
            RoomStatus::Maintenance => &mut summary.maintenance,
            RoomStatus::OutOfOrder => &mut summary.out_of_order,
        };
        *slot += 1;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::test_support::booking;
    use shared::models::BookingStatus;

    fn room(id: &str, number: &str, status: RoomStatus) -> PhysicalRoom {
        PhysicalRoom {
            id: id.to_string(),
            room_number: number.to_string(),
            floor: 1,
            room_type_id: "rt1".to_string(),
            hotel_id: "h1".to_string(),
            status,
            current_booking_id: None,
            key_card: None,
        }
    }

    #[test]
    fn test_table_has_no_self_loops_and_no_dead_ends() {
        for status in RoomStatus::ALL {
            assert!(!can_change_room_status(status, status));
            assert!(!allowed_room_targets(status).is_empty());
        }
    }

    #[test]
    fn test_occupied_must_go_through_dirty() {
        let r = room("r1", "101", RoomStatus::Occupied);
        assert!(change_room_status(&r, RoomStatus::Available).is_err());
        assert!(change_room_status(&r, RoomStatus::Cleaning).is_err());
        let dirty = change_room_status(&r, RoomStatus::Dirty).unwrap();
        let cleaning = change_room_status(&dirty, RoomStatus::Cleaning).unwrap();
        let ready = change_room_status(&cleaning, RoomStatus::Available).unwrap();
        assert_eq!(ready.status, RoomStatus::Available);
        // input untouched
        assert_eq!(r.status, RoomStatus::Occupied);
    }

    #[test]
    fn test_find_available_room_picks_lowest_number() {
        let rooms = vec![
            room("r3", "103", RoomStatus::Available),
            room("r1", "101", RoomStatus::Dirty),
            room("r2", "102", RoomStatus::Available),
        ];
        let found = find_available_room(&rooms, "h1", "rt1").unwrap();
        assert_eq!(found.id, "r2");
        assert!(find_available_room(&rooms, "h1", "rt2").is_none());
    }

    #[test]
    fn test_find_available_room_orders_numbers_by_value() {
        let rooms = vec![
            room("r1001", "1001", RoomStatus::Available),
            room("suite", "PH-A", RoomStatus::Available),
            room("r102", "102", RoomStatus::Available),
        ];
        assert_eq!(find_available_room(&rooms, "h1", "rt1").unwrap().id, "r102");

        let rooms = vec![
            room("suite", "PH-A", RoomStatus::Available),
            room("r1001", "1001", RoomStatus::Available),
        ];
        assert_eq!(find_available_room(&rooms, "h1", "rt1").unwrap().id, "r1001");
    }

    #[test]
    fn test_assign_and_release() {
        let b = booking("BK1", "2026-03-10", "2026-03-13", BookingStatus::Confirmed);
        let r = room("r1", "101", RoomStatus::Available);
        let occupied = assign_room(&r, &b, "KC-101-ABC".into()).unwrap();
        assert_eq!(occupied.status, RoomStatus::Occupied);
        assert_eq!(occupied.current_booking_id.as_deref(), Some("BK1"));
        assert_eq!(occupied.key_card.as_deref(), Some("KC-101-ABC"));

        let released = release_room(&occupied).unwrap();
        assert_eq!(released.status, RoomStatus::Dirty);
        assert!(released.current_booking_id.is_none());
        assert!(released.key_card.is_none());
    }

    #[test]
    fn test_assign_rejects_wrong_type_or_busy_room() {
        let b = booking("BK1", "2026-03-10", "2026-03-13", BookingStatus::Confirmed);
        let mut other_type = room("r1", "101", RoomStatus::Available);
        other_type.room_type_id = "rt2".to_string();
        assert!(matches!(
            assign_room(&other_type, &b, "KC".into()),
            Err(RoomError::RoomMismatch { .. })
        ));

        let dirty = room("r2", "102", RoomStatus::Dirty);
        assert!(matches!(
            assign_room(&dirty, &b, "KC".into()),
            Err(RoomError::RoomNotAvailable { .. })
        ));
    }

    #[test]
    fn test_summary() {
        let mut other_hotel = room("r9", "901", RoomStatus::Available);
        other_hotel.hotel_id = "h2".to_string();
        let rooms = vec![
            room("r1", "101", RoomStatus::Occupied),
            room("r2", "102", RoomStatus::Available),
            room("r3", "103", RoomStatus::OutOfOrder),
            room("r4", "104", RoomStatus::Dirty),
            other_hotel,
        ];
        let summary = room_status_summary(&rooms, Some("h1"));
        assert_eq!(summary.total, 4);
        assert_eq!(summary.get(RoomStatus::Occupied), 1);
        assert_eq!(summary.out_of_order, 1);
        // 1 occupied of 3 sellable
        assert!((summary.occupancy_rate() - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(room_status_summary(&rooms, None).total, 5);
    }
}
