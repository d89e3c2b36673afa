//! Day classification and availability queries
//!
//! For a given day every non-cancelled booking lands in at most one bucket:
//! - `check_ins`: arrives that day
//! - `check_outs`: departs that day
//! - `staying`: in house, strictly between arrival and departure
//!
//! A stay is half-open `[check_in, check_out)`, so the departure day never
//! counts as an occupied night.

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::Booking;

use crate::utils::DateRange;

/// Bookings bucketed for one day
#[derive(Debug, Clone, PartialEq)]
pub struct DayClassification<'a> {
    pub date: NaiveDate,
    pub check_ins: Vec<&'a Booking>,
    pub check_outs: Vec<&'a Booking>,
    pub staying: Vec<&'a Booking>,
}

impl<'a> DayClassification<'a> {
    /// Bookings holding a room the night of `date` (arrivals + in-house)
    pub fn occupying(&self) -> impl Iterator<Item = &'a Booking> + '_ {
        self.check_ins.iter().chain(self.staying.iter()).copied()
    }

    /// Sum of `rooms` over the occupying bookings
    pub fn rooms_occupied(&self) -> u32 {
        self.occupying().map(|b| b.rooms).sum()
    }

    pub fn counts(&self) -> DayOccupancy {
        DayOccupancy {
            date: self.date,
            check_ins: self.check_ins.len(),
            check_outs: self.check_outs.len(),
            staying: self.staying.len(),
            rooms_occupied: self.rooms_occupied(),
        }
    }
}

/// Per-day counts (calendar heat map / dashboard series)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayOccupancy {
    pub date: NaiveDate,
    pub check_ins: usize,
    pub check_outs: usize,
    pub staying: usize,
    pub rooms_occupied: u32,
}

fn matches_hotel(booking: &Booking, hotel_id: Option<&str>) -> bool {
    hotel_id.is_none_or(|id| booking.hotel_id == id)
}

/// Whether the booking holds a room the night of `date`
pub fn occupies(booking: &Booking, date: NaiveDate) -> bool {
    !booking.is_cancelled() && booking.check_in <= date && date < booking.check_out
}

/// Classify bookings for one day
///
/// `hotel_id = None` means all hotels. Cancelled bookings are skipped.
pub fn classify_bookings_for_day<'a>(
    bookings: &'a [Booking],
    hotel_id: Option<&str>,
    date: NaiveDate,
) -> DayClassification<'a> {
    let mut day = DayClassification {
        date,
        check_ins: Vec::new(),
        check_outs: Vec::new(),
        staying: Vec::new(),
    };

    for booking in bookings
        .iter()
        .filter(|b| !b.is_cancelled() && matches_hotel(b, hotel_id))
    {
        if booking.check_in == date {
            day.check_ins.push(booking);
        } else if booking.check_out == date {
            day.check_outs.push(booking);
        } else if booking.check_in < date && date < booking.check_out {
            day.staying.push(booking);
        }
    }

    day
}

/// Rooms of `room_type_id` still free the night of `date`
///
/// `capacity - Σ rooms` of the non-cancelled bookings of that room type
/// occupying the night, floored at zero (overbooking is not enforced).
pub fn available_rooms(
    bookings: &[Booking],
    room_type_capacity: u32,
    room_type_id: &str,
    date: NaiveDate,
) -> u32 {
    let occupied: u32 = bookings
        .iter()
        .filter(|b| b.room_type_id == room_type_id && occupies(b, date))
        .map(|b| b.rooms)
        .sum();
    room_type_capacity.saturating_sub(occupied)
}

/// Per-day counts over a range
pub fn occupancy_series(
    bookings: &[Booking],
    hotel_id: Option<&str>,
    range: &DateRange,
) -> Vec<DayOccupancy> {
    range
        .days()
        .map(|date| classify_bookings_for_day(bookings, hotel_id, date).counts())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::test_support::{booking, date};
    use shared::models::BookingStatus;

    #[test]
    fn test_buckets_are_exclusive() {
        let bookings = vec![
            booking("A", "2026-03-10", "2026-03-13", BookingStatus::Confirmed),
            booking("B", "2026-03-08", "2026-03-10", BookingStatus::CheckedIn),
            booking("C", "2026-03-09", "2026-03-12", BookingStatus::CheckedIn),
            booking("D", "2026-03-11", "2026-03-12", BookingStatus::Pending),
        ];
        let day = classify_bookings_for_day(&bookings, None, date("2026-03-10"));

        let ids = |v: &Vec<&Booking>| v.iter().map(|b| b.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&day.check_ins), vec!["A"]);
        assert_eq!(ids(&day.check_outs), vec!["B"]);
        assert_eq!(ids(&day.staying), vec!["C"]);
    }

    #[test]
    fn test_cancelled_never_classified() {
        let bookings = vec![booking(
            "X",
            "2026-03-10",
            "2026-03-13",
            BookingStatus::Cancelled,
        )];
        for day in ["2026-03-10", "2026-03-11", "2026-03-13"] {
            let c = classify_bookings_for_day(&bookings, None, date(day));
            assert!(c.check_ins.is_empty() && c.check_outs.is_empty() && c.staying.is_empty());
        }
    }

    #[test]
    fn test_hotel_filter() {
        let mut other = booking("B", "2026-03-10", "2026-03-12", BookingStatus::Confirmed);
        other.hotel_id = "h2".to_string();
        let bookings = vec![
            booking("A", "2026-03-10", "2026-03-12", BookingStatus::Confirmed),
            other,
        ];
        let day = classify_bookings_for_day(&bookings, Some("h1"), date("2026-03-10"));
        assert_eq!(day.check_ins.len(), 1);
        assert_eq!(day.check_ins[0].id, "A");

        let all = classify_bookings_for_day(&bookings, None, date("2026-03-10"));
        assert_eq!(all.check_ins.len(), 2);
    }

    #[test]
    fn test_available_rooms_counts_room_quantities() {
        let mut a = booking("A", "2026-03-14", "2026-03-17", BookingStatus::Confirmed);
        a.rooms = 2;
        let b = booking("B", "2026-03-15", "2026-03-16", BookingStatus::Pending);
        let c = booking("C", "2026-03-12", "2026-03-20", BookingStatus::CheckedIn);
        // departs that day: not occupying
        let d = booking("D", "2026-03-13", "2026-03-15", BookingStatus::CheckedIn);
        let bookings = vec![a, b, c, d];

        assert_eq!(available_rooms(&bookings, 5, "rt1", date("2026-03-15")), 1);
        assert_eq!(available_rooms(&bookings, 5, "other", date("2026-03-15")), 5);
    }

    #[test]
    fn test_available_rooms_never_negative() {
        let mut a = booking("A", "2026-03-14", "2026-03-17", BookingStatus::Confirmed);
        a.rooms = 7;
        assert_eq!(available_rooms(&[a], 5, "rt1", date("2026-03-15")), 0);
    }

    #[test]
    fn test_rooms_occupied_includes_arrivals() {
        let mut a = booking("A", "2026-03-15", "2026-03-17", BookingStatus::Confirmed);
        a.rooms = 2;
        let b = booking("B", "2026-03-10", "2026-03-20", BookingStatus::CheckedIn);
        let bookings = vec![a, b];
        let day = classify_bookings_for_day(&bookings, None, date("2026-03-15"));
        assert_eq!(day.rooms_occupied(), 3);
        assert_eq!(day.counts().staying, 1);
    }

    #[test]
    fn test_occupancy_series_length() {
        let bookings = vec![booking("A", "2026-03-10", "2026-03-13", BookingStatus::Confirmed)];
        let range = DateRange::month(2026, 3).unwrap();
        let series = occupancy_series(&bookings, None, &range);
        assert_eq!(series.len(), 31);
        assert_eq!(series[9].check_ins, 1);
        assert_eq!(series[10].staying, 1);
        assert_eq!(series[12].check_outs, 1);
    }
}
