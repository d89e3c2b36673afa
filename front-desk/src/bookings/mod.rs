//! Booking domain: lifecycle, occupancy queries, reschedule and reports
//!
//! Everything here is a pure function over in-memory booking slices. State
//! changes return new values; [`crate::core::HotelStore`] swaps them in.

pub mod create;
pub mod error;
pub mod export;
pub mod occupancy;
pub mod report;
pub mod reschedule;
pub mod transition;

pub use create::{create_booking, nights, quote_total, validate_booking_create};
pub use error::{BookingError, BookingResult, TransitionError};
pub use export::{export_bookings_csv, write_bookings_csv};
pub use occupancy::{
    DayClassification, DayOccupancy, available_rooms, classify_bookings_for_day, occupancy_series,
};
pub use report::{
    DaySheet, MonthlyAggregate, MonthlyReport, StatusCounts, monthly_aggregate, status_counts,
};
pub use reschedule::{reschedule_booking, rescheduled_dates};
pub use transition::{
    allowed_targets, attempt_status_transition, attempt_status_transition_at, can_transition,
    is_terminal,
};
