//! Calendar drag-to-reschedule
//!
//! Moves a stay so that it starts on the day it was dropped on, keeping the
//! number of nights. There is no overlap check against other bookings of the
//! same room, and picker constraints (min/max date, disabled days) are not
//! enforced here.

use chrono::NaiveDate;
use shared::models::Booking;

use crate::utils::time::add_days;

/// New `(check_in, check_out)` for a stay anchored at `anchor`
pub fn rescheduled_dates(booking: &Booking, anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let nights = booking.nights();
    (anchor, add_days(anchor, nights))
}

/// Copy of `booking` moved to start on `anchor`
pub fn reschedule_booking(booking: &Booking, anchor: NaiveDate) -> Booking {
    let (check_in, check_out) = rescheduled_dates(booking, anchor);

    tracing::debug!(
        booking_id = %booking.id,
        from = %booking.check_in,
        to = %check_in,
        nights = booking.nights(),
        "Rescheduling booking"
    );

    Booking {
        check_in,
        check_out,
        ..booking.clone()
    }
}
