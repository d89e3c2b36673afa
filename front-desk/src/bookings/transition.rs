//! Booking status transitions
//!
//! ```text
//! pending ──► confirmed ──► checked-in ──► checked-out ──► completed
//!    │            │
//!    └──► cancelled ◄┘
//! ```
//!
//! No self-loops, no skipped states, `completed` and `cancelled` are terminal.
//! A rejected transition returns [`TransitionError`] and leaves the input
//! booking untouched.

use shared::models::{Booking, BookingStatus};
use shared::types::Timestamp;
use shared::util::now_millis;

use super::error::TransitionError;

/// Targets reachable from `status` in one step
pub fn allowed_targets(status: BookingStatus) -> &'static [BookingStatus] {
    use BookingStatus::*;
    match status {
        Pending => &[Confirmed, Cancelled],
        Confirmed => &[CheckedIn, Cancelled],
        CheckedIn => &[CheckedOut],
        CheckedOut => &[Completed],
        Completed | Cancelled => &[],
    }
}

pub fn can_transition(from: BookingStatus, to: BookingStatus) -> bool {
    allowed_targets(from).contains(&to)
}

pub fn is_terminal(status: BookingStatus) -> bool {
    allowed_targets(status).is_empty()
}

/// Attempt a status change, stamping the current time on check-in/check-out
pub fn attempt_status_transition(
    booking: &Booking,
    target: BookingStatus,
) -> Result<Booking, TransitionError> {
    attempt_status_transition_at(booking, target, now_millis())
}

/// Attempt a status change at an explicit time
///
/// On success returns the updated copy. `checked-in` records `check_in_time`,
/// `checked-out` records `check_out_time`.
pub fn attempt_status_transition_at(
    booking: &Booking,
    target: BookingStatus,
    at: Timestamp,
) -> Result<Booking, TransitionError> {
    if !can_transition(booking.status, target) {
        tracing::warn!(
            booking_id = %booking.id,
            from = %booking.status,
            to = %target,
            "Rejected booking status transition"
        );
        return Err(TransitionError {
            booking_id: booking.id.clone(),
            from: booking.status,
            to: target,
        });
    }

    let mut updated = booking.clone();
    updated.status = target;
    match target {
        BookingStatus::CheckedIn => updated.check_in_time = Some(at),
        BookingStatus::CheckedOut => updated.check_out_time = Some(at),
        _ => {}
    }

    tracing::debug!(
        booking_id = %booking.id,
        from = %booking.status,
        to = %target,
        "Booking status transition accepted"
    );
    Ok(updated)
}

pub fn confirm(booking: &Booking) -> Result<Booking, TransitionError> {
    attempt_status_transition(booking, BookingStatus::Confirmed)
}

pub fn check_in(booking: &Booking, at: Timestamp) -> Result<Booking, TransitionError> {
    attempt_status_transition_at(booking, BookingStatus::CheckedIn, at)
}

pub fn check_out(booking: &Booking, at: Timestamp) -> Result<Booking, TransitionError> {
    attempt_status_transition_at(booking, BookingStatus::CheckedOut, at)
}

pub fn cancel(booking: &Booking) -> Result<Booking, TransitionError> {
    attempt_status_transition(booking, BookingStatus::Cancelled)
}

pub fn complete(booking: &Booking) -> Result<Booking, TransitionError> {
    attempt_status_transition(booking, BookingStatus::Completed)
}
