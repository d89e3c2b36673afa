//! Booking creation and price quotes

use rust_decimal::Decimal;
use shared::error::AppError;
use shared::models::{Booking, BookingCreate, BookingStatus, RoomPlan};
use shared::types::Timestamp;

use super::error::{BookingError, BookingResult};
use crate::money::{self, to_decimal, to_f64};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_text,
    validate_required_text,
};

fn invalid(err: AppError) -> BookingError {
    BookingError::Validation(err.message)
}

/// Validate a booking payload without building the booking
pub fn validate_booking_create(payload: &BookingCreate) -> BookingResult<()> {
    if payload.check_out <= payload.check_in {
        tracing::warn!(
            check_in = %payload.check_in,
            check_out = %payload.check_out,
            "Rejected booking with empty or inverted stay"
        );
        return Err(BookingError::InvalidDateRange {
            check_in: payload.check_in,
            check_out: payload.check_out,
        });
    }
    if payload.rooms < 1 {
        return Err(BookingError::Validation("rooms must be at least 1".into()));
    }
    if payload.adults < 1 {
        return Err(BookingError::Validation("adults must be at least 1".into()));
    }

    validate_required_text(&payload.hotel_id, "hotel_id", MAX_SHORT_TEXT_LEN).map_err(invalid)?;
    validate_required_text(&payload.room_type_id, "room_type_id", MAX_SHORT_TEXT_LEN)
        .map_err(invalid)?;
    validate_required_text(&payload.room_name, "room_name", MAX_NAME_LEN).map_err(invalid)?;
    validate_required_text(&payload.plan_name, "plan_name", MAX_NAME_LEN).map_err(invalid)?;
    validate_required_text(&payload.guest.name, "guest.name", MAX_NAME_LEN).map_err(invalid)?;
    validate_email(&payload.guest.email, "guest.email").map_err(invalid)?;
    if payload.guest.phone.len() > MAX_SHORT_TEXT_LEN {
        return Err(BookingError::Validation("guest.phone is too long".into()));
    }
    if payload.guest.country.len() > MAX_SHORT_TEXT_LEN {
        return Err(BookingError::Validation("guest.country is too long".into()));
    }
    validate_required_text(&payload.payment_method, "payment_method", MAX_SHORT_TEXT_LEN)
        .map_err(invalid)?;
    validate_optional_text(&payload.special_requests, "special_requests", MAX_NOTE_LEN)
        .map_err(invalid)?;
    money::validate_amount(payload.total_amount, "total_amount")
        .map_err(BookingError::Validation)?;

    match payload.status {
        None | Some(BookingStatus::Pending) | Some(BookingStatus::Confirmed) => Ok(()),
        Some(other) => Err(BookingError::Validation(format!(
            "new bookings must start pending or confirmed, got {other}"
        ))),
    }
}

/// Build a new booking from a validated payload
///
/// Starts `pending` unless the payload asks for `confirmed` (quick booking).
/// No overlap check is done against existing bookings.
pub fn create_booking(
    payload: BookingCreate,
    id: impl Into<String>,
    now: Timestamp,
) -> BookingResult<Booking> {
    validate_booking_create(&payload)?;

    let booking = Booking {
        id: id.into(),
        hotel_id: payload.hotel_id,
        room_type_id: payload.room_type_id,
        room_name: payload.room_name,
        plan_name: payload.plan_name,
        check_in: payload.check_in,
        check_out: payload.check_out,
        adults: payload.adults,
        children: payload.children,
        rooms: payload.rooms,
        guest: payload.guest,
        total_amount: payload.total_amount,
        status: payload.status.unwrap_or_default(),
        payment_method: payload.payment_method,
        created_at: now,
        check_in_time: None,
        check_out_time: None,
        room_id: None,
        special_requests: payload.special_requests,
    };

    tracing::info!(
        booking_id = %booking.id,
        hotel_id = %booking.hotel_id,
        nights = booking.nights(),
        status = %booking.status,
        "Booking created"
    );
    Ok(booking)
}

/// Nights held by a booking
pub fn nights(booking: &Booking) -> i64 {
    booking.nights()
}

/// `(nightly price + taxes) * nights * rooms`, rounded to cents
///
/// Nightly price is the discounted price when the plan has one.
pub fn quote_total(plan: &RoomPlan, nights: i64, rooms: u32) -> f64 {
    if nights <= 0 || rooms == 0 {
        return 0.0;
    }
    let per_night = to_decimal(plan.nightly_price()) + to_decimal(plan.taxes);
    to_f64(per_night * Decimal::from(nights) * Decimal::from(rooms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::test_support::date;
    use shared::models::GuestContact;

    fn payload() -> BookingCreate {
        BookingCreate {
            hotel_id: "h1".to_string(),
            room_type_id: "rt1".to_string(),
            room_name: "Deluxe King".to_string(),
            plan_name: "Room Only".to_string(),
            check_in: date("2026-03-10"),
            check_out: date("2026-03-13"),
            adults: 2,
            children: 0,
            rooms: 1,
            guest: GuestContact {
                name: "Ana Ruiz".to_string(),
                email: "ana@example.com".to_string(),
                phone: "+34 600 000 000".to_string(),
                country: "ES".to_string(),
            },
            total_amount: 360.0,
            payment_method: "CARD".to_string(),
            status: None,
            special_requests: None,
        }
    }

    fn plan(original: f64, discounted: Option<f64>, taxes: f64) -> RoomPlan {
        RoomPlan {
            id: "p1".to_string(),
            name: "Room Only".to_string(),
            features: vec![],
            original_price: original,
            discounted_price: discounted,
            taxes,
            free_cancellation: true,
        }
    }

    #[test]
    fn test_create_defaults_to_pending() {
        let booking = create_booking(payload(), "BK1", 1_000).unwrap();
        assert_eq!(booking.id, "BK1");
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.created_at, 1_000);
        assert_eq!(nights(&booking), 3);
        assert!(booking.check_in_time.is_none());
    }

    #[test]
    fn test_quick_booking_may_start_confirmed() {
        let mut p = payload();
        p.status = Some(BookingStatus::Confirmed);
        let booking = create_booking(p, "BK1", 0).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_rejects_other_initial_status() {
        let mut p = payload();
        p.status = Some(BookingStatus::CheckedIn);
        assert!(matches!(
            create_booking(p, "BK1", 0),
            Err(BookingError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_zero_night_stay() {
        let mut p = payload();
        p.check_out = p.check_in;
        assert!(matches!(
            create_booking(p, "BK1", 0),
            Err(BookingError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_stay() {
        let mut p = payload();
        p.check_out = date("2026-03-09");
        assert!(matches!(
            validate_booking_create(&p),
            Err(BookingError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_fields() {
        let mut p = payload();
        p.rooms = 0;
        assert!(validate_booking_create(&p).is_err());

        let mut p = payload();
        p.guest.name = "  ".to_string();
        assert!(validate_booking_create(&p).is_err());

        let mut p = payload();
        p.guest.email = "not-an-email".to_string();
        assert!(validate_booking_create(&p).is_err());

        let mut p = payload();
        p.total_amount = -1.0;
        assert!(validate_booking_create(&p).is_err());

        let mut p = payload();
        p.total_amount = f64::NAN;
        assert!(validate_booking_create(&p).is_err());

        let mut p = payload();
        p.special_requests = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_booking_create(&p).is_err());
    }

    #[test]
    fn test_empty_email_is_allowed() {
        let mut p = payload();
        p.guest.email = String::new();
        assert!(validate_booking_create(&p).is_ok());
    }

    #[test]
    fn test_quote_total_uses_discount_and_taxes() {
        // (90 + 10.5) * 3 nights * 2 rooms
        assert_eq!(quote_total(&plan(120.0, Some(90.0), 10.5), 3, 2), 603.0);
        // no discount
        assert_eq!(quote_total(&plan(120.0, None, 0.0), 2, 1), 240.0);
    }

    #[test]
    fn test_quote_total_decimal_precision() {
        // 0.1 + 0.2 style drift must not leak into the total
        assert_eq!(quote_total(&plan(0.1, None, 0.2), 3, 1), 0.9);
    }

    #[test]
    fn test_quote_total_empty_stay() {
        assert_eq!(quote_total(&plan(100.0, None, 0.0), 0, 1), 0.0);
        assert_eq!(quote_total(&plan(100.0, None, 0.0), 2, 0), 0.0);
    }
}
