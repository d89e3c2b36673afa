//! Booking list CSV export
//!
//! Header and separator are fixed; downstream spreadsheets key on them.

use std::path::Path;

use shared::error::AppResult;
use shared::models::Booking;

pub const CSV_HEADER: [&str; 7] = [
    "Booking ID",
    "Guest Name",
    "Room",
    "Check-in",
    "Check-out",
    "Status",
    "Amount",
];

pub const CSV_SEPARATOR: &str = ", ";

/// Quote a field only when it would break the row
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r')
    {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn booking_row(booking: &Booking) -> String {
    let fields = [
        escape_field(&booking.id),
        escape_field(&booking.guest.name),
        escape_field(&booking.room_name),
        booking.check_in.format("%Y-%m-%d").to_string(),
        booking.check_out.format("%Y-%m-%d").to_string(),
        booking.status.as_str().to_string(),
        format!("{:.2}", booking.total_amount),
    ];
    fields.join(CSV_SEPARATOR)
}

/// Render bookings as CSV text (header + one row per booking, `\n` separated)
pub fn export_bookings_csv(bookings: &[Booking]) -> String {
    let mut csv = CSV_HEADER.join(CSV_SEPARATOR);
    csv.push('\n');
    for booking in bookings {
        csv.push_str(&booking_row(booking));
        csv.push('\n');
    }
    csv
}

/// Write the CSV export to `path`, replacing any existing file
pub fn write_bookings_csv(path: impl AsRef<Path>, bookings: &[Booking]) -> AppResult<()> {
    let path = path.as_ref();
    std::fs::write(path, export_bookings_csv(bookings))?;
    tracing::info!(path = %path.display(), rows = bookings.len(), "Exported bookings CSV");
    Ok(())
}
