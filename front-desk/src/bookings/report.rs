//! Monthly dashboard aggregates
//!
//! Pure folds over the day classification. Nothing is cached; callers
//! recompute from the current booking list.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use shared::models::{Booking, BookingStatus};

use super::occupancy::classify_bookings_for_day;
use crate::money::sum_amounts;
use crate::utils::DateRange;

/// Aggregate figures for a date range (typically a calendar month)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAggregate {
    pub check_ins: usize,
    pub check_outs: usize,
    /// Σ total_amount of bookings arriving inside the range
    pub revenue: f64,
    /// Max `staying` count over the days of the range
    ///
    /// Counts bookings strictly between arrival and departure only. Arrivals
    /// are not in-house on their first day, so a day of one-night stays peaks
    /// at 0; rooms actually held are [`DayOccupancy::rooms_occupied`].
    ///
    /// [`DayOccupancy::rooms_occupied`]: super::occupancy::DayOccupancy::rooms_occupied
    pub peak_occupancy: usize,
    /// First day the peak was reached
    pub peak_date: Option<NaiveDate>,
}

/// Fold the day classification over every day in `range`
pub fn monthly_aggregate(
    bookings: &[Booking],
    hotel_id: Option<&str>,
    range: &DateRange,
) -> MonthlyAggregate {
    let mut check_ins = 0;
    let mut check_outs = 0;
    let mut arrivals_amounts = Vec::new();
    let mut peak_occupancy = 0;
    let mut peak_date = None;

    for date in range.days() {
        let day = classify_bookings_for_day(bookings, hotel_id, date);
        check_ins += day.check_ins.len();
        check_outs += day.check_outs.len();
        arrivals_amounts.extend(day.check_ins.iter().map(|b| b.total_amount));
        if peak_date.is_none() || day.staying.len() > peak_occupancy {
            peak_occupancy = day.staying.len();
            peak_date = Some(date);
        }
    }

    tracing::debug!(
        start = %range.start,
        end = %range.end,
        hotel_id = ?hotel_id,
        check_ins,
        check_outs,
        peak_occupancy,
        "Computed monthly aggregate"
    );

    MonthlyAggregate {
        check_ins,
        check_outs,
        revenue: sum_amounts(arrivals_amounts),
        peak_occupancy,
        peak_date,
    }
}

/// Monthly aggregate as reported to the operator, with the display currency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub hotel_id: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub currency: String,
    #[serde(flatten)]
    pub aggregate: MonthlyAggregate,
}

impl MonthlyReport {
    pub fn new(
        bookings: &[Booking],
        hotel_id: Option<&str>,
        range: &DateRange,
        currency: &str,
    ) -> Self {
        Self {
            hotel_id: hotel_id.map(str::to_string),
            start: range.start,
            end: range.end,
            currency: currency.to_string(),
            aggregate: monthly_aggregate(bookings, hotel_id, range),
        }
    }
}

/// 前台日报 - arrivals, departures and in-house guests for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySheet {
    pub date: NaiveDate,
    /// Standard check-in time for the arrivals
    pub check_in_from: NaiveTime,
    /// Standard check-out time for the departures
    pub check_out_by: NaiveTime,
    pub arrivals: Vec<String>,
    pub departures: Vec<String>,
    pub in_house: Vec<String>,
    pub rooms_occupied: u32,
}

impl DaySheet {
    pub fn new(
        bookings: &[Booking],
        hotel_id: Option<&str>,
        date: NaiveDate,
        check_in_from: NaiveTime,
        check_out_by: NaiveTime,
    ) -> Self {
        let day = classify_bookings_for_day(bookings, hotel_id, date);
        let ids =
            |list: &[&Booking]| -> Vec<String> { list.iter().map(|b| b.id.clone()).collect() };
        Self {
            date,
            check_in_from,
            check_out_by,
            arrivals: ids(&day.check_ins),
            departures: ids(&day.check_outs),
            in_house: ids(&day.staying),
            rooms_occupied: day.rooms_occupied(),
        }
    }
}

/// Number of bookings per status (cancelled included)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub checked_in: usize,
    pub checked_out: usize,
    pub cancelled: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn get(&self, status: BookingStatus) -> usize {
        match status {
            BookingStatus::Pending => self.pending,
            BookingStatus::Confirmed => self.confirmed,
            BookingStatus::CheckedIn => self.checked_in,
            BookingStatus::CheckedOut => self.checked_out,
            BookingStatus::Cancelled => self.cancelled,
            BookingStatus::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        BookingStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

/// Count bookings per status for the booking board header
pub fn status_counts(bookings: &[Booking], hotel_id: Option<&str>) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for booking in bookings
        .iter()
        .filter(|b| hotel_id.is_none_or(|id| b.hotel_id == id))
    {
        let slot = match booking.status {
            BookingStatus::Pending => &mut counts.pending,
            BookingStatus::Confirmed => &mut counts.confirmed,
            BookingStatus::CheckedIn => &mut counts.checked_in,
            BookingStatus::CheckedOut => &mut counts.checked_out,
            BookingStatus::Cancelled => &mut counts.cancelled,
            BookingStatus::Completed => &mut counts.completed,
        };
        *slot += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::test_support::{booking, date};

    fn march() -> DateRange {
        DateRange::month(2026, 3).unwrap()
    }

    #[test]
    fn test_empty_month() {
        let agg = monthly_aggregate(&[], None, &march());
        assert_eq!(agg.check_ins, 0);
        assert_eq!(agg.check_outs, 0);
        assert_eq!(agg.revenue, 0.0);
        assert_eq!(agg.peak_occupancy, 0);
        assert_eq!(agg.peak_date, Some(date("2026-03-01")));
    }

    #[test]
    fn test_revenue_counts_arrivals_inside_range_only() {
        let mut a = booking("A", "2026-03-10", "2026-03-13", BookingStatus::Confirmed);
        a.total_amount = 300.10;
        let mut b = booking("B", "2026-02-27", "2026-03-02", BookingStatus::CheckedIn);
        b.total_amount = 500.0;
        let mut c = booking("C", "2026-03-31", "2026-04-02", BookingStatus::Pending);
        c.total_amount = 0.2;
        let mut x = booking("X", "2026-03-05", "2026-03-06", BookingStatus::Cancelled);
        x.total_amount = 999.0;

        let agg = monthly_aggregate(&[a, b, c, x], None, &march());
        assert_eq!(agg.revenue, 300.3);
        assert_eq!(agg.check_ins, 2);
        // B departs 03-02 inside March; C departs in April
        assert_eq!(agg.check_outs, 2);
    }

    #[test]
    fn test_peak_occupancy_and_date() {
        let bookings = vec![
            booking("A", "2026-03-01", "2026-03-10", BookingStatus::CheckedIn),
            booking("B", "2026-03-03", "2026-03-08", BookingStatus::Confirmed),
            booking("C", "2026-03-04", "2026-03-06", BookingStatus::Confirmed),
        ];
        let agg = monthly_aggregate(&bookings, None, &march());
        // 03-05: A, B, C all strictly inside their stays
        assert_eq!(agg.peak_occupancy, 3);
        assert_eq!(agg.peak_date, Some(date("2026-03-05")));
    }

    #[test]
    fn test_one_night_arrivals_do_not_count_as_peak() {
        let bookings = vec![
            booking("A", "2026-03-10", "2026-03-11", BookingStatus::Confirmed),
            booking("B", "2026-03-10", "2026-03-11", BookingStatus::Confirmed),
        ];
        let agg = monthly_aggregate(&bookings, None, &march());
        assert_eq!(agg.check_ins, 2);
        assert_eq!(agg.peak_occupancy, 0);
    }

    #[test]
    fn test_monthly_report_carries_currency_and_flattens() {
        let mut a = booking("A", "2026-03-10", "2026-03-13", BookingStatus::Confirmed);
        a.total_amount = 390.0;
        let report = MonthlyReport::new(&[a], Some("h1"), &march(), "EUR");
        assert_eq!(report.aggregate.revenue, 390.0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["hotel_id"], "h1");
        assert_eq!(json["start"], "2026-03-01");
        assert_eq!(json["check_ins"], 1);
        assert_eq!(json["revenue"], 390.0);
    }

    #[test]
    fn test_day_sheet() {
        let bookings = vec![
            booking("A", "2026-03-10", "2026-03-13", BookingStatus::CheckedIn),
            booking("B", "2026-03-11", "2026-03-12", BookingStatus::Confirmed),
            booking("C", "2026-03-09", "2026-03-11", BookingStatus::CheckedIn),
            booking("X", "2026-03-11", "2026-03-14", BookingStatus::Cancelled),
        ];
        let from = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
        let by = NaiveTime::from_hms_opt(11, 0, 0).unwrap();
        let sheet = DaySheet::new(&bookings, None, date("2026-03-11"), from, by);
        assert_eq!(sheet.arrivals, vec!["B".to_string()]);
        assert_eq!(sheet.departures, vec!["C".to_string()]);
        assert_eq!(sheet.in_house, vec!["A".to_string()]);
        assert_eq!(sheet.rooms_occupied, 2);
        assert_eq!(sheet.check_in_from, from);
        assert_eq!(sheet.check_out_by, by);
    }

    #[test]
    fn test_status_counts() {
        let bookings = vec![
            booking("A", "2026-03-01", "2026-03-10", BookingStatus::CheckedIn),
            booking("B", "2026-03-03", "2026-03-08", BookingStatus::Confirmed),
            booking("C", "2026-03-04", "2026-03-06", BookingStatus::Cancelled),
            booking("D", "2026-03-04", "2026-03-06", BookingStatus::Confirmed),
        ];
        let counts = status_counts(&bookings, None);
        assert_eq!(counts.confirmed, 2);
        assert_eq!(counts.cancelled, 1);
        assert_eq!(counts.get(BookingStatus::CheckedIn), 1);
        assert_eq!(counts.total(), 4);
        assert_eq!(status_counts(&bookings, Some("nope")).total(), 0);
    }
}
