//! 时间工具函数 — 日期解析与日期区间
//!
//! Stays are day-granular: a booking holds a room for every night in
//! `[check_in, check_out)`. All day iteration goes through [`DateRange`].

use chrono::{Datelike, Days, NaiveDate, NaiveTime};

use shared::error::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 解析月份字符串 (YYYY-MM) → 整月区间
pub fn parse_month(month: &str) -> AppResult<DateRange> {
    let invalid = || AppError::validation(format!("Invalid month format: {}", month));
    let (year, month_num) = month.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month_num: u32 = month_num.parse().map_err(|_| invalid())?;
    DateRange::month(year, month_num).ok_or_else(invalid)
}

/// 解析时间字符串 (HH:MM)，失败返回 fallback
pub fn parse_hhmm(value: &str, fallback: NaiveTime) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse time '{}': {}, falling back to {}",
            value,
            e,
            fallback.format("%H:%M")
        );
        fallback
    })
}

/// `date + days`, saturating at the calendar limits
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Inclusive calendar date range (`start..=end`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Range from `start` to `end` inclusive; `None` if `end < start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// The whole calendar month
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let end = next.pred_opt()?;
        Some(Self { start, end })
    }

    /// The month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        // from_ymd(year, month, 1) of an existing date always exists
        Self::month(date.year(), date.month()).unwrap_or(Self {
            start: date,
            end: date,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the range
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate every day in the range
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
