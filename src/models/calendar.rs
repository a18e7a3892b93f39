//! Shift calendar and peak-hour windows.
//!
//! Maps a day index (0-6) of the planning week onto absolute instants:
//! each operating day opens at the configured shift-start hour and runs
//! for the configured shift length, crossing midnight into the early
//! morning of the next calendar date (06:00 through 03:00 by default).
//!
//! # Time Model
//! All arithmetic is `NaiveDate`/`NaiveDateTime` plus elapsed-duration
//! offsets from the day start. No timezone or DST handling is involved;
//! the planning week is a closed simulation.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::ShiftParams;

/// A peak-hour window `[start_hour, end_hour)`, applied on weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    /// First hour inside the window (inclusive).
    pub start_hour: u32,
    /// First hour past the window (exclusive).
    pub end_hour: u32,
}

impl PeakWindow {
    /// Creates a new peak window.
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Whether an hour of day falls inside this window.
    #[inline]
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

/// Whether a day index is a weekday (0-4, Monday-Friday by convention).
#[inline]
pub fn is_weekday(day_idx: u32) -> bool {
    day_idx < 5
}

/// Calendar for one planning week, bound to a base date.
///
/// # Example
/// ```
/// use bus_roster::{ShiftCalendar, ShiftParams};
/// use chrono::NaiveDate;
///
/// let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let calendar = ShiftCalendar::new(base, &ShiftParams::default());
/// let start = calendar.day_start(0);
/// assert_eq!(start.to_string(), "2024-01-01 06:00:00");
/// // The 21-hour day runs past midnight.
/// assert_eq!(calendar.day_end(0).to_string(), "2024-01-02 03:00:00");
/// ```
#[derive(Debug, Clone)]
pub struct ShiftCalendar {
    base_date: NaiveDate,
    start_hour: u32,
    shift_length: Duration,
    peak_windows: Vec<PeakWindow>,
}

impl ShiftCalendar {
    /// Creates a calendar for the week starting at `base_date`.
    pub fn new(base_date: NaiveDate, params: &ShiftParams) -> Self {
        Self {
            base_date,
            // Clamped here so day_start can build times infallibly.
            start_hour: params.shift_start_hour.min(23),
            shift_length: params.shift_length(),
            peak_windows: params.peak_windows.clone(),
        }
    }

    /// The week's base date (day 0).
    #[inline]
    pub fn base_date(&self) -> NaiveDate {
        self.base_date
    }

    /// Instant the operating day opens.
    pub fn day_start(&self, day_idx: u32) -> NaiveDateTime {
        let date = self.base_date + Duration::days(i64::from(day_idx));
        // start_hour is clamped to 0..=23 at construction.
        date.and_hms_opt(self.start_hour, 0, 0).unwrap()
    }

    /// Instant the operating day closes (start + shift length).
    pub fn day_end(&self, day_idx: u32) -> NaiveDateTime {
        self.day_start(day_idx) + self.shift_length
    }

    /// Whether an instant falls in a peak window.
    ///
    /// Peaks only apply on weekdays; the day index decides weekday-ness,
    /// not the instant's own date (a post-midnight route still belongs
    /// to the day it was dispatched on).
    pub fn is_peak(&self, at: NaiveDateTime, day_idx: u32) -> bool {
        if !is_weekday(day_idx) {
            return false;
        }
        let hour = at.hour();
        self.peak_windows.iter().any(|w| w.contains(hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> ShiftCalendar {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        ShiftCalendar::new(base, &ShiftParams::default())
    }

    #[test]
    fn test_is_weekday() {
        assert!(is_weekday(0));
        assert!(is_weekday(4));
        assert!(!is_weekday(5));
        assert!(!is_weekday(6));
    }

    #[test]
    fn test_peak_window_half_open() {
        let w = PeakWindow::new(7, 9);
        assert!(!w.contains(6));
        assert!(w.contains(7));
        assert!(w.contains(8));
        assert!(!w.contains(9)); // exclusive end
    }

    #[test]
    fn test_day_bounds() {
        let cal = calendar();
        assert_eq!(cal.day_start(0).to_string(), "2024-01-01 06:00:00");
        assert_eq!(cal.day_end(0).to_string(), "2024-01-02 03:00:00");
        assert_eq!(cal.day_start(3).to_string(), "2024-01-04 06:00:00");
    }

    #[test]
    fn test_peak_on_weekday() {
        let cal = calendar();
        let morning = cal.base_date().and_hms_opt(8, 30, 0).unwrap();
        let evening = cal.base_date().and_hms_opt(17, 0, 0).unwrap();
        let midday = cal.base_date().and_hms_opt(12, 0, 0).unwrap();

        assert!(cal.is_peak(morning, 0));
        assert!(cal.is_peak(evening, 0));
        assert!(!cal.is_peak(midday, 0));
    }

    #[test]
    fn test_no_peak_on_weekend() {
        let cal = calendar();
        let morning = cal.base_date().and_hms_opt(8, 30, 0).unwrap();
        assert!(!cal.is_peak(morning, 5));
        assert!(!cal.is_peak(morning, 6));
    }

    #[test]
    fn test_custom_peak_windows() {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let params =
            ShiftParams::default().with_peak_windows(vec![PeakWindow::new(10, 12)]);
        let cal = ShiftCalendar::new(base, &params);

        let at = base.and_hms_opt(11, 0, 0).unwrap();
        assert!(cal.is_peak(at, 0));
        let at = base.and_hms_opt(8, 0, 0).unwrap();
        assert!(!cal.is_peak(at, 0));
    }

    #[test]
    fn test_start_hour_clamped() {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut params = ShiftParams::default();
        params.shift_start_hour = 40;
        let cal = ShiftCalendar::new(base, &params);
        assert_eq!(cal.day_start(0).to_string(), "2024-01-01 23:00:00");
    }
}
