//! Route entry record.
//!
//! [`RouteEntry`] is the atomic output of both planners: one dispatched
//! route with its day, window, vehicle, and driver. A full schedule is a
//! `Vec<RouteEntry>` in canonical `(day_idx, date, start)` order.
//!
//! # Serialization
//! Entries serialize to the tabular field set consumed by reporting
//! shells: `DayIdx`, `Date` (ISO `YYYY-MM-DD`), `Start`/`End` (`HH:MM`),
//! `BusID`, `DriverID`, `DriverType` (`"A"`/`"B"`), `Duration` (minutes),
//! `IsPeak`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::DriverType;

/// One dispatched route.
///
/// Immutable once emitted by a planner; the genetic operators replace
/// identifier fields wholesale rather than editing the time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Day of the planning week (0-6).
    #[serde(rename = "DayIdx")]
    pub day_idx: u32,
    /// Calendar date of the start instant. A route dispatched after
    /// midnight carries the next date while keeping its day index.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Departure time of day.
    #[serde(rename = "Start", with = "hhmm")]
    pub start: NaiveTime,
    /// Arrival time of day.
    #[serde(rename = "End", with = "hhmm")]
    pub end: NaiveTime,
    /// Vehicle that runs the route.
    #[serde(rename = "BusID")]
    pub bus_id: u32,
    /// Driver assigned to the route.
    #[serde(rename = "DriverID")]
    pub driver_id: u32,
    /// Assigned driver's classification.
    #[serde(rename = "DriverType")]
    pub driver_type: DriverType,
    /// Route length in minutes.
    #[serde(rename = "Duration")]
    pub duration_min: i64,
    /// Whether the departure fell in a weekday peak window.
    #[serde(rename = "IsPeak")]
    pub is_peak: bool,
}

impl RouteEntry {
    /// Canonical ordering key.
    #[inline]
    pub fn sort_key(&self) -> (u32, NaiveDate, NaiveTime) {
        (self.day_idx, self.date, self.start)
    }
}

/// Sorts a schedule into canonical `(day_idx, date, start)` order.
///
/// Idempotent: sorting an already-sorted schedule leaves it unchanged.
pub fn sort_schedule(schedule: &mut [RouteEntry]) {
    schedule.sort_by_key(RouteEntry::sort_key);
}

/// `HH:MM` (de)serialization for route times.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
