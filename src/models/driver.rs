//! Driver state machine.
//!
//! A [`Driver`] tracks one day of labor-rule bookkeeping: accumulated
//! working time, the instant it next becomes free, and break state.
//! Drivers are created fresh at the start of each simulated day and
//! discarded at day end; fatigue does not carry across days.
//!
//! # Labor Rules
//!
//! - **Type A**: 8-hour daily cap, works every day, must take a single
//!   1-hour lunch once accumulated work reaches the 4-5 hour band. Lunch
//!   is deferred (the driver skipped for the route) when the proposed
//!   start falls in a peak window.
//! - **Type B**: 12-hour daily cap, works one day in three on a fixed
//!   rotation (`day_idx % 3 == id % 3`), and owes a break once two hours
//!   have elapsed since the last one: 40 minutes the first time, a random
//!   15-20 minutes afterwards.
//!
//! Lunch and break time count against the daily cap.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ShiftParams;

/// Hours of accumulated work bounding the type-A lunch band (inclusive
/// start, exclusive end).
const LUNCH_BAND_HOURS: (i64, i64) = (4, 5);

/// Driver classification. Determines the daily cap, rest rules, and
/// rotation eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverType {
    /// 8-hour shift with a single mandated lunch; works every day.
    A,
    /// 12-hour shift with periodic breaks; works one day in three.
    B,
}

impl DriverType {
    /// Derives the type from a driver id: even ids are type A, odd type B.
    #[inline]
    pub fn from_id(id: u32) -> Self {
        if id % 2 == 0 {
            DriverType::A
        } else {
            DriverType::B
        }
    }
}

impl std::fmt::Display for DriverType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverType::A => write!(f, "A"),
            DriverType::B => write!(f, "B"),
        }
    }
}

/// One day of driver state.
#[derive(Debug, Clone)]
pub struct Driver {
    /// Driver identifier (1-based).
    pub id: u32,
    /// Driver classification.
    pub driver_type: DriverType,
    /// Working time accumulated today, breaks included.
    pub worked: Duration,
    /// Instant the driver next becomes free. Non-decreasing within a day.
    pub next_free_time: NaiveDateTime,
    /// Instant the last break ended (type B bookkeeping).
    pub last_break_time: NaiveDateTime,
    /// Whether the once-per-day long break has been consumed.
    pub long_break_used: bool,
    work_limit: Duration,
}

impl Driver {
    /// Creates a fresh driver at the start of an operating day.
    pub fn new(
        id: u32,
        driver_type: DriverType,
        day_start: NaiveDateTime,
        params: &ShiftParams,
    ) -> Self {
        Self {
            id,
            driver_type,
            worked: Duration::zero(),
            next_free_time: day_start,
            last_break_time: day_start,
            long_break_used: false,
            work_limit: params.work_limit(driver_type),
        }
    }

    /// Builds the day's driver pool with ids `1..=count`, types derived
    /// from id parity.
    pub fn pool(count: u32, day_start: NaiveDateTime, params: &ShiftParams) -> Vec<Self> {
        (1..=count)
            .map(|id| Self::new(id, DriverType::from_id(id), day_start, params))
            .collect()
    }

    /// Whether the driver is rostered on this day of the week.
    pub fn works_on(&self, day_idx: u32) -> bool {
        match self.driver_type {
            DriverType::A => true,
            DriverType::B => day_idx % 3 == self.id % 3,
        }
    }

    /// Admission check: the driver is free at `start` and the route fits
    /// under the daily cap.
    pub fn can_take_route(&self, start: NaiveDateTime, duration: Duration) -> bool {
        if start < self.next_free_time {
            return false;
        }
        self.worked + duration <= self.work_limit
    }

    /// Whether accumulated work has entered the type-A lunch band.
    pub fn in_lunch_window(&self) -> bool {
        self.worked >= Duration::hours(LUNCH_BAND_HOURS.0)
            && self.worked < Duration::hours(LUNCH_BAND_HOURS.1)
    }

    /// Takes the mandatory lunch before a route starting at `*cursor`.
    ///
    /// The lunch occupies `[max(next_free_time, cursor), +1h)`. Returns
    /// `false` without touching state when it would cross `day_end`;
    /// otherwise working time and `next_free_time` absorb the lunch and
    /// the cursor advances past it.
    pub fn take_lunch(
        &mut self,
        cursor: &mut NaiveDateTime,
        day_end: NaiveDateTime,
        params: &ShiftParams,
    ) -> bool {
        let lunch_start = self.next_free_time.max(*cursor);
        let lunch_end = lunch_start + params.lunch();
        if lunch_end > day_end {
            return false;
        }
        self.worked = self.worked + params.lunch();
        self.next_free_time = lunch_end;
        if lunch_end > *cursor {
            *cursor = lunch_end;
        }
        true
    }

    /// Whether a type-B break is due at `at`.
    pub fn break_due(&self, at: NaiveDateTime, params: &ShiftParams) -> bool {
        at - self.last_break_time >= params.break_interval()
    }

    /// Takes the due break before a route starting at `*cursor`.
    ///
    /// The first qualifying break of the day is the long break; later
    /// ones draw a random short length. The long-break entitlement is
    /// consumed when selected, even if the break is then rejected for
    /// crossing `day_end`. On success working time, `next_free_time`,
    /// `last_break_time`, and the cursor all advance.
    pub fn take_break<R: Rng>(
        &mut self,
        cursor: &mut NaiveDateTime,
        day_end: NaiveDateTime,
        params: &ShiftParams,
        rng: &mut R,
    ) -> bool {
        let length = if self.long_break_used {
            params.random_short_break(rng)
        } else {
            self.long_break_used = true;
            params.long_break()
        };
        let break_start = self.next_free_time.max(*cursor);
        let break_end = break_start + length;
        if break_end > day_end {
            return false;
        }
        self.worked = self.worked + length;
        self.next_free_time = break_end;
        self.last_break_time = break_end;
        if break_end > *cursor {
            *cursor = break_end;
        }
        true
    }

    /// Commits a route: working time absorbs the duration and the driver
    /// is busy until `end`.
    pub fn commit_route(&mut self, end: NaiveDateTime, duration: Duration) {
        self.worked = self.worked + duration;
        self.next_free_time = end;
    }
}
