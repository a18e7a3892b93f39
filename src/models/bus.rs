//! Bus state machine.
//!
//! A bus carries only availability: the instant it next becomes free.
//! Like drivers, buses are created fresh per simulated day.

use chrono::{Duration, NaiveDateTime};

/// One day of bus state.
#[derive(Debug, Clone)]
pub struct Bus {
    /// Bus identifier (1-based).
    pub id: u32,
    /// Instant the bus next becomes free.
    pub next_free_time: NaiveDateTime,
}

impl Bus {
    /// Creates a bus available from `available_from`.
    pub fn new(id: u32, available_from: NaiveDateTime) -> Self {
        Self {
            id,
            next_free_time: available_from,
        }
    }

    /// Builds the day's fleet with ids `1..=count`.
    pub fn fleet(count: u32, available_from: NaiveDateTime) -> Vec<Self> {
        (1..=count).map(|id| Self::new(id, available_from)).collect()
    }

    /// Advances availability by an idle dwell.
    pub fn delay(&mut self, by: Duration) {
        self.next_free_time += by;
    }

    /// Pins availability to `at`, removing the bus from further
    /// consideration when `at` is the day end.
    pub fn pin_to(&mut self, at: NaiveDateTime) {
        self.next_free_time = at;
    }

    /// Marks a completed route: the bus is free again after the
    /// turnaround buffer.
    pub fn finish_route(&mut self, route_end: NaiveDateTime, turnaround: Duration) {
        self.next_free_time = route_end + turnaround;
    }
}
