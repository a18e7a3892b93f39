//! Schedule summary statistics.
//!
//! The figures a reporting shell displays after a planning run: route
//! volume, peak coverage, how many drivers the week touched, and the
//! fitness score both planners are compared on.

use std::collections::HashSet;

use serde::Serialize;

use crate::ga::evaluate_schedule;
use crate::models::RouteEntry;

/// Aggregate statistics over a schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSummary {
    /// Total number of routes.
    pub total_routes: usize,
    /// Routes departing inside a peak window.
    pub peak_routes: usize,
    /// Number of distinct drivers used (0 for an empty schedule).
    pub distinct_drivers: usize,
    /// Fitness of the schedule (see [`evaluate_schedule`]).
    pub fitness: f64,
}

impl ScheduleSummary {
    /// Computes summary statistics. Safe on an empty schedule.
    pub fn calculate(schedule: &[RouteEntry]) -> Self {
        let drivers: HashSet<u32> = schedule.iter().map(|r| r.driver_id).collect();
        Self {
            total_routes: schedule.len(),
            peak_routes: schedule.iter().filter(|r| r.is_peak).count(),
            distinct_drivers: drivers.len(),
            fitness: evaluate_schedule(schedule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DriverType;
    use chrono::{NaiveDate, NaiveTime};

    fn entry(driver_id: u32, is_peak: bool) -> RouteEntry {
        RouteEntry {
            day_idx: 0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            start: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            bus_id: 1,
            driver_id,
            driver_type: DriverType::from_id(driver_id),
            duration_min: 60,
            is_peak,
        }
    }

    #[test]
    fn test_summary_counts() {
        let schedule = vec![entry(1, true), entry(2, false), entry(1, true)];
        let summary = ScheduleSummary::calculate(&schedule);

        assert_eq!(summary.total_routes, 3);
        assert_eq!(summary.peak_routes, 2);
        assert_eq!(summary.distinct_drivers, 2);
        // 2*2 + 3 - 1.5*2 = 4.0
        assert!((summary.fitness - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_schedule() {
        let summary = ScheduleSummary::calculate(&[]);
        assert_eq!(summary.total_routes, 0);
        assert_eq!(summary.peak_routes, 0);
        assert_eq!(summary.distinct_drivers, 0);
        assert!(summary.fitness.is_finite());
    }
}
