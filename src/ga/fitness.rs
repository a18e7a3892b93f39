//! Schedule fitness.
//!
//! Both planners are compared on a single scalar objective that rewards
//! peak-hour coverage and overall route volume while penalizing how many
//! drivers the week touches.

use std::collections::HashSet;

use crate::models::RouteEntry;

/// Scores a schedule. Higher is better.
///
/// `fitness = 2 * peak_routes + total_routes - 1.5 * distinct_drivers`,
/// where an empty schedule counts one distinct driver so that doing
/// nothing is penalized rather than rewarded.
///
/// # Example
/// ```
/// use bus_roster::evaluate_schedule;
///
/// assert_eq!(evaluate_schedule(&[]), -1.5);
/// ```
pub fn evaluate_schedule(schedule: &[RouteEntry]) -> f64 {
    let total_routes = schedule.len() as f64;
    let peak_routes = schedule.iter().filter(|r| r.is_peak).count() as f64;
    let distinct_drivers = if schedule.is_empty() {
        1.0
    } else {
        schedule
            .iter()
            .map(|r| r.driver_id)
            .collect::<HashSet<u32>>()
            .len() as f64
    };

    2.0 * peak_routes + total_routes - 1.5 * distinct_drivers
}
