//! Greedy week planner.
//!
//! # Algorithm
//!
//! Each operating day is filled independently with fresh resource state:
//!
//! 1. Pick the bus with the earliest availability; stop the day once
//!    that instant reaches the day end.
//! 2. Draw a random route duration.
//! 3. Shuffle the driver pool and scan for the first driver passing
//!    day eligibility, the admission check, the type-specific rest rule
//!    (peak-deferred lunch for A, interval break for B), and the
//!    admission re-check.
//! 4. No qualifying driver: advance the bus by the idle dwell and retry
//!    it on a later iteration.
//! 5. A driver qualified but the route would overrun the day end: pin
//!    the bus to the day end without emitting a route.
//! 6. Otherwise commit the route to driver and bus and record it.
//!
//! Rest-rule bookkeeping performed while scanning a driver sticks even
//! when the driver is then rejected, and a scan cursor advanced past a
//! lunch or break is seen by the remaining drivers in the same scan.
//! Both carry over from the dispatch rules this planner models.

use chrono::NaiveDate;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{ShiftParams, WEEK_DAYS};
use crate::models::{sort_schedule, Bus, Driver, DriverType, RouteEntry, ShiftCalendar};

/// Greedy earliest-available-bus planner.
///
/// # Example
/// ```
/// use bus_roster::GreedyPlanner;
/// use chrono::NaiveDate;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let mut rng = SmallRng::seed_from_u64(42);
/// let week = GreedyPlanner::new().plan_week(base, 5, 12, &mut rng);
/// assert!(week.iter().all(|route| route.day_idx < 7));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner {
    params: ShiftParams,
}

impl GreedyPlanner {
    /// Creates a planner with default shift parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shift parameters.
    pub fn with_params(mut self, params: ShiftParams) -> Self {
        self.params = params;
        self
    }

    /// Plans all seven days and returns the week in canonical order.
    pub fn plan_week<R: Rng>(
        &self,
        base_date: NaiveDate,
        bus_count: u32,
        driver_count: u32,
        rng: &mut R,
    ) -> Vec<RouteEntry> {
        let calendar = ShiftCalendar::new(base_date, &self.params);
        let mut week = Vec::new();
        for day_idx in 0..WEEK_DAYS {
            week.extend(self.plan_day(&calendar, day_idx, bus_count, driver_count, rng));
        }
        sort_schedule(&mut week);
        week
    }

    /// Plans a single day, returning its routes sorted by start time.
    pub fn plan_day<R: Rng>(
        &self,
        calendar: &ShiftCalendar,
        day_idx: u32,
        bus_count: u32,
        driver_count: u32,
        rng: &mut R,
    ) -> Vec<RouteEntry> {
        let day_start = calendar.day_start(day_idx);
        let day_end = calendar.day_end(day_idx);
        let mut buses = Bus::fleet(bus_count, day_start);
        let mut drivers = Driver::pool(driver_count, day_start, &self.params);
        let mut schedule = Vec::new();

        loop {
            let bus_idx = match buses
                .iter()
                .enumerate()
                .min_by_key(|(_, bus)| bus.next_free_time)
            {
                Some((idx, bus)) if bus.next_free_time < day_end => idx,
                _ => break,
            };
            let mut cursor = buses[bus_idx].next_free_time;
            let duration = self.params.random_route_duration(rng);

            drivers.shuffle(rng);
            let mut chosen = None;
            for idx in 0..drivers.len() {
                let driver = &mut drivers[idx];
                if !driver.works_on(day_idx) {
                    continue;
                }
                if !driver.can_take_route(cursor, duration) {
                    continue;
                }
                match driver.driver_type {
                    DriverType::A => {
                        if driver.in_lunch_window() {
                            if calendar.is_peak(cursor, day_idx) {
                                continue; // lunch deferred, driver skipped
                            }
                            if !driver.take_lunch(&mut cursor, day_end, &self.params) {
                                continue;
                            }
                            if !driver.can_take_route(cursor, duration) {
                                continue;
                            }
                        }
                    }
                    DriverType::B => {
                        if driver.break_due(cursor, &self.params) {
                            if !driver.take_break(&mut cursor, day_end, &self.params, rng) {
                                continue;
                            }
                            if !driver.can_take_route(cursor, duration) {
                                continue;
                            }
                        }
                    }
                }
                chosen = Some(idx);
                break;
            }

            let driver_idx = match chosen {
                Some(idx) => idx,
                None => {
                    buses[bus_idx].delay(self.params.idle_dwell());
                    continue;
                }
            };

            let start = cursor;
            let end = start + duration;
            if end > day_end {
                buses[bus_idx].pin_to(day_end);
                continue;
            }

            let driver = &mut drivers[driver_idx];
            driver.commit_route(end, duration);
            buses[bus_idx].finish_route(end, self.params.turnaround());
            schedule.push(RouteEntry {
                day_idx,
                date: start.date(),
                start: start.time(),
                end: end.time(),
                bus_id: buses[bus_idx].id,
                driver_id: driver.id,
                driver_type: driver.driver_type,
                duration_min: duration.num_minutes(),
                is_peak: calendar.is_peak(start, day_idx),
            });
        }

        schedule.sort_by_key(|route| route.start);
        debug!(
            "day {day_idx}: {} routes across {bus_count} buses",
            schedule.len()
        );
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn plan_week(seed: u64) -> Vec<RouteEntry> {
        let mut rng = SmallRng::seed_from_u64(seed);
        GreedyPlanner::new().plan_week(base_date(), 5, 12, &mut rng)
    }

    #[test]
    fn test_routes_stay_inside_day_window() {
        let params = ShiftParams::default();
        let calendar = ShiftCalendar::new(base_date(), &params);
        for route in plan_week(42) {
            let day_start = calendar.day_start(route.day_idx);
            let day_end = calendar.day_end(route.day_idx);
            let start = route.date.and_time(route.start);
            let end = start + Duration::minutes(route.duration_min);
            assert!(start >= day_start, "route starts before day open");
            assert!(end <= day_end, "route ends past day close");
        }
    }

    #[test]
    fn test_route_durations_in_range() {
        for route in plan_week(7) {
            assert!((50..=70).contains(&route.duration_min));
        }
    }

    #[test]
    fn test_daily_work_caps_hold() {
        // Committed route time alone must stay under each type's cap
        // (breaks only tighten the bound).
        let mut per_driver_day: HashMap<(u32, u32), i64> = HashMap::new();
        for route in plan_week(42) {
            *per_driver_day
                .entry((route.day_idx, route.driver_id))
                .or_insert(0) += route.duration_min;
        }
        for ((_, driver_id), minutes) in per_driver_day {
            let cap = match DriverType::from_id(driver_id) {
                DriverType::A => 8 * 60,
                DriverType::B => 12 * 60,
            };
            assert!(minutes <= cap, "driver {driver_id} worked {minutes} min");
        }
    }

    #[test]
    fn test_type_b_rotation_respected() {
        for route in plan_week(42) {
            if route.driver_type == DriverType::B {
                assert_eq!(route.day_idx % 3, route.driver_id % 3);
            }
        }
    }

    #[test]
    fn test_week_is_canonically_sorted() {
        let week = plan_week(42);
        let keys: Vec<_> = week.iter().map(RouteEntry::sort_key).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_peak_flags_match_calendar() {
        let params = ShiftParams::default();
        let calendar = ShiftCalendar::new(base_date(), &params);
        for route in plan_week(11) {
            let start = route.date.and_time(route.start);
            assert_eq!(route.is_peak, calendar.is_peak(start, route.day_idx));
        }
    }

    #[test]
    fn test_same_seed_same_schedule() {
        assert_eq!(plan_week(99), plan_week(99));
    }

    #[test]
    fn test_single_day_sorted_by_start() {
        let params = ShiftParams::default();
        let calendar = ShiftCalendar::new(base_date(), &params);
        let mut rng = SmallRng::seed_from_u64(42);
        let day = GreedyPlanner::new().plan_day(&calendar, 0, 3, 8, &mut rng);

        assert!(!day.is_empty());
        assert!(day.windows(2).all(|w| w[0].start <= w[1].start));
        assert!(day.iter().all(|r| r.day_idx == 0));
    }

    #[test]
    fn test_turnaround_gap_between_bus_routes() {
        // Consecutive routes of one bus within one calendar date are at
        // least duration + 15 min apart.
        let week = plan_week(5);
        let mut by_bus: HashMap<u32, Vec<&RouteEntry>> = HashMap::new();
        for route in &week {
            by_bus.entry(route.bus_id).or_default().push(route);
        }
        for routes in by_bus.values() {
            for pair in routes.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a.day_idx != b.day_idx {
                    continue;
                }
                let a_end = a.date.and_time(a.start) + Duration::minutes(a.duration_min);
                let b_start = b.date.and_time(b.start);
                assert!(b_start >= a_end + Duration::minutes(15));
            }
        }
    }
}
