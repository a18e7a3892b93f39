//! Stochastic feasible-day generation.
//!
//! Seeds the genetic population with rule-respecting but randomized
//! schedules. Instead of packing buses back to back the way the greedy
//! planner does, each day proposes 20-40 random route windows and
//! greedily slots them onto random buses and shuffled drivers through
//! the same eligibility, rest-rule, and admission pipeline. Candidates
//! that find no slot are skipped outright, so seeded days come out
//! sparser and less load-balanced, which hands the search diverse raw
//! material.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{ShiftParams, WEEK_DAYS};
use crate::models::{sort_schedule, Bus, Driver, DriverType, RouteEntry, ShiftCalendar};

/// Candidate routes proposed per seeded day (inclusive range).
const CANDIDATES_PER_DAY: (u32, u32) = (20, 40);

/// Generates one feasible, randomized day.
pub fn seed_day<R: Rng>(
    calendar: &ShiftCalendar,
    day_idx: u32,
    bus_count: u32,
    driver_count: u32,
    params: &ShiftParams,
    rng: &mut R,
) -> Vec<RouteEntry> {
    let day_start = calendar.day_start(day_idx);
    let day_end = calendar.day_end(day_idx);
    let total_minutes = (day_end - day_start).num_minutes();
    let mut buses = Bus::fleet(bus_count, day_start);
    let mut drivers = Driver::pool(driver_count, day_start, params);
    let mut schedule = Vec::new();

    if buses.is_empty() {
        return schedule;
    }

    let candidates = rng.random_range(CANDIDATES_PER_DAY.0..=CANDIDATES_PER_DAY.1);
    for _ in 0..candidates {
        let bus_idx = rng.random_range(0..buses.len());
        let earliest = (buses[bus_idx].next_free_time - day_start)
            .num_minutes()
            .max(0);
        if earliest >= total_minutes {
            continue;
        }
        let offset = rng.random_range(earliest..=total_minutes);
        let mut start = day_start + chrono::Duration::minutes(offset);
        let duration = params.random_route_duration(rng);
        if start + duration > day_end {
            continue;
        }

        drivers.shuffle(rng);
        let mut chosen = None;
        for idx in 0..drivers.len() {
            let driver = &mut drivers[idx];
            if !driver.works_on(day_idx) {
                continue;
            }
            if !driver.can_take_route(start, duration) {
                continue;
            }
            match driver.driver_type {
                DriverType::A => {
                    if driver.in_lunch_window() {
                        if calendar.is_peak(start, day_idx) {
                            continue;
                        }
                        if !driver.take_lunch(&mut start, day_end, params) {
                            continue;
                        }
                        if start + duration > day_end {
                            continue;
                        }
                    }
                }
                DriverType::B => {
                    if driver.break_due(start, params) {
                        if !driver.take_break(&mut start, day_end, params, rng) {
                            continue;
                        }
                        if start + duration > day_end {
                            continue;
                        }
                    }
                }
            }
            if !driver.can_take_route(start, duration) {
                continue;
            }
            chosen = Some(idx);
            break;
        }

        // No slot for this candidate: skip it, no retry, no bus advance.
        let driver_idx = match chosen {
            Some(idx) => idx,
            None => continue,
        };

        let end = start + duration;
        let driver = &mut drivers[driver_idx];
        driver.commit_route(end, duration);
        buses[bus_idx].finish_route(end, params.turnaround());
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
    schedule
}

/// Generates a feasible, randomized week: seven seeded days with fresh
/// resource state each, in canonical order.
pub fn seed_week<R: Rng>(
    calendar: &ShiftCalendar,
    bus_count: u32,
    driver_count: u32,
    params: &ShiftParams,
    rng: &mut R,
) -> Vec<RouteEntry> {
    let mut week = Vec::new();
    for day_idx in 0..WEEK_DAYS {
        week.extend(seed_day(calendar, day_idx, bus_count, driver_count, params, rng));
    }
    sort_schedule(&mut week);
    week
}
