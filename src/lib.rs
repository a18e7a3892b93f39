//! Weekly bus fleet rostering.
//!
//! Allocates bus routes to a fleet of vehicles and a pool of drivers
//! across a seven-day planning horizon, under shift-length caps,
//! mandatory lunch/break rules, a 1-in-3 rotation for long-shift
//! drivers, and weekday peak-hour constraints. Two planners solve the
//! same problem:
//!
//! - [`GreedyPlanner`]: fills each day by dispatching the earliest
//!   available bus to the first eligible driver.
//! - [`GeneticPlanner`]: evolves a population of whole-week schedules
//!   toward a fitness objective rewarding peak coverage and volume.
//!
//! Both emit the same [`RouteEntry`] record shape, scored by
//! [`evaluate_schedule`] and summarized by [`ScheduleSummary`].
//!
//! # Modules
//!
//! - **`config`**: [`ShiftParams`] and [`GaConfig`]
//! - **`models`**: [`Driver`], [`Bus`], [`ShiftCalendar`], [`RouteEntry`]
//! - **`scheduler`**: the greedy planner and summary statistics
//! - **`ga`**: seeding, fitness, operators, and the generational loop
//! - **`validation`**: fail-fast request checks
//!
//! # Example
//!
//! ```
//! use bus_roster::{generate_linear_schedule_week, ScheduleSummary};
//!
//! let week = generate_linear_schedule_week("2024-01-01", 5, 12).unwrap();
//! let summary = ScheduleSummary::calculate(&week);
//! assert_eq!(summary.total_routes, week.len());
//! ```
//!
//! The planning core is single-threaded and synchronous; a shell that
//! must stay responsive should run it off its interaction thread. For
//! reproducible runs, use the planner types directly and pass a seeded
//! RNG.

pub mod config;
pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::{GaConfig, ShiftParams, WEEK_DAYS};
pub use ga::{evaluate_schedule, GeneticPlanner};
pub use models::{
    is_weekday, sort_schedule, Bus, Driver, DriverType, PeakWindow, RouteEntry, ShiftCalendar,
};
pub use scheduler::{GreedyPlanner, ScheduleSummary};
pub use validation::{ValidationError, ValidationErrorKind};

use validation::{validate_ga_request, validate_week_request};

/// Plans a week with the greedy allocator.
///
/// Validates the request, then fills all seven days with default shift
/// parameters and ambient randomness. Returns the week in canonical
/// `(day, date, start)` order.
///
/// # Errors
/// Returns every validation problem at once when the start date is
/// malformed or the fleet/pool is empty.
pub fn generate_linear_schedule_week(
    start_date: &str,
    bus_count: u32,
    driver_count: u32,
) -> Result<Vec<RouteEntry>, Vec<ValidationError>> {
    let base_date = validate_week_request(start_date, bus_count, driver_count)?;
    Ok(GreedyPlanner::new().plan_week(base_date, bus_count, driver_count, &mut rand::rng()))
}

/// Plans a week with the genetic search.
///
/// Validates the request, then evolves `population_size` stochastic
/// seed weeks over `generations` generations and returns the fittest.
/// Zero generations return the fittest seed unchanged.
///
/// # Errors
/// Returns every validation problem at once when the start date is
/// malformed, the fleet/pool is empty, or the population size is zero.
pub fn run_genetic(
    start_date: &str,
    bus_count: u32,
    driver_count: u32,
    population_size: usize,
    generations: u32,
) -> Result<Vec<RouteEntry>, Vec<ValidationError>> {
    let base_date = validate_ga_request(start_date, bus_count, driver_count, population_size)?;
    let config = GaConfig::default()
        .with_population_size(population_size)
        .with_generations(generations);
    Ok(GeneticPlanner::new()
        .with_config(config)
        .evolve(base_date, bus_count, driver_count, &mut rand::rng()))
}
