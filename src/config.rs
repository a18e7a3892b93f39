//! Planner configuration.
//!
//! Two parameter sets drive the crate: [`ShiftParams`] describes the
//! operating day (shift window, route lengths, labor rules, peak windows)
//! and [`GaConfig`] sizes the genetic search. Defaults reproduce the
//! standard urban roster: a 21-hour operating day starting at 06:00,
//! 50-70 minute routes, and weekday peaks at 07-09 and 17-19.
//!
//! Builder setters keep values in their valid domains, so a configured
//! planner never has to re-validate them mid-run.

use chrono::Duration;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{DriverType, PeakWindow};

/// Length of the planning horizon in days.
pub const WEEK_DAYS: u32 = 7;

/// Operating-day parameters shared by both planners.
///
/// # Example
/// ```
/// use bus_roster::ShiftParams;
///
/// let params = ShiftParams::default()
///     .with_shift_start_hour(5)
///     .with_route_minutes(40, 60);
/// assert_eq!(params.shift_start_hour, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftParams {
    /// Hour of day the shift window opens (0-23).
    pub shift_start_hour: u32,
    /// Length of the operating day in hours. The default 21 runs a
    /// 06:00 start past midnight to 03:00.
    pub shift_hours: i64,
    /// Inclusive route duration range in minutes.
    pub route_minutes: (i64, i64),
    /// Daily working-time cap for type-A drivers (hours).
    pub work_hours_a: i64,
    /// Daily working-time cap for type-B drivers (hours).
    pub work_hours_b: i64,
    /// Length of the mandatory type-A lunch (minutes).
    pub lunch_minutes: i64,
    /// Elapsed time after which a type-B driver's break becomes due (hours).
    pub break_interval_hours: i64,
    /// Length of the once-per-day type-B long break (minutes).
    pub long_break_minutes: i64,
    /// Inclusive range for subsequent type-B short breaks (minutes).
    pub short_break_minutes: (i64, i64),
    /// Bus turnaround buffer appended after every route (minutes).
    pub turnaround_minutes: i64,
    /// How far an idle bus is advanced when no driver qualifies (minutes).
    pub idle_dwell_minutes: i64,
    /// Peak-hour windows, applied on weekdays only.
    pub peak_windows: Vec<PeakWindow>,
}

impl Default for ShiftParams {
    fn default() -> Self {
        Self {
            shift_start_hour: 6,
            shift_hours: 21,
            route_minutes: (50, 70),
            work_hours_a: 8,
            work_hours_b: 12,
            lunch_minutes: 60,
            break_interval_hours: 2,
            long_break_minutes: 40,
            short_break_minutes: (15, 20),
            turnaround_minutes: 15,
            idle_dwell_minutes: 10,
            peak_windows: vec![PeakWindow::new(7, 9), PeakWindow::new(17, 19)],
        }
    }
}

impl ShiftParams {
    /// Sets the shift start hour (clamped to 0-23).
    pub fn with_shift_start_hour(mut self, hour: u32) -> Self {
        self.shift_start_hour = hour.min(23);
        self
    }

    /// Sets the route duration range; bounds are swapped if reversed.
    pub fn with_route_minutes(mut self, min: i64, max: i64) -> Self {
        self.route_minutes = (min.min(max), min.max(max));
        self
    }

    /// Replaces the peak-hour windows.
    pub fn with_peak_windows(mut self, windows: Vec<PeakWindow>) -> Self {
        self.peak_windows = windows;
        self
    }

    /// Daily working-time cap for the given driver type.
    pub fn work_limit(&self, driver_type: DriverType) -> Duration {
        match driver_type {
            DriverType::A => Duration::hours(self.work_hours_a),
            DriverType::B => Duration::hours(self.work_hours_b),
        }
    }

    /// Total length of the operating day.
    #[inline]
    pub fn shift_length(&self) -> Duration {
        Duration::hours(self.shift_hours)
    }

    /// Lunch duration for type-A drivers.
    #[inline]
    pub fn lunch(&self) -> Duration {
        Duration::minutes(self.lunch_minutes)
    }

    /// Elapsed time after which a type-B break becomes due.
    #[inline]
    pub fn break_interval(&self) -> Duration {
        Duration::hours(self.break_interval_hours)
    }

    /// The once-per-day type-B long break.
    #[inline]
    pub fn long_break(&self) -> Duration {
        Duration::minutes(self.long_break_minutes)
    }

    /// Bus turnaround buffer after a route.
    #[inline]
    pub fn turnaround(&self) -> Duration {
        Duration::minutes(self.turnaround_minutes)
    }

    /// Idle advance applied to a bus that found no driver.
    #[inline]
    pub fn idle_dwell(&self) -> Duration {
        Duration::minutes(self.idle_dwell_minutes)
    }

    /// Draws a uniform route duration from the configured range.
    pub fn random_route_duration<R: Rng>(&self, rng: &mut R) -> Duration {
        let (min, max) = self.route_minutes;
        Duration::minutes(rng.random_range(min..=max))
    }

    /// Draws a uniform short-break duration from the configured range.
    pub fn random_short_break<R: Rng>(&self, rng: &mut R) -> Duration {
        let (min, max) = self.short_break_minutes;
        Duration::minutes(rng.random_range(min..=max))
    }
}

/// Genetic search sizing.
///
/// # Example
/// ```
/// use bus_roster::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_generations(50);
/// assert_eq!(config.population_size, 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of individuals kept per generation (at least 1).
    pub population_size: usize,
    /// Number of generations to evolve. Zero returns the fittest seed.
    pub generations: u32,
    /// Per-child mutation probability (0.0-1.0).
    pub mutation_rate: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 15,
            generations: 20,
            mutation_rate: 0.2,
        }
    }
}

impl GaConfig {
    /// Sets the population size (clamped to at least 1).
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size.max(1);
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the mutation probability (clamped to 0.0-1.0).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }
}
