//! Input validation for planning requests.
//!
//! Checks caller parameters before any simulation state is built:
//! a malformed start date or an empty fleet, driver pool, or population
//! is rejected once at the boundary. Infeasible situations *inside* a
//! run (no eligible driver, a window crossing the day end) are not
//! errors; the allocators handle them with retry/skip policies.

use chrono::NaiveDate;
use std::fmt;

/// Result of a validation pass: the parsed base date, or every problem
/// found.
pub type ValidationResult = Result<NaiveDate, Vec<ValidationError>>;

/// Date format accepted at the boundary.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A request validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of request validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The start date is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate,
    /// The fleet has no buses.
    NoBuses,
    /// The pool has no drivers.
    NoDrivers,
    /// The genetic search was asked to run with an empty population.
    EmptyPopulation,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a greedy week request.
///
/// Returns the parsed base date, or all problems found at once.
pub fn validate_week_request(
    start_date: &str,
    bus_count: u32,
    driver_count: u32,
) -> ValidationResult {
    let mut errors = Vec::new();

    let base_date = match NaiveDate::parse_from_str(start_date, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDate,
                format!("start date '{start_date}' is not a valid YYYY-MM-DD date"),
            ));
            None
        }
    };

    if bus_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoBuses,
            "bus count must be at least 1",
        ));
    }
    if driver_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoDrivers,
            "driver count must be at least 1",
        ));
    }

    match base_date {
        Some(date) if errors.is_empty() => Ok(date),
        _ => Err(errors),
    }
}

/// Validates a genetic search request.
///
/// Same checks as [`validate_week_request`], plus the population size.
pub fn validate_ga_request(
    start_date: &str,
    bus_count: u32,
    driver_count: u32,
    population_size: usize,
) -> ValidationResult {
    let mut errors = Vec::new();
    let base_date = match validate_week_request(start_date, bus_count, driver_count) {
        Ok(date) => Some(date),
        Err(week_errors) => {
            errors.extend(week_errors);
            None
        }
    };

    if population_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPopulation,
            "population size must be at least 1",
        ));
    }

    match base_date {
        Some(date) if errors.is_empty() => Ok(date),
        _ => Err(errors),
    }
}
