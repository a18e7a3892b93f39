//! Genetic week planning.
//!
//! Evolves whole-week schedules toward the fitness objective shared
//! with the greedy planner. Individuals are plain `Vec<RouteEntry>`
//! weeks; the population is seeded by the stochastic day generator and
//! evolved with tournament selection, a day-range splice crossover, and
//! delete/reassign mutation under full generational replacement.
//!
//! The operators deliberately skip feasibility re-validation; see
//! [`operators`] for the consequences.
//!
//! # Submodules
//!
//! - [`seeding`]: feasible randomized days/weeks for the initial population
//! - [`fitness`]: the scalar objective
//! - [`operators`]: selection, crossover, mutation
//! - [`runner`]: the generational loop

pub mod fitness;
pub mod operators;
pub mod runner;
pub mod seeding;

pub use fitness::evaluate_schedule;
pub use runner::GeneticPlanner;
pub use seeding::{seed_day, seed_week};
