//! Genetic operators over week schedules.
//!
//! Individuals are whole weeks of [`RouteEntry`] records. Selection is a
//! tournament of two, crossover splices parents at the fixed day-2/day-3
//! boundary, and mutation either deletes a route or reassigns one to a
//! random driver and bus.
//!
//! Neither crossover nor mutation re-validates feasibility: a child may
//! double-book a driver or bus across the splice boundary, or exceed an
//! hour cap after reassignment. The fitness function never inspects
//! feasibility, so the search tolerates such individuals and selection
//! decides their fate.

use rand::seq::index;
use rand::Rng;

use super::fitness::evaluate_schedule;
use crate::models::{sort_schedule, DriverType, RouteEntry};

/// Last day index taken from the first parent during crossover.
const SPLICE_DAY: u32 = 2;

/// Probability that a triggered mutation deletes a route instead of
/// reassigning one.
const DELETE_SHARE: f64 = 0.3;

/// Tournament selection of size two, sampled without replacement.
///
/// Returns the fitter of two distinct individuals (the first on a tie).
/// A population of fewer than two individuals returns its lone member.
///
/// # Panics
/// Panics if the population is empty.
pub fn select_parent<'a, R: Rng>(
    population: &'a [Vec<RouteEntry>],
    rng: &mut R,
) -> &'a Vec<RouteEntry> {
    if population.len() < 2 {
        return &population[0];
    }
    let picks = index::sample(rng, population.len(), 2);
    let first = &population[picks.index(0)];
    let second = &population[picks.index(1)];
    if evaluate_schedule(first) >= evaluate_schedule(second) {
        first
    } else {
        second
    }
}

/// Single-point day-range crossover.
///
/// The child takes days 0-2 from the first parent and days 3-6 from the
/// second, re-sorted into canonical order. Resource conflicts across the
/// splice boundary are not resolved.
pub fn crossover(parent1: &[RouteEntry], parent2: &[RouteEntry]) -> Vec<RouteEntry> {
    let mut child: Vec<RouteEntry> = parent1
        .iter()
        .filter(|r| r.day_idx <= SPLICE_DAY)
        .cloned()
        .collect();
    child.extend(parent2.iter().filter(|r| r.day_idx > SPLICE_DAY).cloned());
    sort_schedule(&mut child);
    child
}

/// Mutates a child in place with probability `mutation_rate`.
///
/// A triggered mutation deletes one uniformly-chosen route with
/// probability 0.3, and otherwise reassigns one to a uniformly-chosen
/// driver (type re-derived from the new id's parity) and bus, without
/// re-validating shift or break feasibility. The child is left in
/// canonical order either way. Empty children are never mutated.
pub fn mutate<R: Rng>(
    child: &mut Vec<RouteEntry>,
    bus_count: u32,
    driver_count: u32,
    mutation_rate: f64,
    rng: &mut R,
) {
    if !child.is_empty() && rng.random_bool(mutation_rate) {
        let idx = rng.random_range(0..child.len());
        if rng.random_bool(DELETE_SHARE) {
            child.remove(idx);
        } else {
            let driver_id = rng.random_range(1..=driver_count);
            let route = &mut child[idx];
            route.driver_id = driver_id;
            route.driver_type = DriverType::from_id(driver_id);
            route.bus_id = rng.random_range(1..=bus_count);
        }
    }
    sort_schedule(child);
}
