//! This module provides functionality to score a solution and to check that it is feasible, which
//! means that there are no capacity violations and every ordered article is picked exactly once.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::models::solution::{Batch, Wave};
use crate::models::{BatchId, Limits, Problem, Solution};
use rustc_hash::{FxHashMap, FxHashSet};

mod assignment;
use self::assignment::check_assignment;

mod capacity;
use self::capacity::check_capacity;

mod cost;
pub use self::cost::*;

/// Stores problem and solution together and provides some helper methods.
pub struct CheckerContext<'a> {
    /// A problem definition.
    pub problem: &'a Problem,
    /// A solution to be checked.
    pub solution: &'a Solution,
    /// Capacity limits used to build the solution.
    pub limits: &'a Limits,

    batch_index: FxHashMap<BatchId, &'a Batch>,
}

impl<'a> CheckerContext<'a> {
    /// Creates an instance of `CheckerContext`.
    pub fn new(problem: &'a Problem, solution: &'a Solution, limits: &'a Limits) -> Self {
        let batch_index = solution.batches.iter().map(|batch| (batch.id(), batch)).collect();

        Self { problem, solution, limits, batch_index }
    }

    /// Performs solution check.
    pub fn check(&self) -> Result<(), Vec<String>> {
        // avoid duplicates keeping original order
        let (_, errors) = check_capacity(self)
            .err()
            .into_iter()
            .chain(check_assignment(self).err())
            .flatten()
            .fold((FxHashSet::default(), Vec::default()), |(mut used, mut errors), error| {
                if used.insert(error.clone()) {
                    errors.push(error);
                }

                (used, errors)
            });

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Returns batches of the wave or an error if the wave refers to an unknown batch.
    fn get_wave_batches(&self, wave: &Wave) -> Result<Vec<&'a Batch>, String> {
        wave.batch_ids()
            .iter()
            .map(|batch_id| {
                self.batch_index
                    .get(batch_id)
                    .copied()
                    .ok_or_else(|| format!("wave {} refers to unknown batch {batch_id}", wave.id()))
            })
            .collect()
    }
}

/// Checks that the solution is feasible for the given problem and limits.
pub fn check_solution(solution: &Solution, problem: &Problem, limits: &Limits) -> Result<(), Vec<String>> {
    CheckerContext::new(problem, solution, limits).check()
}
