//! This module provides functionality to check a solution in json format against a problem in
//! json format and to calculate its cost.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::format::problem::JsonProblem;
use crate::format::solution::{deserialize_solution, read_solution};
use std::io::{BufReader, Read};
use wavebatch_core::checker::{SolutionCost, check_solution, score};
use wavebatch_core::models::Limits;

/// Checks solution feasibility and returns its cost when the solution is feasible.
pub fn check_json_solution<P: Read, S: Read>(
    problem_reader: BufReader<P>,
    solution_reader: BufReader<S>,
    limits: &Limits,
) -> Result<SolutionCost, Vec<String>> {
    let problem = problem_reader
        .read_problem(limits)
        .map_err(|errors| errors.into_iter().map(|err| format!("cannot read problem: {err}")).collect::<Vec<_>>())?;

    let solution =
        deserialize_solution(solution_reader).map_err(|err| vec![format!("cannot read solution: '{err}'")])?;

    let solution = read_solution(&problem, &solution, limits)?;

    check_solution(&solution, &problem, limits)?;

    score(&solution, problem.catalog.as_ref()).map_err(|err| vec![err.to_string()])
}
