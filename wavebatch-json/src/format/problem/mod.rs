//! Specifies logic to read problem from json input.

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use crate::format::MultiFormatError;
use std::io::{BufReader, Read};
use wavebatch_core::models::{Limits, Problem as CoreProblem};

mod model;
pub use self::model::*;

mod reader;
use self::reader::map_to_problem;

/// Reads specific problem definition from various sources.
pub trait JsonProblem {
    /// Reads problem defined in json format and validates it against the limits.
    fn read_problem(self, limits: &Limits) -> Result<CoreProblem, MultiFormatError>;
}

impl<R: Read> JsonProblem for BufReader<R> {
    fn read_problem(self, limits: &Limits) -> Result<CoreProblem, MultiFormatError> {
        let problem = deserialize_problem(self)?;

        map_to_problem(problem, limits)
    }
}

impl JsonProblem for String {
    fn read_problem(self, limits: &Limits) -> Result<CoreProblem, MultiFormatError> {
        let problem = deserialize_problem(BufReader::new(self.as_bytes()))?;

        map_to_problem(problem, limits)
    }
}

impl JsonProblem for Problem {
    fn read_problem(self, limits: &Limits) -> Result<CoreProblem, MultiFormatError> {
        map_to_problem(self, limits)
    }
}
