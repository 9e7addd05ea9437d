//! This crate aims to solve order batching problem defined in a simple json format.
//!
//! A problem consists of articles with their volumes and locations, and orders referencing
//! articles. A solution lists waves of orders and batches of picked articles.
//!
//! # Examples
//!
//! ```
//! use std::io::BufWriter;
//! use std::sync::Arc;
//! use wavebatch_json::core::prelude::*;
//! use wavebatch_json::format::problem::JsonProblem;
//! use wavebatch_json::format::solution::JsonSolution;
//!
//! let problem = r#"{
//!   "Articles": [{"ArticleId": "a", "Volume": 300}, {"ArticleId": "b", "Volume": 500}],
//!   "ArticleLocations": [
//!     {"ArticleId": "a", "Warehouse": 1, "Aisle": 1},
//!     {"ArticleId": "b", "Warehouse": 2, "Aisle": 1}
//!   ],
//!   "Orders": [{"OrderId": 1, "ArticleIds": ["a", "b"]}]
//! }"#;
//!
//! let limits = Limits::default();
//! let problem = Arc::new(problem.to_string().read_problem(&limits).map_err(|err| err.to_string())?);
//! let solution = Solver::new(problem.clone(), limits, Environment::silent()).solve()?;
//!
//! let mut buffer = vec![];
//! solution.write_json(&problem, BufWriter::new(&mut buffer))?;
//! assert!(String::from_utf8_lossy(&buffer).contains("\"WaveSize\": 2"));
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub use wavebatch_core as core;

pub mod checker;
pub mod format;
mod validation;
