//! Core crate contains a main building blocks to solve ***Order Batching Problem***: customer
//! orders are grouped into picking waves and articles of each wave are grouped into batches.
//!
//! The approach is a two stage greedy heuristic:
//! - orders are clustered into waves under an article count capacity using an asymmetric
//!   warehouse affinity metric (see [`algorithms::affinity_distance`]);
//! - articles of each wave are clustered into batches under a volume capacity using
//!   warehouse/aisle locality (see [`construction::pack_batches`]).
//!
//! A produced solution can be scored and verified with [`checker`] functionality.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use wavebatch_core::prelude::*;
//!
//! let mut builder = ArticleCatalogBuilder::default();
//! builder.add_article(0, 300).add_article(1, 500);
//! builder.set_location(0, 1, 1).set_location(1, 2, 1);
//! let catalog = Arc::new(builder.build()?);
//!
//! let problem = Arc::new(Problem::new(catalog, vec![(0, vec![0, 1]), (1, vec![1])])?);
//! let solution = Solver::new(problem.clone(), Limits::default(), Environment::silent()).solve()?;
//!
//! assert_eq!(solution.waves.len(), 1);
//! assert!(check_solution(&solution, &problem, &Limits::default()).is_ok());
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod checker;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
