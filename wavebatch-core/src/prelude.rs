//! This module reimports commonly used types.

pub use crate::checker::{SolutionCost, check_solution, score};
pub use crate::models::problem::{Article, ArticleCatalog, ArticleCatalogBuilder, Location, Order};
pub use crate::models::solution::{Batch, Wave};
pub use crate::models::{Limits, Problem, Solution};
pub use crate::solver::Solver;

pub use crate::utils::Environment;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
