//! A collection of models to represent problem and solution in Order Batching Problem domain.

mod common;
pub use self::common::*;

mod domain;
pub use self::domain::*;

mod extras;
pub use self::extras::Extras;

pub mod problem;
pub mod solution;
