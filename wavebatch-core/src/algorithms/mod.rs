//! This module contains algorithms and data structures used by construction heuristics.

mod affinity;
pub use self::affinity::*;

pub mod structures;
