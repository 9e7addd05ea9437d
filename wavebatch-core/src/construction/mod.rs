//! This module contains construction heuristics which build waves from orders and batches from
//! wave articles.

mod batches;
pub use self::batches::*;

mod waves;
pub use self::waves::*;
