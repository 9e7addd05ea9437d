#[cfg(test)]
#[path = "../../tests/unit/algorithms/affinity_test.rs"]
mod affinity_test;

use crate::algorithms::structures::BitSet;

/// A penalty for each warehouse required by the seed, but not touched by the candidate.
pub const MISSING_WAREHOUSE_PENALTY: usize = 1;

/// A penalty for each warehouse required by the candidate, but not committed by the seed.
pub const EXTRA_WAREHOUSE_PENALTY: usize = 10;

/// Calculates a directional distance from `seed` to `candidate` orders using their warehouse
/// membership sets defined over the same warehouse universe.
///
/// Reusing warehouses already required by the seed is cheap, while a candidate which brings a new
/// warehouse into the wave is penalized much more: opening a new warehouse visit is the dominant
/// part of a pick tour cost. Please note that metric is not symmetric.
pub fn affinity_distance(seed: &BitSet, candidate: &BitSet) -> usize {
    let missing = seed.count_difference(candidate);
    let extra = candidate.count_difference(seed);

    missing * MISSING_WAREHOUSE_PENALTY + extra * EXTRA_WAREHOUSE_PENALTY
}
