#[cfg(test)]
#[path = "../../tests/unit/checker/cost_test.rs"]
mod cost_test;

use crate::models::problem::ArticleCatalog;
use crate::models::solution::Batch;
use crate::models::{AisleId, Solution, WarehouseId};
use crate::utils::GenericResult;
use rustc_hash::FxHashSet;

/// A cost of visiting a distinct warehouse within a batch.
pub const WAREHOUSE_VISIT_COST: u64 = 10;
/// A cost of visiting a distinct aisle within a batch.
pub const AISLE_VISIT_COST: u64 = 5;
/// A fixed cost of every wave.
pub const WAVE_COST: u64 = 10;
/// A fixed cost of every batch.
pub const BATCH_COST: u64 = 5;

/// Specifies cost components of a solution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolutionCost {
    /// Cost of warehouse and aisle visits over all batches.
    pub tour: u64,
    /// Fixed overhead of waves and batches.
    pub rest: u64,
    /// Total cost: tour and rest.
    pub total: u64,
}

/// Calculates cost of the solution. Fails if a batch refers to an article missing in the catalog.
pub fn score(solution: &Solution, catalog: &ArticleCatalog) -> GenericResult<SolutionCost> {
    let tour = solution.batches.iter().try_fold(0, |acc, batch| get_tour_cost(batch, catalog).map(|cost| acc + cost))?;
    let rest = solution.waves.len() as u64 * WAVE_COST + solution.batches.len() as u64 * BATCH_COST;

    Ok(SolutionCost { tour, rest, total: tour + rest })
}

fn get_tour_cost(batch: &Batch, catalog: &ArticleCatalog) -> GenericResult<u64> {
    let mut warehouses = FxHashSet::<WarehouseId>::default();
    let mut aisles = FxHashSet::<(WarehouseId, AisleId)>::default();

    for item in batch.items() {
        let location = catalog
            .get(item.article_id)
            .map(|article| article.location)
            .ok_or_else(|| format!("batch {} has unknown article {}", batch.id(), item.article_id))?;

        warehouses.insert(location.warehouse);
        aisles.insert((location.warehouse, location.aisle));
    }

    Ok(warehouses.len() as u64 * WAREHOUSE_VISIT_COST + aisles.len() as u64 * AISLE_VISIT_COST)
}
