#[cfg(test)]
#[path = "../../tests/unit/construction/waves_test.rs"]
mod waves_test;

use crate::algorithms::affinity_distance;
use crate::models::IdSequence;
use crate::models::problem::Order;
use crate::models::solution::Wave;
use std::sync::Arc;

/// Builds waves from the given orders using greedy clustering by warehouse affinity.
///
/// Orders which touch more warehouses are harder to place, so they are used as wave seeds first.
/// For each seed, remaining orders are scanned in ascending affinity distance and added until the
/// first one which does not fit into the wave capacity. Ties are broken by the input order, so the
/// result is a deterministic function of the input sequence.
///
/// Every input order ends up in exactly one wave. An order which exceeds the capacity on its own
/// is placed alone into its own wave.
pub fn build_waves(orders: &[Arc<Order>], capacity: usize, ids: &mut IdSequence) -> Vec<Wave> {
    let mut pool = orders.iter().collect::<Vec<_>>();
    // NOTE stable sort keeps input order for equal priorities
    pool.sort_by(|a, b| b.warehouse_count().cmp(&a.warehouse_count()));

    let mut waves = vec![];

    while !pool.is_empty() {
        let seed = pool.remove(0);
        let mut wave = Wave::new(ids.next_id(), capacity, seed.clone());

        let mut candidates = pool
            .iter()
            .enumerate()
            .map(|(idx, order)| (idx, affinity_distance(seed.warehouses(), order.warehouses())))
            .collect::<Vec<_>>();
        candidates.sort_by(|(_, a), (_, b)| a.cmp(b));

        let mut added = vec![false; pool.len()];
        for (idx, _) in candidates {
            if wave.try_add(pool[idx]).is_err() {
                break;
            }
            added[idx] = true;
        }

        let mut idx = 0;
        pool.retain(|_| {
            let keep = !added[idx];
            idx += 1;
            keep
        });

        waves.push(wave);
    }

    waves
}
