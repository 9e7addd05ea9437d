#[cfg(test)]
#[path = "../../tests/unit/construction/batches_test.rs"]
mod batches_test;

use crate::models::problem::{Article, ArticleCatalog};
use crate::models::solution::{Batch, OpenBatch, Wave};
use crate::models::{AisleId, IdSequence, OrderId, Volume, WarehouseId};
use crate::utils::GenericResult;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Articles of a wave located in the same aisle.
struct AisleGroup<'a> {
    items: Vec<(&'a Article, OrderId)>,
}

/// Articles of a wave located in the same warehouse, grouped by aisles.
struct WarehouseGroup<'a> {
    aisles: Vec<AisleGroup<'a>>,
}

/// Packs articles of the wave into batches and records their ids on the wave.
///
/// Returns a configuration error if any article of the wave is heavier than batch capacity.
pub fn pack_batches(
    wave: &mut Wave,
    catalog: &ArticleCatalog,
    capacity: Volume,
    ids: &mut IdSequence,
) -> GenericResult<Vec<Batch>> {
    let batches = pack_wave(wave, catalog, capacity)?;

    Ok(seal_batches(wave, batches, ids))
}

/// Seals open batches of the wave in their order using the id sequence.
pub fn seal_batches(wave: &mut Wave, batches: Vec<OpenBatch>, ids: &mut IdSequence) -> Vec<Batch> {
    batches
        .into_iter()
        .map(|batch| {
            let batch = batch.seal(ids.next_id());
            wave.add_batch(batch.id());
            batch
        })
        .collect()
}

/// Groups articles of the wave into open batches without assigning ids, so it can be run for
/// different waves independently.
///
/// Warehouses with more ordered articles are processed first, and the same is applied to aisles
/// within a warehouse. Each aisle is consumed in descending volume order, opening a new batch on
/// overflow. Once an aisle is exhausted, other whole aisles of the same warehouse which fit into
/// the remaining capacity are merged into the current batch before it is sealed: visiting an
/// extra aisle within an open batch is cheaper than visiting it again later.
pub fn pack_wave(wave: &Wave, catalog: &ArticleCatalog, capacity: Volume) -> GenericResult<Vec<OpenBatch>> {
    let warehouses = group_by_location(wave, catalog, capacity)?;

    let mut batches = vec![];
    for warehouse in warehouses {
        let mut pending = VecDeque::from(warehouse.aisles);

        while let Some(AisleGroup { mut items }) = pending.pop_front() {
            items.sort_by(|(a, _), (b, _)| b.volume.cmp(&a.volume));

            let mut batch = OpenBatch::new(capacity);
            for (article, order_id) in items {
                if batch.try_add(article, order_id).is_err() {
                    batches.push(std::mem::replace(&mut batch, OpenBatch::new(capacity)));
                    batch
                        .try_add(article, order_id)
                        .map_err(|err| format!("cannot add article {}: {err}", article.id))?;
                }
            }

            merge_whole_aisles(&mut batch, &mut pending);
            batches.push(batch);
        }
    }

    Ok(batches)
}

/// Moves every pending aisle which fits completely into the batch, keeps the rest pending.
fn merge_whole_aisles(batch: &mut OpenBatch, pending: &mut VecDeque<AisleGroup<'_>>) {
    pending.retain(|aisle| batch.try_add_all(aisle.items.as_slice()).is_err());
}

fn group_by_location<'a>(
    wave: &Wave,
    catalog: &'a ArticleCatalog,
    capacity: Volume,
) -> GenericResult<Vec<WarehouseGroup<'a>>> {
    let mut warehouses: Vec<WarehouseGroup<'a>> = vec![];
    let mut warehouse_index = FxHashMap::<WarehouseId, usize>::default();
    let mut aisle_index = FxHashMap::<(WarehouseId, AisleId), usize>::default();

    for (article_id, order_id) in wave.items() {
        let article = catalog.get(article_id).ok_or_else(|| format!("unknown article {article_id}"))?;
        if article.volume > capacity {
            return Err(format!(
                "article {article_id} of order {order_id} has volume {} which exceeds batch capacity {capacity}",
                article.volume
            )
            .into());
        }

        let location = article.location;

        let warehouse_idx = *warehouse_index.entry(location.warehouse).or_insert_with(|| {
            warehouses.push(WarehouseGroup { aisles: vec![] });
            warehouses.len() - 1
        });
        let group = &mut warehouses[warehouse_idx];

        let aisle_idx = *aisle_index.entry((location.warehouse, location.aisle)).or_insert_with(|| {
            group.aisles.push(AisleGroup { items: vec![] });
            group.aisles.len() - 1
        });
        group.aisles[aisle_idx].items.push((article, order_id));
    }

    // NOTE stable sorts keep first seen order for equal amounts
    warehouses.sort_by(|a, b| get_article_count(&b.aisles).cmp(&get_article_count(&a.aisles)));
    warehouses.iter_mut().for_each(|group| group.aisles.sort_by(|a, b| b.items.len().cmp(&a.items.len())));

    Ok(warehouses)
}

fn get_article_count(aisles: &[AisleGroup<'_>]) -> usize {
    aisles.iter().map(|aisle| aisle.items.len()).sum()
}
