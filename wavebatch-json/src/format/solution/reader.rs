#[cfg(test)]
#[path = "../../../tests/unit/format/solution/reader_test.rs"]
mod reader_test;

use super::Solution as ApiSolution;
use crate::format::{Id, IdIndexExtraProperty, IdMap};
use std::sync::Arc;
use wavebatch_core::models::problem::Order;
use wavebatch_core::models::solution::{Batch, BatchItem, Wave};
use wavebatch_core::models::{Limits, Problem, Solution};

/// Maps a solution in json format to the core model, so it can be checked against the problem.
/// Recorded sizes and volumes are kept as they are.
pub fn read_solution(problem: &Problem, solution: &ApiSolution, limits: &Limits) -> Result<Solution, Vec<String>> {
    let index = problem.extras.get_id_index();
    let order_map = index.map(|index| &index.orders);
    let article_map = index.map(|index| &index.articles);

    let mut errors: Vec<String> = vec![];

    let waves = solution
        .waves
        .iter()
        .map(|wave| {
            let orders = wave
                .order_ids
                .iter()
                .filter_map(|order_id| {
                    let order = map_id(order_map, order_id).and_then(|order_id| get_order(problem, order_id));
                    if order.is_none() {
                        errors.push(format!("wave {} has unknown order '{order_id}'", wave.id));
                    }
                    order
                })
                .collect();

            Wave::from_parts(wave.id, limits.wave_capacity, orders, wave.size, wave.batch_ids.clone())
        })
        .collect();

    let batches = solution
        .batches
        .iter()
        .map(|batch| {
            let items = batch
                .items
                .iter()
                .filter_map(|item| match (map_id(order_map, &item.order_id), map_id(article_map, &item.article_id)) {
                    (Some(order_id), Some(article_id)) => Some(BatchItem { article_id, order_id }),
                    _ => {
                        errors.push(format!(
                            "batch {} has unknown item: order '{}', article '{}'",
                            batch.id, item.order_id, item.article_id
                        ));
                        None
                    }
                })
                .collect();

            Batch::from_parts(batch.id, limits.batch_capacity, batch.volume, items)
        })
        .collect();

    if errors.is_empty() { Ok(Solution { waves, batches }) } else { Err(errors) }
}

/// Returns core id using the id map or, if the problem was not read from json, the numeric id itself.
fn map_id(map: Option<&IdMap>, id: &Id) -> Option<usize> {
    match (map, id) {
        (Some(map), _) => map.get_index(id),
        (None, Id::Number(id)) => usize::try_from(*id).ok(),
        (None, Id::Text(_)) => None,
    }
}

fn get_order(problem: &Problem, order_id: usize) -> Option<Arc<Order>> {
    problem.orders.iter().find(|order| order.id == order_id).cloned()
}
