#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use super::{Batch as ApiBatch, Item, Solution as ApiSolution, Wave as ApiWave, serialize_solution};
use crate::format::{Id, IdIndexExtraProperty};
use std::io::{BufWriter, Write};
use wavebatch_core::models::{Problem, Solution};
use wavebatch_core::utils::GenericResult;

/// A trait to serialize solution in json format.
pub trait JsonSolution<W: Write> {
    /// Serializes solution in json format.
    fn write_json(&self, problem: &Problem, writer: BufWriter<W>) -> GenericResult<()>;
}

impl<W: Write> JsonSolution<W> for Solution {
    fn write_json(&self, problem: &Problem, mut writer: BufWriter<W>) -> GenericResult<()> {
        let solution = create_solution(problem, self);
        serialize_solution(&solution, &mut writer)?;

        Ok(())
    }
}

/// Creates solution in json format mapping core ids back to the original ones.
pub fn create_solution(problem: &Problem, solution: &Solution) -> ApiSolution {
    let index = problem.extras.get_id_index();
    let get_order_id = |order_id| index.map_or(Id::Number(order_id as u64), |index| index.orders.to_id(order_id));
    let get_article_id =
        |article_id| index.map_or(Id::Number(article_id as u64), |index| index.articles.to_id(article_id));

    let waves = solution
        .waves
        .iter()
        .map(|wave| ApiWave {
            id: wave.id(),
            batch_ids: wave.batch_ids().to_vec(),
            order_ids: wave.orders().iter().map(|order| get_order_id(order.id)).collect(),
            size: wave.article_amount(),
        })
        .collect();

    let batches = solution
        .batches
        .iter()
        .map(|batch| ApiBatch {
            id: batch.id(),
            items: batch
                .items()
                .iter()
                .map(|item| Item { order_id: get_order_id(item.order_id), article_id: get_article_id(item.article_id) })
                .collect(),
            volume: batch.volume(),
        })
        .collect();

    ApiSolution { waves, batches }
}
