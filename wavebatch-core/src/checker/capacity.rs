#[cfg(test)]
#[path = "../../tests/unit/checker/capacity_test.rs"]
mod capacity_test;

use super::*;
use crate::utils::combine_error_results;

/// Checks recorded sizes and capacity bounds of waves and batches.
pub fn check_capacity(ctx: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[
        check_wave_sizes(ctx),
        check_wave_capacity(ctx),
        check_batch_volumes(ctx),
        check_batch_capacity(ctx),
    ])
}

/// Checks that every wave's recorded size equals the total amount of items in its batches.
fn check_wave_sizes(ctx: &CheckerContext) -> Result<(), String> {
    ctx.solution.waves.iter().try_for_each(|wave| {
        let actual = ctx.get_wave_batches(wave)?.iter().map(|batch| batch.items().len()).sum::<usize>();

        if actual != wave.article_amount() {
            Err(format!("wave {} has size {} but its batches contain {actual} items", wave.id(), wave.article_amount()))
        } else {
            Ok(())
        }
    })
}

/// Checks that every wave is within wave capacity. A wave with a single order is allowed to
/// exceed it as such order cannot be split.
fn check_wave_capacity(ctx: &CheckerContext) -> Result<(), String> {
    let capacity = ctx.limits.wave_capacity;

    ctx.solution
        .waves
        .iter()
        .filter(|wave| wave.orders().len() > 1)
        .find(|wave| wave.article_amount() > capacity)
        .map_or(Ok(()), |wave| {
            Err(format!("wave {} has {} articles which exceeds capacity {capacity}", wave.id(), wave.article_amount()))
        })
}

/// Checks that every batch's recorded volume equals the total volume of its articles.
fn check_batch_volumes(ctx: &CheckerContext) -> Result<(), String> {
    let catalog = ctx.problem.catalog.as_ref();

    ctx.solution.batches.iter().try_for_each(|batch| {
        let actual = batch.items().iter().try_fold(0_u64, |acc, item| {
            let article = catalog
                .get(item.article_id)
                .ok_or_else(|| format!("batch {} has unknown article {}", batch.id(), item.article_id))?;

            acc.checked_add(article.volume).ok_or_else(|| format!("batch {} volume overflows", batch.id()))
        })?;

        if actual != batch.volume() {
            Err(format!("batch {} has volume {} but its articles have volume {actual}", batch.id(), batch.volume()))
        } else {
            Ok(())
        }
    })
}

/// Checks that every batch is within batch capacity.
fn check_batch_capacity(ctx: &CheckerContext) -> Result<(), String> {
    let capacity = ctx.limits.batch_capacity;

    ctx.solution.batches.iter().find(|batch| batch.volume() > capacity).map_or(Ok(()), |batch| {
        Err(format!("batch {} has volume {} which exceeds capacity {capacity}", batch.id(), batch.volume()))
    })
}
