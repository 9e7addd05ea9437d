#[cfg(test)]
#[path = "../../tests/unit/checker/assignment_test.rs"]
mod assignment_test;

use super::*;
use crate::models::{ArticleId, OrderId};
use crate::utils::{combine_error_results, get_duplicates};

/// Checks assignment of orders to waves and of ordered articles to batches.
pub fn check_assignment(ctx: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_order_assignment(ctx), check_article_assignment(ctx), check_batch_ownership(ctx)])
}

/// Checks that every order of the problem is assigned to exactly one wave.
fn check_order_assignment(ctx: &CheckerContext) -> Result<(), String> {
    let known = ctx.problem.orders.iter().map(|order| order.id).collect::<FxHashSet<_>>();
    let assigned =
        ctx.solution.waves.iter().flat_map(|wave| wave.orders().iter().map(|order| order.id)).collect::<Vec<_>>();

    if let Some(duplicates) = get_duplicates(assigned.iter()) {
        return Err(format!("orders assigned to more than one wave: {}", join_ids(duplicates.iter())));
    }

    let assigned = assigned.into_iter().collect::<FxHashSet<_>>();

    let mut unknown = assigned.difference(&known).copied().collect::<Vec<_>>();
    if !unknown.is_empty() {
        unknown.sort_unstable();
        return Err(format!("unknown orders assigned to waves: {}", join_ids(unknown.iter())));
    }

    let mut missing = known.difference(&assigned).copied().collect::<Vec<_>>();
    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(format!("orders not assigned to any wave: {}", join_ids(missing.iter())));
    }

    Ok(())
}

/// Checks that every ordered article is picked exactly once: ordered and picked (order, article)
/// pairs are compared as multisets.
fn check_article_assignment(ctx: &CheckerContext) -> Result<(), String> {
    let mut balance = FxHashMap::<(OrderId, ArticleId), i64>::default();

    for order in ctx.problem.orders.iter() {
        order.articles.iter().for_each(|&article_id| *balance.entry((order.id, article_id)).or_insert(0) += 1);
    }

    for batch in ctx.solution.batches.iter() {
        batch.items().iter().for_each(|item| *balance.entry((item.order_id, item.article_id)).or_insert(0) -= 1);
    }

    let mut mismatches = balance.into_iter().filter(|(_, count)| *count != 0).collect::<Vec<_>>();
    if mismatches.is_empty() {
        return Ok(());
    }

    mismatches.sort_unstable();
    let describe = |items: &[&((OrderId, ArticleId), i64)]| {
        items
            .iter()
            .map(|((order_id, article_id), count)| format!("({order_id}, {article_id}) x{}", count.abs()))
            .collect::<Vec<_>>()
    };

    let (missing, extra): (Vec<_>, Vec<_>) = mismatches.iter().partition(|(_, count)| *count > 0);
    let missing = describe(missing.as_slice());
    let extra = describe(extra.as_slice());

    Err(match (missing.is_empty(), extra.is_empty()) {
        (false, true) => format!("ordered articles are not picked: {}", missing.join(", ")),
        (true, false) => format!("picked articles are not ordered: {}", extra.join(", ")),
        _ => format!(
            "ordered articles are not picked: {}; picked articles are not ordered: {}",
            missing.join(", "),
            extra.join(", ")
        ),
    })
}

/// Checks that every batch belongs to exactly one wave and picks articles of that wave's orders only.
fn check_batch_ownership(ctx: &CheckerContext) -> Result<(), String> {
    let mut owners = FxHashMap::<BatchId, Vec<usize>>::default();
    ctx.solution.waves.iter().for_each(|wave| {
        wave.batch_ids().iter().for_each(|batch_id| owners.entry(*batch_id).or_default().push(wave.id()));
    });

    ctx.solution.batches.iter().try_for_each(|batch| match owners.get(&batch.id()).map(|waves| waves.as_slice()) {
        None | Some([]) => Err(format!("batch {} is not assigned to any wave", batch.id())),
        Some([_, _, ..]) => Err(format!("batch {} is assigned to more than one wave", batch.id())),
        Some([_]) => Ok(()),
    })?;

    ctx.solution.waves.iter().try_for_each(|wave| {
        let orders = wave.orders().iter().map(|order| order.id).collect::<FxHashSet<_>>();

        ctx.get_wave_batches(wave)?.iter().try_for_each(|batch| {
            batch.items().iter().find(|item| !orders.contains(&item.order_id)).map_or(Ok(()), |item| {
                Err(format!(
                    "batch {} of wave {} picks article {} for order {} from another wave",
                    batch.id(),
                    wave.id(),
                    item.article_id,
                    item.order_id
                ))
            })
        })
    })
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a usize>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}
