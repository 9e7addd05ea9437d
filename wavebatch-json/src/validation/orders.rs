#[cfg(test)]
#[path = "../../tests/unit/validation/orders_test.rs"]
mod orders_test;

use super::*;

/// Checks that there are no orders with duplicate ids.
fn check_e1004_no_orders_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.problem.orders.iter().map(|order| &order.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1004".to_string(),
            "duplicated order ids".to_string(),
            format!("remove duplicated orders with the following ids: {}", join_ids(ids.iter())),
        ))
    })
}

/// Checks that orders refer only to known articles.
fn check_e1005_no_orders_with_unknown_articles(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = sorted_unique(
        ctx.problem
            .orders
            .iter()
            .filter(|order| order.article_ids.iter().any(|id| !ctx.is_known_article(id)))
            .map(|order| &order.id),
    );

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1005".to_string(),
            "orders with unknown articles".to_string(),
            format!("remove unknown articles from orders with the following ids: {}", join_ids(ids.into_iter())),
        ))
    }
}

/// Validates orders of the problem.
pub fn validate_orders(ctx: &ValidationContext) -> Result<(), MultiFormatError> {
    combine_error_results(&[
        check_e1004_no_orders_with_duplicate_ids(ctx),
        check_e1005_no_orders_with_unknown_articles(ctx),
    ])
        .map_err(From::from)
}
