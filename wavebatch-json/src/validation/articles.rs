#[cfg(test)]
#[path = "../../tests/unit/validation/articles_test.rs"]
mod articles_test;

use super::*;

/// Checks that catalog has no articles with duplicate ids.
fn check_e1000_no_articles_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.problem.articles.iter().map(|article| &article.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1000".to_string(),
            "duplicated article ids".to_string(),
            format!("remove duplicated articles with the following ids: {}", join_ids(ids.iter())),
        ))
    })
}

/// Checks that every article has a positive volume.
fn check_e1001_no_articles_with_zero_volume(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids =
        sorted_unique(ctx.problem.articles.iter().filter(|article| article.volume == 0).map(|article| &article.id));

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1001".to_string(),
            "articles with zero volume".to_string(),
            format!("set positive volume for articles with the following ids: {}", join_ids(ids.into_iter())),
        ))
    }
}

/// Checks that every location refers to a known article.
fn check_e1002_no_locations_of_unknown_articles(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = sorted_unique(
        ctx.problem
            .locations
            .iter()
            .map(|location| &location.article_id)
            .filter(|id| !ctx.is_known_article(id)),
    );

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1002".to_string(),
            "location is assigned to unknown article".to_string(),
            format!("remove locations or add articles with the following ids: {}", join_ids(ids.into_iter())),
        ))
    }
}

/// Checks that every article has a location.
fn check_e1003_no_articles_without_location(ctx: &ValidationContext) -> Result<(), FormatError> {
    let located = ctx.problem.locations.iter().map(|location| &location.article_id).collect::<FxHashSet<_>>();
    let ids = sorted_unique(ctx.problem.articles.iter().map(|article| &article.id).filter(|id| !located.contains(id)));

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1003".to_string(),
            "articles without location".to_string(),
            format!("add locations for articles with the following ids: {}", join_ids(ids.into_iter())),
        ))
    }
}

/// Checks that every ordered article fits into an empty batch.
fn check_e1006_no_articles_heavier_than_batch(ctx: &ValidationContext) -> Result<(), FormatError> {
    let capacity = ctx.limits.batch_capacity;
    let ordered = ctx.problem.orders.iter().flat_map(|order| order.article_ids.iter()).collect::<FxHashSet<_>>();
    let ids = sorted_unique(
        ctx.problem
            .articles
            .iter()
            .filter(|article| article.volume > capacity && ordered.contains(&article.id))
            .map(|article| &article.id),
    );

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new_with_details(
            "E1006".to_string(),
            "articles heavier than batch capacity".to_string(),
            format!("reduce volume of articles or increase batch capacity: {}", join_ids(ids.into_iter())),
            format!("batch capacity is {capacity}"),
        ))
    }
}

/// Validates articles of the catalog.
pub fn validate_articles(ctx: &ValidationContext) -> Result<(), MultiFormatError> {
    combine_error_results(&[
        check_e1000_no_articles_with_duplicate_ids(ctx),
        check_e1001_no_articles_with_zero_volume(ctx),
        check_e1002_no_locations_of_unknown_articles(ctx),
        check_e1003_no_articles_without_location(ctx),
        check_e1006_no_articles_heavier_than_batch(ctx),
    ])
    .map_err(From::from)
}
