use super::Problem as ApiProblem;
use crate::format::{FormatError, IdIndex, IdIndexExtraProperty, MultiFormatError};
use crate::validation::ValidationContext;
use std::sync::Arc;
use wavebatch_core::models::problem::ArticleCatalogBuilder;
use wavebatch_core::models::{Extras, Limits, Problem as CoreProblem};
use wavebatch_core::utils::GenericError;

pub(super) fn map_to_problem(api_problem: ApiProblem, limits: &Limits) -> Result<CoreProblem, MultiFormatError> {
    ValidationContext::new(&api_problem, limits).validate()?;

    let mut index = IdIndex::default();
    let mut builder = ArticleCatalogBuilder::default();

    api_problem.articles.iter().for_each(|article| {
        builder.add_article(index.articles.add(&article.id), article.volume);
    });

    api_problem.locations.iter().for_each(|location| {
        let article_id = index.articles.add(&location.article_id);
        let warehouse = index.warehouses.add(&location.warehouse);
        let aisle = index.aisles.add(&location.aisle);

        builder.set_location(article_id, warehouse, aisle);
    });

    let catalog = Arc::new(builder.build().map_err(to_multi_format_error)?);

    let orders = api_problem
        .orders
        .iter()
        .map(|order| {
            let order_id = index.orders.add(&order.id);
            let article_ids = order.article_ids.iter().map(|article_id| index.articles.add(article_id)).collect();

            (order_id, article_ids)
        })
        .collect();

    let mut extras = Extras::default();
    extras.set_id_index(index);

    CoreProblem::new(catalog, orders).map(|problem| problem.with_extras(extras)).map_err(to_multi_format_error)
}

fn to_multi_format_error(error: GenericError) -> MultiFormatError {
    FormatError::new(
        "E0000".to_string(),
        "cannot create problem".to_string(),
        format!("check problem definition: '{error}'"),
    )
    .into()
}
