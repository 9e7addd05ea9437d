#[cfg(test)]
#[path = "../../tests/unit/models/domain_test.rs"]
mod domain_test;

use crate::models::common::{ArticleId, OrderId};
use crate::models::problem::{ArticleCatalog, Order, WarehouseUniverse};
use crate::models::solution::{Batch, Wave};
use crate::models::Extras;
use crate::utils::{GenericResult, get_duplicates};
use std::sync::Arc;

/// Defines problem: a catalog of located articles and a list of orders.
pub struct Problem {
    /// Article catalog.
    pub catalog: Arc<ArticleCatalog>,

    /// Orders in their input sequence.
    pub orders: Vec<Arc<Order>>,

    /// A universe of warehouses touched by orders.
    pub universe: WarehouseUniverse,

    /// Any additional, format specific, data.
    pub extras: Extras,
}

impl Problem {
    /// Creates a new problem from the catalog and raw orders. The warehouse universe is built from
    /// all orders before any order is constructed.
    pub fn new(catalog: Arc<ArticleCatalog>, orders: Vec<(OrderId, Vec<ArticleId>)>) -> GenericResult<Self> {
        if let Some(ids) = get_duplicates(orders.iter().map(|(id, _)| id)) {
            let ids = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
            return Err(format!("duplicated order ids: {}", ids.join(", ")).into());
        }

        let universe = WarehouseUniverse::new(
            orders
                .iter()
                .flat_map(|(_, articles)| articles.iter())
                .filter_map(|&article_id| catalog.get(article_id))
                .map(|article| article.location.warehouse),
        );

        let orders = orders
            .into_iter()
            .map(|(id, articles)| Order::new(id, articles, catalog.as_ref(), &universe).map(Arc::new))
            .collect::<GenericResult<Vec<_>>>()?;

        Ok(Self { catalog, orders, universe, extras: Extras::default() })
    }

    /// Sets extras.
    pub fn with_extras(mut self, extras: Extras) -> Self {
        self.extras = extras;
        self
    }

    /// Returns total amount of ordered articles.
    pub fn article_count(&self) -> usize {
        self.orders.iter().map(|order| order.article_count()).sum()
    }
}

/// Represents a solution: waves of orders and batches of their articles.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    /// Waves in the order they were built.
    pub waves: Vec<Wave>,

    /// Batches of all waves, grouped by wave in wave order.
    pub batches: Vec<Batch>,
}
