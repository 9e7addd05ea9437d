#[cfg(test)]
#[path = "../../../tests/unit/models/problem/order_test.rs"]
mod order_test;

use crate::algorithms::structures::BitSet;
use crate::models::common::{ArticleId, OrderId, WarehouseId};
use crate::models::problem::ArticleCatalog;
use crate::utils::GenericResult;
use rustc_hash::FxHashMap;

/// Maps every warehouse observed in the problem to a bit position of warehouse membership sets.
///
/// Positions are assigned from the complete, sorted set of observed warehouse ids, so the universe
/// has to be created once all orders are known and before any membership set is built.
#[derive(Clone, Debug, Default)]
pub struct WarehouseUniverse {
    warehouses: Vec<WarehouseId>,
    positions: FxHashMap<WarehouseId, usize>,
}

impl WarehouseUniverse {
    /// Creates a new universe from observed warehouse ids, duplicates are allowed.
    pub fn new(warehouses: impl IntoIterator<Item = WarehouseId>) -> Self {
        let mut warehouses = warehouses.into_iter().collect::<Vec<_>>();
        warehouses.sort_unstable();
        warehouses.dedup();

        let positions = warehouses.iter().enumerate().map(|(position, &warehouse)| (warehouse, position)).collect();

        Self { warehouses, positions }
    }

    /// Returns bit position of the warehouse.
    pub fn position(&self, warehouse: WarehouseId) -> Option<usize> {
        self.positions.get(&warehouse).copied()
    }

    /// Returns amount of warehouses in universe.
    pub fn size(&self) -> usize {
        self.warehouses.len()
    }

    /// Creates a membership set of given warehouses.
    pub fn create_set(&self, warehouses: impl IntoIterator<Item = WarehouseId>) -> GenericResult<BitSet> {
        warehouses.into_iter().try_fold(BitSet::new(self.size()), |mut set, warehouse| {
            let position =
                self.position(warehouse).ok_or_else(|| format!("warehouse {warehouse} is not part of universe"))?;
            set.insert(position);

            Ok(set)
        })
    }
}

/// Represents a customer order: an ordered sequence of article references.
#[derive(Clone, Debug)]
pub struct Order {
    /// An unique order id.
    pub id: OrderId,
    /// Ordered articles, the same article can be ordered multiple times.
    pub articles: Vec<ArticleId>,
    warehouses: BitSet,
}

impl Order {
    /// Creates a new order resolving article locations from the catalog.
    pub fn new(
        id: OrderId,
        articles: Vec<ArticleId>,
        catalog: &ArticleCatalog,
        universe: &WarehouseUniverse,
    ) -> GenericResult<Self> {
        let warehouses = articles
            .iter()
            .map(|&article_id| {
                catalog
                    .get(article_id)
                    .map(|article| article.location.warehouse)
                    .ok_or_else(|| format!("order {id} has unknown article {article_id}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let warehouses = universe.create_set(warehouses)?;

        Ok(Self { id, articles, warehouses })
    }

    /// Returns amount of ordered articles.
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Returns amount of distinct warehouses touched by the order.
    pub fn warehouse_count(&self) -> usize {
        self.warehouses.count_ones()
    }

    /// Returns warehouse membership set defined over problem's warehouse universe.
    pub fn warehouses(&self) -> &BitSet {
        &self.warehouses
    }
}
