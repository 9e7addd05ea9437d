#[cfg(test)]
#[path = "../../../tests/unit/models/solution/wave_test.rs"]
mod wave_test;

use crate::models::common::{ArticleId, BatchId, CapacityExceeded, OrderId, WaveId};
use crate::models::problem::Order;
use std::sync::Arc;

/// A capacity bounded group of whole orders processed together for picking.
#[derive(Clone, Debug)]
pub struct Wave {
    id: WaveId,
    capacity: usize,
    article_amount: usize,
    orders: Vec<Arc<Order>>,
    batch_ids: Vec<BatchId>,
}

impl Wave {
    /// Creates a new wave seeded with the given order. The seed is always accepted, even when its
    /// article count alone exceeds the capacity.
    pub fn new(id: WaveId, capacity: usize, seed: Arc<Order>) -> Self {
        Self { id, capacity, article_amount: seed.article_count(), orders: vec![seed], batch_ids: vec![] }
    }

    /// Restores a wave from previously recorded values without enforcing any invariant.
    /// Used to check externally produced solutions.
    pub fn from_parts(
        id: WaveId,
        capacity: usize,
        orders: Vec<Arc<Order>>,
        article_amount: usize,
        batch_ids: Vec<BatchId>,
    ) -> Self {
        Self { id, capacity, article_amount, orders, batch_ids }
    }

    /// Checks whether the order can be added without exceeding the capacity.
    pub fn can_fit(&self, order: &Order) -> bool {
        self.article_amount + order.article_count() <= self.capacity
    }

    /// Tries to add the order to the wave. On failure, the wave is left untouched.
    pub fn try_add(&mut self, order: &Arc<Order>) -> Result<(), CapacityExceeded> {
        if !self.can_fit(order) {
            return Err(CapacityExceeded {
                capacity: self.capacity as u64,
                required: (self.article_amount + order.article_count()) as u64,
            });
        }

        self.article_amount += order.article_count();
        self.orders.push(order.clone());

        Ok(())
    }

    /// Records a batch assigned to this wave.
    pub(crate) fn add_batch(&mut self, batch_id: BatchId) {
        self.batch_ids.push(batch_id);
    }

    /// Returns wave id.
    pub fn id(&self) -> WaveId {
        self.id
    }

    /// Returns wave capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns total amount of articles of member orders.
    pub fn article_amount(&self) -> usize {
        self.article_amount
    }

    /// Returns member orders in insertion order.
    pub fn orders(&self) -> &[Arc<Order>] {
        self.orders.as_slice()
    }

    /// Returns ids of assigned batches.
    pub fn batch_ids(&self) -> &[BatchId] {
        self.batch_ids.as_slice()
    }

    /// Returns all (article, order) pairs of the wave: orders in insertion order, articles in their
    /// order sequence.
    pub fn items(&self) -> impl Iterator<Item = (ArticleId, OrderId)> + '_ {
        self.orders.iter().flat_map(|order| order.articles.iter().map(move |&article_id| (article_id, order.id)))
    }
}
