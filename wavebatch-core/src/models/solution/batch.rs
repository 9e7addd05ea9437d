#[cfg(test)]
#[path = "../../../tests/unit/models/solution/batch_test.rs"]
mod batch_test;

use crate::models::common::{ArticleId, BatchId, CapacityExceeded, OrderId, Volume};
use crate::models::problem::Article;

/// An article instance picked for a specific order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BatchItem {
    /// Article id.
    pub article_id: ArticleId,
    /// Order id.
    pub order_id: OrderId,
}

/// A batch which is still being filled. Once complete, it is sealed into a [`Batch`].
#[derive(Clone, Debug)]
pub struct OpenBatch {
    capacity: Volume,
    volume: Volume,
    items: Vec<BatchItem>,
}

impl OpenBatch {
    /// Creates an empty open batch.
    pub fn new(capacity: Volume) -> Self {
        Self { capacity, volume: 0, items: vec![] }
    }

    /// Tries to add an article instance. On failure, the batch is left untouched.
    pub fn try_add(&mut self, article: &Article, order_id: OrderId) -> Result<(), CapacityExceeded> {
        let required = self.get_required(self.volume.checked_add(article.volume))?;

        self.volume = required;
        self.items.push(BatchItem { article_id: article.id, order_id });

        Ok(())
    }

    /// Tries to add all article instances at once: either all of them are added or none.
    pub fn try_add_all(&mut self, items: &[(&Article, OrderId)]) -> Result<(), CapacityExceeded> {
        let required = items.iter().try_fold(self.volume, |acc, (article, _)| acc.checked_add(article.volume));
        let required = self.get_required(required)?;

        self.volume = required;
        self.items.extend(items.iter().map(|&(article, order_id)| BatchItem { article_id: article.id, order_id }));

        Ok(())
    }

    /// Accepts the required volume if it is known and within capacity. Overflow is reported as
    /// exceeding capacity with the maximum volume required.
    fn get_required(&self, required: Option<Volume>) -> Result<Volume, CapacityExceeded> {
        match required {
            Some(required) if required <= self.capacity => Ok(required),
            _ => Err(CapacityExceeded { capacity: self.capacity, required: required.unwrap_or(Volume::MAX) }),
        }
    }

    /// Returns current volume.
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Seals the batch assigning it an id.
    pub fn seal(self, id: BatchId) -> Batch {
        Batch { id, capacity: self.capacity, volume: self.volume, items: self.items }
    }
}

/// A capacity bounded group of articles routed together for a single pick tour.
#[derive(Clone, Debug)]
pub struct Batch {
    id: BatchId,
    capacity: Volume,
    volume: Volume,
    items: Vec<BatchItem>,
}

impl Batch {
    /// Restores a batch from previously recorded values without enforcing any invariant.
    /// Used to check externally produced solutions.
    pub fn from_parts(id: BatchId, capacity: Volume, volume: Volume, items: Vec<BatchItem>) -> Self {
        Self { id, capacity, volume, items }
    }

    /// Returns batch id.
    pub fn id(&self) -> BatchId {
        self.id
    }

    /// Returns batch capacity.
    pub fn capacity(&self) -> Volume {
        self.capacity
    }

    /// Returns total volume of items.
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Returns items in the order they were added.
    pub fn items(&self) -> &[BatchItem] {
        self.items.as_slice()
    }
}
