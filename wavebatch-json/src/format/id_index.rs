use super::Id;
use rustc_hash::FxHashMap;
use wavebatch_core::models::{ArticleId, Extras, OrderId};

/// Maps external ids to dense indices and back.
#[derive(Clone, Debug, Default)]
pub struct IdMap {
    ids: Vec<Id>,
    positions: FxHashMap<Id, usize>,
}

impl IdMap {
    /// Returns index of the id, registering it if it is not known yet.
    pub fn add(&mut self, id: &Id) -> usize {
        if let Some(&position) = self.positions.get(id) {
            return position;
        }

        let position = self.ids.len();
        self.ids.push(id.clone());
        self.positions.insert(id.clone(), position);

        position
    }

    /// Returns index of the known id.
    pub fn get_index(&self, id: &Id) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Returns external id of the index.
    pub fn get_id(&self, index: usize) -> Option<&Id> {
        self.ids.get(index)
    }

    /// Returns external id of the index or the index itself when it is not known.
    pub fn to_id(&self, index: usize) -> Id {
        self.get_id(index).cloned().unwrap_or(Id::Number(index as u64))
    }
}

/// Keeps mapping between external ids of the json format and internal ids of the core model.
#[derive(Clone, Debug, Default)]
pub struct IdIndex {
    /// Article ids.
    pub articles: IdMap,
    /// Order ids.
    pub orders: IdMap,
    /// Warehouse ids.
    pub warehouses: IdMap,
    /// Aisle ids.
    pub aisles: IdMap,
}

impl IdIndex {
    /// Returns core article id.
    pub fn get_article(&self, id: &Id) -> Option<ArticleId> {
        self.articles.get_index(id)
    }

    /// Returns core order id.
    pub fn get_order(&self, id: &Id) -> Option<OrderId> {
        self.orders.get_index(id)
    }
}

/// Provides way to get/set id index on problem extras.
pub trait IdIndexExtraProperty {
    /// Gets id index.
    fn get_id_index(&self) -> Option<&IdIndex>;

    /// Sets id index.
    fn set_id_index(&mut self, index: IdIndex);
}

struct IdIndexKey;

impl IdIndexExtraProperty for Extras {
    fn get_id_index(&self) -> Option<&IdIndex> {
        self.get_value::<IdIndexKey, _>()
    }

    fn set_id_index(&mut self, index: IdIndex) {
        self.set_value::<IdIndexKey, _>(index);
    }
}
