use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// Specifies a type used to store any values regarding problem configuration, e.g. mapping of
/// original identifiers which is specific to the input format.
#[derive(Clone, Debug, Default)]
pub struct Extras {
    index: FxHashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Extras {
    /// Gets the value from extras using the key type provided.
    pub fn get_value<K: 'static, V: Send + Sync + 'static>(&self) -> Option<&V> {
        self.index.get(&TypeId::of::<K>()).and_then(|any| any.downcast_ref::<V>())
    }

    /// Sets the value to extras using the key type provided.
    pub fn set_value<K: 'static, V: 'static + Sync + Send>(&mut self, value: V) {
        self.index.insert(TypeId::of::<K>(), Arc::new(value));
    }
}
