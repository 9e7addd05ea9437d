#[cfg(test)]
#[path = "../../tests/unit/models/common_test.rs"]
mod common_test;

use std::fmt::{Display, Formatter};

/// An article identifier.
pub type ArticleId = usize;

/// An order identifier.
pub type OrderId = usize;

/// A warehouse identifier.
pub type WarehouseId = usize;

/// An aisle identifier, unique only within its warehouse.
pub type AisleId = usize;

/// A wave identifier.
pub type WaveId = usize;

/// A batch identifier.
pub type BatchId = usize;

/// A volume unit type.
pub type Volume = u64;

/// Default maximum amount of articles in a wave.
pub const DEFAULT_WAVE_CAPACITY: usize = 250;

/// Default maximum volume of a batch.
pub const DEFAULT_BATCH_CAPACITY: Volume = 10_000;

/// Specifies capacity limits of waves and batches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum amount of articles in a single wave (inclusive).
    pub wave_capacity: usize,
    /// Maximum volume of a single batch (inclusive).
    pub batch_capacity: Volume,
}

impl Default for Limits {
    fn default() -> Self {
        Self { wave_capacity: DEFAULT_WAVE_CAPACITY, batch_capacity: DEFAULT_BATCH_CAPACITY }
    }
}

/// A signal that adding an item to a container would exceed its capacity. This is an expected
/// outcome which tells the caller to seal the container and start a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityExceeded {
    /// Container capacity.
    pub capacity: u64,
    /// An amount the container would hold after addition.
    pub required: u64,
}

impl Display for CapacityExceeded {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "capacity exceeded: {} > {}", self.required, self.capacity)
    }
}

/// A monotonic sequence of identifiers owned by a single construction run.
#[derive(Clone, Debug, Default)]
pub struct IdSequence {
    next: usize,
}

impl IdSequence {
    /// Creates a new sequence which starts from the given value.
    pub fn new(start: usize) -> Self {
        Self { next: start }
    }

    /// Returns next identifier.
    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;

        id
    }
}
