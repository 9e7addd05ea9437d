#[cfg(test)]
#[path = "../../../tests/unit/algorithms/structures/bitset_test.rs"]
mod bitset_test;

use std::fmt::Display;

/// A fixed width bit set backed by machine words.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitSet {
    blocks: Vec<u64>,
    length: usize,
}

const BITS_IN_BLOCK: usize = u64::BITS as usize;

impl BitSet {
    /// Creates a new bit set of given length with all bits cleared.
    pub fn new(length: usize) -> Self {
        let block_count = length.div_ceil(BITS_IN_BLOCK);
        Self { blocks: vec![0; block_count], length }
    }

    /// Sets the bit at the given index.
    pub fn insert(&mut self, index: usize) {
        assert!(index < self.length, "index out of bounds: {index} >= {}", self.length);
        self.blocks[index / BITS_IN_BLOCK] |= 1 << (index % BITS_IN_BLOCK);
    }

    /// Returns true if the bit at the given index is set.
    pub fn contains(&self, index: usize) -> bool {
        index < self.length && (self.blocks[index / BITS_IN_BLOCK] >> (index % BITS_IN_BLOCK)) & 1 != 0
    }

    /// Returns amount of set bits.
    pub fn count_ones(&self) -> usize {
        self.blocks.iter().map(|block| block.count_ones() as usize).sum()
    }

    /// Returns amount of bits set in `self` but not in `other`, i.e. `popcount(self & !other)`.
    pub fn count_difference(&self, other: &Self) -> usize {
        assert_eq!(self.len(), other.len(), "bit sets must have the same length");

        self.blocks.iter().zip(other.blocks.iter()).map(|(x, y)| (x & !y).count_ones() as usize).sum()
    }

    /// Returns the width of the bit set.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the bit set has zero width.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl Display for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for index in 0..self.length {
            write!(f, "{}", if self.contains(index) { 1 } else { 0 })?;
        }
        write!(f, "]")
    }
}
