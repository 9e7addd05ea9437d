//! Contains data structures used by algorithms.

mod bitset;
pub use self::bitset::BitSet;
