//! A command line interface to *Order Batching Problem* solver: reads problems in json format,
//! solves them, checks solutions and generates random problems for testing.

#![warn(missing_docs)]

pub use wavebatch_core as core;
pub use wavebatch_json as json;

pub mod extensions;
