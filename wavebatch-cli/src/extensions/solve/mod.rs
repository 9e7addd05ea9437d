//! Contains solver configuration.

pub mod config;
