//! A command line interface to *Order Batching Problem* solver.

mod cli;
mod commands;

use crate::cli::{get_app, run_subcommand};

fn main() {
    run_subcommand(get_app().get_matches());
}
