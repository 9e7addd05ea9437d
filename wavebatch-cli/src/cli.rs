use crate::commands::check::{get_check_app, run_check};
use crate::commands::generate::{get_generate_app, run_generate};
use crate::commands::solve::{get_solve_app, run_solve};
use clap::{ArgMatches, Command};
use std::process;

pub fn get_app() -> Command {
    Command::new("Wave Batching Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ilya Builuk <ilya.builuk@gmail.com>")
        .about("A command line interface to assign warehouse orders to picking waves and batches")
        .subcommand(get_solve_app())
        .subcommand(get_check_app())
        .subcommand(get_generate_app())
}

pub fn run_subcommand(arg_matches: ArgMatches) {
    let result = match arg_matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        Some(("check", check_matches)) => run_check(check_matches),
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".into()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
