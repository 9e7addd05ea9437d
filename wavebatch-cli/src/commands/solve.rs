#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use std::sync::Arc;
use wavebatch_cli::extensions::solve::config::create_environment;
use wavebatch_core::checker::{check_solution, score};
use wavebatch_core::solver::Solver;
use wavebatch_json::format::problem::JsonProblem;
use wavebatch_json::format::solution::JsonSolution;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const CONFIG_ARG_NAME: &str = "config";
const CHECK_ARG_NAME: &str = "check";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves order batching problem")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether final solution should be checked for feasibility")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

pub fn run_solve(matches: &ArgMatches) -> GenericResult<()> {
    let config = get_config(matches, CONFIG_ARG_NAME)?;
    let limits = config.get_limits();
    let environment = create_environment(&config, matches.get_flag(LOG_ARG_NAME))?;
    let logger = environment.logger.clone();

    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let problem = BufReader::new(open_file(problem_path, "problem")?)
        .read_problem(&limits)
        .map_err(|errs| format!("cannot read problem:\n{errs}"))?;
    let problem = Arc::new(problem);

    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out solution")).transpose()?;

    let solution = Solver::new(problem.clone(), limits.clone(), environment).solve()?;

    if matches.get_flag(CHECK_ARG_NAME) {
        check_solution(&solution, &problem, &limits)
            .map_err(|errs| format!("checker found {} errors:\n{}", errs.len(), errs.join("\n")))?;

        let cost = score(&solution, problem.catalog.as_ref())?;
        (logger)(&format!("solution is feasible, cost: {} (tour: {}, rest: {})", cost.total, cost.tour, cost.rest));
    }

    solution.write_json(&problem, create_write_buffer(out_file))
}
