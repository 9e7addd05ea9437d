#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, Command};
use wavebatch_json::checker::check_json_solution;

const PROBLEM_ARG_NAME: &str = "problem-file";
const SOLUTION_ARG_NAME: &str = "solution-file";
const CONFIG_ARG_NAME: &str = "config";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check solution feasibility")
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets input file which contains a problem definition")
                .short('p')
                .long(PROBLEM_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets solution file")
                .short('s')
                .long(SOLUTION_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to configuration file with capacity limits")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
}

pub fn run_check(matches: &ArgMatches) -> GenericResult<()> {
    let limits = get_config(matches, CONFIG_ARG_NAME)?.get_limits();

    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let solution_path = matches.get_one::<String>(SOLUTION_ARG_NAME).ok_or("solution file is not specified")?;

    let problem_file = BufReader::new(open_file(problem_path, "problem")?);
    let solution_file = BufReader::new(open_file(solution_path, "solution")?);

    let cost = check_json_solution(problem_file, solution_file, &limits)
        .map_err(|errs| format!("checker found {} errors:\n{}", errs.len(), errs.join("\n")))?;

    println!("solution is feasible, cost: {} (tour: {}, rest: {})", cost.total, cost.tour, cost.rest);

    Ok(())
}
