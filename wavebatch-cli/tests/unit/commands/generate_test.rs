use super::*;
use std::fs::File;
use wavebatch_core::models::Limits;
use wavebatch_json::format::problem::{JsonProblem, deserialize_problem};

fn generate_with_seed(seed: &str, path: &str) {
    let args = vec!["generate", "--orders", "20", "--articles", "15", "--warehouses", "2", "--seed", seed, "-o", path];
    let matches = get_generate_app().try_get_matches_from(args).unwrap();

    run_generate(&matches).unwrap();
}

#[test]
fn can_generate_problem_from_args() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();

    generate_with_seed("42", tmpfile.path().to_str().unwrap());

    let problem = deserialize_problem(BufReader::new(File::open(tmpfile.path()).unwrap())).unwrap();
    assert_eq!(problem.orders.len(), 20);
    assert_eq!(problem.articles.len(), 15);

    let problem = BufReader::new(File::open(tmpfile.path()).unwrap()).read_problem(&Limits::default()).unwrap();
    assert_eq!(problem.orders.len(), 20);
}

#[test]
fn can_generate_same_problem_with_same_seed() {
    let first = tempfile::NamedTempFile::new().unwrap();
    let second = tempfile::NamedTempFile::new().unwrap();

    generate_with_seed("7", first.path().to_str().unwrap());
    generate_with_seed("7", second.path().to_str().unwrap());

    assert_eq!(std::fs::read_to_string(first.path()).unwrap(), std::fs::read_to_string(second.path()).unwrap());
}

#[test]
fn can_report_invalid_integer_arg() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec!["generate", "--orders", "many", "-o", tmpfile.path().to_str().unwrap()];
    let matches = get_generate_app().try_get_matches_from(args).unwrap();

    let result = run_generate(&matches);

    assert!(result.expect_err("generate should fail").to_string().starts_with("cannot get integer value"));
}
