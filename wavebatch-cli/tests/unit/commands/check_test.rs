use super::*;
use crate::cli::get_app;

const PROBLEM_PATH: &str = "../data/problem.json";
const SOLUTION_PATH: &str = "../data/solution.json";
const CONFIG_PATH: &str = "../data/config.json";

#[test]
fn can_check_solution_from_args() {
    let args = vec!["wavebatch-cli", "check", "--problem-file", PROBLEM_PATH, "--solution-file", SOLUTION_PATH];
    let matches = get_app().try_get_matches_from(args).unwrap();
    let (name, check_matches) = matches.subcommand().unwrap();

    assert_eq!(name, "check");
    run_check(check_matches).unwrap();
}

#[test]
fn can_check_solution_with_config() {
    let args = vec!["check", "-p", PROBLEM_PATH, "-s", SOLUTION_PATH, "-c", CONFIG_PATH];
    let matches = get_check_app().try_get_matches_from(args).unwrap();

    run_check(&matches).unwrap();
}

#[test]
fn can_report_infeasible_solution() {
    let solution = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        solution.path(),
        r#"{
          "Waves": [{"WaveId": 0, "BatchIds": [0], "OrderIds": [300, 100, 200], "WaveSize": 5}],
          "Batches": [{
            "BatchId": 0,
            "Items": [
              {"OrderId": 300, "ArticleId": "a1"},
              {"OrderId": 100, "ArticleId": "a1"},
              {"OrderId": 100, "ArticleId": "a2"}
            ],
            "BatchVolume": 1100
          }]
        }"#,
    )
    .unwrap();
    let args = vec!["check", "-p", PROBLEM_PATH, "-s", solution.path().to_str().unwrap()];
    let matches = get_check_app().try_get_matches_from(args).unwrap();

    let result = run_check(&matches);

    let err = result.expect_err("check should fail").to_string();
    assert!(err.starts_with("checker found"));
    assert!(err.contains("ordered articles are not picked"));
}

#[test]
fn can_report_tight_limits() {
    let config = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(config.path(), r#"{"limits": {"waveCapacity": 4}}"#).unwrap();
    let args = vec!["check", "-p", PROBLEM_PATH, "-s", SOLUTION_PATH, "-c", config.path().to_str().unwrap()];
    let matches = get_check_app().try_get_matches_from(args).unwrap();

    let result = run_check(&matches);

    let err = result.expect_err("check should fail").to_string();
    assert_eq!(err, "checker found 1 errors:\nwave 0 has 5 articles which exceeds capacity 4");
}
