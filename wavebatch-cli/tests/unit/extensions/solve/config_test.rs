use super::*;
use std::fs::File;

#[test]
fn can_read_full_config() {
    let file = File::open("../data/config.json").expect("cannot read config from file");

    let config = read_config(BufReader::new(file)).unwrap();

    assert_eq!(config.get_limits(), Limits { wave_capacity: 250, batch_capacity: 10_000 });
    assert_eq!(config.parallelism.as_ref().and_then(|parallelism| parallelism.threads), Some(4));
    assert!(config.is_logging_enabled());
    let logging = config.telemetry.and_then(|telemetry| telemetry.logging).expect("no logging config");
    assert_eq!(logging.prefix, Some("[wavebatch] ".to_string()));
}

#[test]
fn can_apply_defaults_for_partial_limits() {
    let config = read_config(BufReader::new(r#"{"limits": {"batchCapacity": 500}}"#.as_bytes())).unwrap();

    assert_eq!(config.get_limits(), Limits { wave_capacity: 250, batch_capacity: 500 });
    assert!(!config.is_logging_enabled());
}

#[test]
fn can_use_default_config() {
    let config = Config::default();

    assert_eq!(config.get_limits(), Limits::default());
    assert!(!config.is_logging_enabled());
}

#[test]
fn can_report_invalid_config() {
    let result = read_config(BufReader::new(r#"{"limits": {"waveCapacity": "many"}}"#.as_bytes()));

    assert!(result.expect_err("config should be invalid").to_string().starts_with("cannot deserialize config:"));
}

#[test]
fn can_create_environment_from_config() {
    let config = read_config(BufReader::new(r#"{"parallelism": {"threads": 2}}"#.as_bytes())).unwrap();

    let environment = create_environment(&config, false).unwrap();

    assert!(environment.parallelism.is_parallel());
}

#[test]
fn can_create_sequential_environment_by_default() {
    let environment = create_environment(&Config::default(), true).unwrap();

    assert!(!environment.parallelism.is_parallel());
}
