//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;
use wavebatch_core::models::Limits;
use wavebatch_core::utils::{Environment, GenericError, GenericResult, InfoLogger, Parallelism};

/// An algorithm configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies capacity limits.
    pub limits: Option<LimitsConfig>,
    /// Specifies parallelism settings.
    pub parallelism: Option<ParallelismConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A capacity limits configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LimitsConfig {
    /// Maximum amount of articles in a wave. Default is 250.
    pub wave_capacity: Option<usize>,
    /// Maximum volume of a batch. Default is 10000.
    pub batch_capacity: Option<u64>,
}

/// A parallelism configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParallelismConfig {
    /// Amount of threads used to pack batches. Zero means all available cpus, one (default)
    /// means sequential run.
    pub threads: Option<usize>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Prefix of logging messages.
    pub prefix: Option<String>,
}

impl Config {
    /// Returns capacity limits with defaults applied.
    pub fn get_limits(&self) -> Limits {
        let default = Limits::default();

        match &self.limits {
            Some(LimitsConfig { wave_capacity, batch_capacity }) => Limits {
                wave_capacity: wave_capacity.unwrap_or(default.wave_capacity),
                batch_capacity: batch_capacity.unwrap_or(default.batch_capacity),
            },
            None => default,
        }
    }

    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()).is_some_and(|logging| logging.enabled)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates an environment from the config. Logging can be forced regardless of the config.
pub fn create_environment(config: &Config, force_logging: bool) -> GenericResult<Environment> {
    let logger: InfoLogger = if force_logging || config.is_logging_enabled() {
        let prefix = config
            .telemetry
            .as_ref()
            .and_then(|telemetry| telemetry.logging.as_ref())
            .and_then(|logging| logging.prefix.clone())
            .unwrap_or_default();

        Arc::new(move |msg: &str| println!("{prefix}{msg}"))
    } else {
        Arc::new(|_: &str| {})
    };

    let threads = match config.parallelism.as_ref().and_then(|parallelism| parallelism.threads) {
        Some(0) => num_cpus::get(),
        Some(threads) => threads,
        None => 1,
    };

    Ok(Environment::new(logger, Parallelism::new(threads)?))
}
