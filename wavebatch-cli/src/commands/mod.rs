use clap::ArgMatches;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;
use wavebatch_cli::extensions::solve::config::{Config, read_config};
use wavebatch_core::utils::{GenericError, GenericResult};

pub mod check;
pub mod generate;
pub mod solve;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> GenericResult<File> {
    File::open(path).map_err(|err| GenericError::from(format!("cannot open {description} file '{path}': '{err}'")))
}

fn create_file(path: &str, description: &str) -> GenericResult<File> {
    File::create(path).map_err(|err| GenericError::from(format!("cannot create {description} file '{path}': '{err}'")))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| GenericError::from(format!("cannot get integer value, error: '{err}': '{arg_desc}'")))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Reads config from the file specified by argument or returns default config.
fn get_config(matches: &ArgMatches, arg_name: &str) -> GenericResult<Config> {
    matches
        .get_one::<String>(arg_name)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .unwrap_or_else(|| Ok(Config::default()))
}
