#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::{Arg, Command};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wavebatch_cli::extensions::generate::{GenerateConfig, generate_problem};
use wavebatch_json::format::problem::serialize_problem;

const OUT_RESULT_ARG_NAME: &str = "out-result";
const ORDERS_ARG_NAME: &str = "orders";
const ARTICLES_ARG_NAME: &str = "articles";
const WAREHOUSES_ARG_NAME: &str = "warehouses";
const AISLES_ARG_NAME: &str = "aisles";
const SEED_ARG_NAME: &str = "seed";

pub fn get_generate_app() -> Command {
    let create_size_arg = |name: &'static str, help: &'static str| Arg::new(name).help(help).long(name).required(false);

    Command::new("generate")
        .about("Provides the way to generate random problems for testing")
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(true),
        )
        .arg(create_size_arg(ORDERS_ARG_NAME, "Amount of orders in generated problem"))
        .arg(create_size_arg(ARTICLES_ARG_NAME, "Amount of articles in the catalog of generated problem"))
        .arg(create_size_arg(WAREHOUSES_ARG_NAME, "Amount of warehouses in generated problem"))
        .arg(create_size_arg(AISLES_ARG_NAME, "Amount of aisles per warehouse in generated problem"))
        .arg(create_size_arg(SEED_ARG_NAME, "Random seed to make generation reproducible"))
}

pub fn run_generate(matches: &ArgMatches) -> GenericResult<()> {
    let default = GenerateConfig::default();
    let config = GenerateConfig {
        orders: parse_int_value(matches, ORDERS_ARG_NAME, "orders")?.unwrap_or(default.orders),
        articles: parse_int_value(matches, ARTICLES_ARG_NAME, "articles")?.unwrap_or(default.articles),
        warehouses: parse_int_value(matches, WAREHOUSES_ARG_NAME, "warehouses")?.unwrap_or(default.warehouses),
        aisles: parse_int_value(matches, AISLES_ARG_NAME, "aisles")?.unwrap_or(default.aisles),
        ..default
    };

    let mut random = match parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")? {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let problem = generate_problem(&config, &mut random)?;

    let out_path = matches.get_one::<String>(OUT_RESULT_ARG_NAME).ok_or("out file is not specified")?;
    let mut writer = create_write_buffer(Some(create_file(out_path, "generated problem")?));

    serialize_problem(&problem, &mut writer).map_err(|err| format!("cannot write problem: '{err}'").into())
}
