#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use inverover::prelude::*;
use inverover_cli::extensions::solve::config::read_config;
use inverover_cli::extensions::solve::formats::{read_matrix, write_result};
use inverover_cli::extensions::solve::interruption::create_interruption_quota;
use inverover_cli::solve_tsp;
use std::io::BufReader;
use std::sync::Arc;

const MATRIX_ARG_NAME: &str = "MATRIX";
const GENERATIONS_ARG_NAME: &str = "generations";
const MUTATION_PROBABILITY_ARG_NAME: &str = "mutation-probability";
const INIT_ARG_NAME: &str = "init";
const POPULATION_SIZE_ARG_NAME: &str = "population-size";
const TIME_ARG_NAME: &str = "max-time";
const PARALLELISM_ARG_NAME: &str = "parallelism";

const OUT_RESULT_ARG_NAME: &str = "out-result";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";
const RANDOM_SEED_ARG_NAME: &str = "seed";

const DEFAULT_POPULATION_SIZE: usize = 100;

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves Travelling Salesman Problem defined by a weight matrix")
        .arg(Arg::new(MATRIX_ARG_NAME).help("Sets the weight matrix file to use").required(true).index(1))
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies amount of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MUTATION_PROBABILITY_ARG_NAME)
                .help("Specifies probability to pick a random city instead of using a donor tour")
                .short('p')
                .long(MUTATION_PROBABILITY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(INIT_ARG_NAME)
                .help("Specifies how initial tours are created")
                .short('i')
                .long(INIT_ARG_NAME)
                .required(false)
                .value_parser(["random", "nn"]),
        )
        .arg(
            Arg::new(POPULATION_SIZE_ARG_NAME)
                .help("Specifies amount of tours in population")
                .short('s')
                .long(POPULATION_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PARALLELISM_ARG_NAME)
                .help("Specifies max amount of threads used to evolve population, 1 means sequential evolution")
                .long(PARALLELISM_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file, command line arguments take precedence")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
}

/// Runs solver command.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    let matrix_path = matches.get_one::<String>(MATRIX_ARG_NAME).ok_or("matrix file is not specified")?;
    let graph = read_matrix(BufReader::new(open_file(matrix_path, "matrix")?))
        .map_err(|err| format!("cannot read matrix from '{matrix_path}': '{err}'"))?;

    let config = get_config(matches)?;
    let population_size = get_population_size(matches)?;
    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;
    let environment = get_environment(matches, max_time)?;
    let telemetry_mode = get_telemetry_mode(matches, environment.logger.clone());

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_result = out_result.transpose()?;

    let result = solve_tsp(&graph, config, population_size, environment, telemetry_mode)
        .map_err(|err| format!("cannot find any tour: '{err}'"))?;

    write_result(out_writer_func(out_result), &result)
}

fn get_config(matches: &ArgMatches) -> Result<InverOverConfig, GenericError> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let generations = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "generations")?;
    let mutation_probability =
        parse_float_value::<f64>(matches, MUTATION_PROBABILITY_ARG_NAME, "mutation probability")?;
    let initialization =
        matches.get_one::<String>(INIT_ARG_NAME).map(|mode| mode.parse::<InitializationMode>()).transpose()?;

    let config = InverOverConfig {
        generations: generations.unwrap_or(config.generations),
        mutation_probability: mutation_probability.unwrap_or(config.mutation_probability),
        initialization: initialization.unwrap_or(config.initialization),
    };

    config.validate()?;

    Ok(config)
}

fn get_population_size(matches: &ArgMatches) -> Result<usize, String> {
    match parse_int_value::<usize>(matches, POPULATION_SIZE_ARG_NAME, "population size")? {
        Some(size) if size < 2 => Err(format!("population size must be an integer bigger than 1, got '{size}'")),
        Some(size) => Ok(size),
        None => Ok(DEFAULT_POPULATION_SIZE),
    }
}

fn get_environment(matches: &ArgMatches, max_time: Option<usize>) -> Result<Arc<Environment>, String> {
    let quota = Some(create_interruption_quota(max_time));

    let random: Arc<dyn Random + Send + Sync> = match parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")? {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    let parallelism = match parse_int_value::<usize>(matches, PARALLELISM_ARG_NAME, "parallelism")? {
        Some(0) => return Err("parallelism must be an integer bigger than 0, got '0'".to_string()),
        Some(1) => ParallelismDegree::Sequential,
        Some(max) => ParallelismDegree::Limited { max },
        None => ParallelismDegree::Full,
    };

    let logger: InfoLogger = Arc::new(|msg: &str| println!("{msg}"));

    Ok(Arc::new(Environment::new(random, quota, parallelism, logger)))
}

fn get_telemetry_mode(matches: &ArgMatches, logger: InfoLogger) -> TelemetryMode {
    if matches.get_flag(LOG_ARG_NAME) {
        TelemetryMode::OnlyLogging { logger, log_best: 100 }
    } else {
        TelemetryMode::None
    }
}
