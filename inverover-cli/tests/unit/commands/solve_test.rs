use super::*;
use inverover_cli::extensions::solve::formats::TourResult;
use std::fs;

const SQUARE_MATRIX_PATH: &str = "tests/data/square.matrix.json";
const CONFIG_PATH: &str = "tests/data/config.json";

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_solve_with_out_writer(matches: &ArgMatches) -> Result<(), GenericError> {
    run_solve(matches, |_| BufWriter::new(Box::new(DummyWrite {})))
}

fn get_square_matches(params: &[&str]) -> ArgMatches {
    let args = [&["solve", SQUARE_MATRIX_PATH], params].concat();

    get_solve_app().try_get_matches_from(args).unwrap()
}

#[test]
fn can_solve_square_matrix_with_generation_limit() {
    let matches = get_square_matches(&["--generations", "10", "--population-size", "4"]);

    run_solve_with_out_writer(&matches).unwrap();
}

#[test]
fn can_write_result_into_file() {
    let tmpdir = tempfile::TempDir::new().unwrap();
    let out_path = tmpdir.path().join("result.json");
    let out_path = out_path.to_str().unwrap();
    let matches = get_square_matches(&["-n", "100", "-s", "10", "--seed", "1", "--init", "random", "-o", out_path]);

    run_solve(&matches, create_write_buffer).unwrap();

    let result: TourResult = serde_json::from_str(fs::read_to_string(out_path).unwrap().as_str()).unwrap();
    assert_eq!(result.fitness, 4.);
    assert_eq!(result.generations, 100);
    assert_eq!(result.tour.len(), 4);
}

#[test]
fn can_require_matrix_path() {
    get_solve_app().try_get_matches_from(vec!["solve"]).unwrap_err();
}

#[test]
fn can_fail_on_missing_matrix_file() {
    let matches = get_solve_app().try_get_matches_from(vec!["solve", "tests/data/unknown.json"]).unwrap();

    let result = run_solve_with_out_writer(&matches);

    assert!(result.unwrap_err().to_string().starts_with("cannot open matrix file 'tests/data/unknown.json'"));
}

#[test]
fn can_fail_on_too_small_matrix() {
    let tmpdir = tempfile::TempDir::new().unwrap();
    let matrix_path = tmpdir.path().join("matrix.json");
    fs::write(&matrix_path, "[[0, 1], [1, 0]]").unwrap();
    let args = vec!["solve", matrix_path.to_str().unwrap()];
    let matches = get_solve_app().try_get_matches_from(args).unwrap();

    let result = run_solve_with_out_writer(&matches);

    assert_eq!(
        result,
        Err("cannot find any tour: 'configuration error: graph must have at least 3 cities, got 2'".into())
    );
}

#[test]
fn can_specify_init_mode() {
    for &(mode, result) in &[("random", Some(())), ("nn", Some(())), ("greedy", None)] {
        let args = vec!["solve", SQUARE_MATRIX_PATH, "--init", mode];
        assert_eq!(get_solve_app().try_get_matches_from(args).ok().map(|_| ()), result);
    }
}

#[test]
fn can_override_config_file_with_arguments() {
    let matches = get_square_matches(&["--config", CONFIG_PATH, "--generations", "7"]);

    let config = get_config(&matches).unwrap();

    assert_eq!(
        config,
        InverOverConfig { generations: 7, mutation_probability: 0.02, initialization: InitializationMode::Random }
    );
}

#[test]
fn can_use_default_config() {
    let config = get_config(&get_square_matches(&[])).unwrap();

    assert_eq!(config, InverOverConfig::default());
}

#[test]
fn can_reject_invalid_config_arguments() {
    for (params, expected) in vec![
        (vec!["--mutation-probability", "1.5"], "configuration error: mutation probability must be in [0, 1], got 1.5"),
        (vec!["--generations=-1"], "cannot get integer value, error: 'invalid digit found in string': 'generations'"),
        (
            vec!["--mutation-probability", "abc"],
            "cannot get float value, error: 'invalid float literal': 'mutation probability'",
        ),
    ] {
        let matches = get_square_matches(params.as_slice());

        let result = get_config(&matches);

        assert_eq!(result, Err(expected.into()));
    }
}

#[test]
fn can_specify_population_size() {
    for (params, result) in vec![
        (vec!["--population-size", "20"], Ok(20)),
        (vec!["--population-size", "1"], Err("population size must be an integer bigger than 1, got '1'".to_string())),
        (vec![], Ok(100)),
    ] {
        let matches = get_square_matches(params.as_slice());

        assert_eq!(get_population_size(&matches), result);
    }
}

#[test]
fn can_specify_parallelism() {
    for (params, result) in vec![
        (vec!["--parallelism", "3"], Ok(ParallelismDegree::Limited { max: 3 })),
        (vec!["--parallelism", "1"], Ok(ParallelismDegree::Sequential)),
        (vec!["--parallelism", "0"], Err("parallelism must be an integer bigger than 0, got '0'".to_string())),
        (vec![], Ok(ParallelismDegree::Full)),
    ] {
        let matches = get_square_matches(params.as_slice());

        let parallelism = get_environment(&matches, None).map(|environment| environment.parallelism.clone());

        assert_eq!(parallelism, result);
    }
}

#[test]
fn can_reproduce_result_with_seed() {
    let run = || {
        let matches = get_square_matches(&["--seed", "42", "--generations", "5", "--init", "random"]);
        let environment = get_environment(&matches, None).unwrap();
        let config = get_config(&matches).unwrap();
        let graph = read_matrix(BufReader::new(File::open(SQUARE_MATRIX_PATH).unwrap())).unwrap();

        solve_tsp(&graph, config, 6, environment, TelemetryMode::None).unwrap()
    };

    assert_eq!(run(), run());
}
