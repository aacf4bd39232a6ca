use crate::extensions::solve::formats::read_matrix;
use crate::solve_tsp;
use inverover::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

fn read_test_matrix(name: &str) -> MatrixGraph {
    read_matrix(BufReader::new(File::open(format!("tests/data/{name}.matrix.json")).unwrap())).unwrap()
}

fn create_environment(seed: u64) -> Arc<Environment> {
    Arc::new(Environment::new(Arc::new(SeededRandom::new(seed)), None, ParallelismDegree::Full, create_silent_logger()))
}

#[test]
fn can_solve_symmetric_matrix_from_random_tours() {
    let graph = read_test_matrix("square");
    let config = InverOverConfigBuilder::default()
        .with_generations(100)
        .with_initialization(InitializationMode::Random)
        .build()
        .unwrap();

    let result = solve_tsp(&graph, config, 10, create_environment(3), TelemetryMode::None).unwrap();

    assert_eq!(result.fitness, 4.);
    assert_eq!(result.generations, 100);
}

#[test]
fn can_solve_asymmetric_matrix_following_its_direction() {
    let graph = read_test_matrix("asymmetric");
    let config = InverOverConfigBuilder::default().with_generations(50).build().unwrap();

    let result = solve_tsp(&graph, config, 10, create_environment(5), TelemetryMode::None).unwrap();

    assert_eq!(result.fitness, 5.);
    let size = result.tour.len();
    assert_eq!(size, 5);
    assert!((0..size).all(|idx| result.tour[(idx + 1) % size] == (result.tour[idx] + 1) % size));
}
