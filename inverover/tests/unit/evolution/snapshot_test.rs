use super::*;
use crate::construction::InitializationMode;
use crate::helpers::models::*;
use crate::utils::GenericError;

fn create_snapshot() -> SolverSnapshot {
    let graph = create_matrix_graph(vec![
        vec![0., 1., 2., 3.], //
        vec![1., 0., 1., 2.],
        vec![2., 1., 0., 1.],
    ])
    .unwrap();
    let population = create_population(&[&[0, 1, 2, 3], &[3, 2, 1, 0]], &graph);
    let config =
        InverOverConfig { generations: 10, mutation_probability: 0.2, initialization: InitializationMode::Random };

    SolverSnapshot::new(&config, &graph, &population)
}

#[test]
fn can_store_absent_edges_as_none() {
    let snapshot = create_snapshot();

    assert_eq!(snapshot.graph.size, 4);
    assert_eq!(snapshot.graph.weights[3], Some(3.));
    assert_eq!(snapshot.graph.weights[12], None);
    assert_eq!(snapshot.population[0].fitness, None);
}

#[test]
fn can_restore_from_json() {
    let snapshot = create_snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let (config, graph, population) =
        serde_json::from_str::<SolverSnapshot>(json.as_str()).unwrap().restore().unwrap();

    assert_eq!(config, snapshot.config);
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.weight(3, 0), Ok(f64::INFINITY));
    assert_eq!(population.size(), 2);
    assert_eq!(population.get(1).unwrap().tour.cities(), &[3, 2, 1, 0]);
    assert_eq!(population.get(1).unwrap().fitness, f64::INFINITY);
}

#[test]
fn can_recalculate_fitness_on_restore() {
    let mut snapshot = create_snapshot();
    snapshot.graph.weights[12] = Some(1.);
    snapshot.population[0].fitness = Some(0.);

    let (_, _, population) = snapshot.restore().unwrap();

    assert_eq!(population.get(0).unwrap().fitness, 4.);
}

parameterized_test! {can_reject_invalid_snapshot, (modify, expected), {
    can_reject_invalid_snapshot_impl(modify, expected);
}}

can_reject_invalid_snapshot! {
    case_01_duplicate_city: (|snapshot: &mut SolverSnapshot| snapshot.population[0].tour = vec![0, 1, 1, 3],
        "configuration error: city 1 is visited twice"),
    case_02_short_tour: (|snapshot: &mut SolverSnapshot| snapshot.population[0].tour = vec![0, 1, 2],
        "tour of 3 cities does not match graph of 4 cities"),
    case_03_bad_probability: (|snapshot: &mut SolverSnapshot| snapshot.config.mutation_probability = 2.,
        "configuration error: mutation probability must be in [0, 1], got 2"),
    case_04_bad_weights: (|snapshot: &mut SolverSnapshot| snapshot.graph.weights.truncate(15),
        "expected 16 weights for 4 vertices, got 15"),
}

fn can_reject_invalid_snapshot_impl(modify: fn(&mut SolverSnapshot), expected: &str) {
    let mut snapshot = create_snapshot();
    modify(&mut snapshot);

    let result = snapshot.restore();

    assert_eq!(result.err(), Some(GenericError::from(expected)));
}
