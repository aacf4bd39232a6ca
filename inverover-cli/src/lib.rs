//! A command line interface library for Inver-Over TSP solver.
//!
//! Reads a weight matrix in json format (an array of rows, `null` marks an absent edge), runs
//! Inver-Over search on it, and writes the best tour found in json format.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod extensions;

use crate::extensions::solve::formats::TourResult;
use inverover::prelude::*;
use std::sync::Arc;

/// Solves TSP defined by the given graph and returns the best tour found. Search can be stopped
/// earlier using the environment quota: the best tour found so far is returned then.
pub fn solve_tsp(
    graph: &MatrixGraph,
    config: InverOverConfig,
    population_size: usize,
    environment: Arc<Environment>,
    telemetry_mode: TelemetryMode,
) -> GenericResult<TourResult> {
    let algorithm = InverOver::new(config, environment).with_telemetry(telemetry_mode);

    let mut population = algorithm.initialize(graph, population_size)?;
    let metrics = algorithm.evolve(&mut population, graph)?;

    population
        .best()
        .map(|individual| TourResult::new(individual, &metrics))
        .ok_or_else(|| "cannot find any tour".into())
}
