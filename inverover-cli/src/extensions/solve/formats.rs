#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use inverover::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A result of the search: the best tour found.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TourResult {
    /// Cities in visiting order.
    pub tour: Vec<City>,
    /// Tour length, serialized as `null` if the tour uses an absent edge.
    pub fitness: Fitness,
    /// Amount of completed generations.
    pub generations: usize,
}

impl TourResult {
    /// Creates a new instance of `TourResult`.
    pub fn new(individual: &Individual, metrics: &TelemetryMetrics) -> Self {
        Self { tour: individual.tour.cities().to_vec(), fitness: individual.fitness, generations: metrics.generations }
    }
}

/// Reads a weighted graph from json array of rows. `null` or missing cells are treated as absent edges.
pub fn read_matrix<R: Read>(reader: BufReader<R>) -> GenericResult<MatrixGraph> {
    let matrix: Vec<Vec<Option<Weight>>> =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize matrix: '{err}'"))?;

    create_matrix_graph(
        matrix
            .into_iter()
            .map(|row| row.into_iter().map(|weight| weight.unwrap_or(Weight::INFINITY)).collect())
            .collect(),
    )
}

/// Writes tour result in json format.
pub fn write_result<W: Write>(writer: BufWriter<W>, result: &TourResult) -> GenericResult<()> {
    let mut writer = writer;

    serde_json::to_writer_pretty(&mut writer, result).map_err(|err| format!("cannot write result: '{err}'"))?;
    writer.flush().map_err(|err| format!("cannot flush result: '{err}'"))?;

    Ok(())
}
