#[cfg(test)]
#[path = "../../tests/unit/evolution/snapshot_test.rs"]
mod snapshot_test;

use super::{InverOverConfig, TourObjective};
use crate::models::*;
use crate::utils::GenericResult;
use serde::{Deserialize, Serialize};

/// A serializable state of a search: configuration, graph, and population.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverSnapshot {
    /// Algorithm configuration.
    pub config: InverOverConfig,
    /// Weighted graph.
    pub graph: GraphSnapshot,
    /// Population individuals.
    pub population: Vec<IndividualSnapshot>,
}

/// A serializable weighted graph as a flat row-major matrix. Absent edges are stored as `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Amount of vertices.
    pub size: usize,
    /// Flat row-major weights.
    pub weights: Vec<Option<Weight>>,
}

/// A serializable individual.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndividualSnapshot {
    /// Cities in visiting order.
    pub tour: Vec<City>,
    /// Tour length, `None` if the tour uses an absent edge.
    pub fitness: Option<Fitness>,
}

impl SolverSnapshot {
    /// Creates a new instance of `SolverSnapshot`.
    pub fn new(config: &InverOverConfig, graph: &MatrixGraph, population: &Population) -> Self {
        Self {
            config: config.clone(),
            graph: GraphSnapshot {
                size: graph.vertex_count(),
                weights: graph.weights().iter().map(|weight| weight.is_finite().then_some(*weight)).collect(),
            },
            population: population
                .individuals()
                .iter()
                .map(|individual| IndividualSnapshot {
                    tour: individual.tour.cities().to_vec(),
                    fitness: individual.fitness.is_finite().then_some(individual.fitness),
                })
                .collect(),
        }
    }

    /// Restores configuration, graph, and population from the snapshot. Tours are validated and
    /// their fitness is recalculated against the restored graph.
    pub fn restore(self) -> GenericResult<(InverOverConfig, MatrixGraph, Population)> {
        self.config.validate()?;

        let weights = self.graph.weights.into_iter().map(|weight| weight.unwrap_or(Weight::INFINITY)).collect();
        let graph = MatrixGraph::new(weights, self.graph.size)?;
        let objective = TourObjective::new(&graph);

        let individuals = self
            .population
            .into_iter()
            .map(|individual| -> GenericResult<Individual> {
                let tour = Tour::new(individual.tour)?;
                if tour.len() != graph.vertex_count() {
                    let (actual, expected) = (tour.len(), graph.vertex_count());
                    return Err(format!("tour of {actual} cities does not match graph of {expected} cities").into());
                }

                let fitness = objective.fitness(&tour)?;

                Ok(Individual::new(tour, fitness))
            })
            .collect::<GenericResult<Vec<_>>>()?;

        Ok((self.config, graph, Population::new(individuals)))
    }
}
