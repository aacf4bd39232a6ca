#[cfg(test)]
#[path = "../../tests/unit/construction/initial_test.rs"]
mod initial_test;

use crate::evolution::TourObjective;
use crate::models::*;
use crate::utils::{Environment, EvolutionError, EvolutionResult, Random};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Specifies how initial tours are created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InitializationMode {
    /// A uniformly random permutation of cities.
    Random,
    /// A greedy nearest neighbor construction starting from a random city.
    #[default]
    NearestNeighbor,
}

impl FromStr for InitializationMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "random" => Ok(Self::Random),
            "nn" | "nearest-neighbor" | "nearestNeighbor" => Ok(Self::NearestNeighbor),
            _ => Err(format!("unknown initialization mode: '{value}'")),
        }
    }
}

/// Creates an initial tour for the given graph.
pub trait InitialOperator {
    /// Creates a new tour. Calls are independent: the only shared state is the random source.
    fn create(&self, graph: &(dyn WeightedGraph + Send + Sync), random: &dyn Random) -> EvolutionResult<Tour>;
}

/// Creates a uniformly random permutation using Fisher-Yates shuffle.
#[derive(Default)]
pub struct RandomInitial {}

impl InitialOperator for RandomInitial {
    fn create(&self, graph: &(dyn WeightedGraph + Send + Sync), random: &dyn Random) -> EvolutionResult<Tour> {
        let mut cities = (0..graph.vertex_count()).collect::<Vec<City>>();

        (1..cities.len()).rev().for_each(|idx| {
            let other = random.uniform_int(0, idx as i32) as usize;
            cities.swap(idx, other);
        });

        Tour::new(cities)
    }
}

/// Creates a tour by always moving to the closest unvisited city, ties are broken by the lowest
/// city index. Only outgoing edges are considered, so asymmetric graphs are handled naturally.
#[derive(Default)]
pub struct NearestNeighborInitial {
    start: Option<City>,
}

impl NearestNeighborInitial {
    /// Creates a new instance of `NearestNeighborInitial` which always starts from given city.
    pub fn new_with_start(start: City) -> Self {
        Self { start: Some(start) }
    }
}

impl InitialOperator for NearestNeighborInitial {
    fn create(&self, graph: &(dyn WeightedGraph + Send + Sync), random: &dyn Random) -> EvolutionResult<Tour> {
        let size = graph.vertex_count();
        if size == 0 {
            return Tour::new(vec![]);
        }

        let start = self.start.unwrap_or_else(|| random.uniform_int(0, size as i32 - 1) as City);
        if start >= size {
            return Err(EvolutionError::InvalidIndex { from: start, to: start });
        }

        let mut visited = vec![false; size];
        let mut cities = Vec::with_capacity(size);
        let mut current = start;

        visited[current] = true;
        cities.push(current);

        while cities.len() < size {
            let mut nearest: Option<(City, Weight)> = None;

            for candidate in (0..size).filter(|&candidate| !visited[candidate]) {
                let weight = graph.weight(current, candidate)?;
                if nearest.is_none_or(|(_, best)| weight < best) {
                    nearest = Some((candidate, weight));
                }
            }

            // at least one city is unvisited here
            let Some((next, _)) = nearest else { break };

            visited[next] = true;
            cities.push(next);
            current = next;
        }

        Tour::new(cities)
    }
}

/// Creates an initial population of given size using specified initialization mode.
pub fn create_initial_population(
    graph: &(dyn WeightedGraph + Send + Sync),
    size: usize,
    mode: InitializationMode,
    environment: &Environment,
) -> EvolutionResult<Population> {
    let operator: Box<dyn InitialOperator> = match mode {
        InitializationMode::Random => Box::<RandomInitial>::default(),
        InitializationMode::NearestNeighbor => Box::<NearestNeighborInitial>::default(),
    };
    let objective = TourObjective::new(graph);

    (0..size)
        .map(|_| -> EvolutionResult<Individual> {
            let tour = operator.create(graph, environment.random.as_ref())?;
            let fitness = objective.fitness(&tour)?;

            Ok(Individual::new(tour, fitness))
        })
        .collect::<EvolutionResult<Vec<_>>>()
        .map(Population::new)
}
