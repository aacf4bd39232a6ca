#[cfg(test)]
#[path = "../../tests/unit/evolution/objective_test.rs"]
mod objective_test;

use crate::models::{City, Fitness, Tour, WeightedGraph};
use crate::utils::{EvolutionResult, compare_floats};
use std::cmp::Ordering;

/// Evaluates tours against a weighted graph: the fitness is a total cyclic length of a tour.
pub struct TourObjective<'a> {
    graph: &'a (dyn WeightedGraph + Send + Sync),
}

impl<'a> TourObjective<'a> {
    /// Creates a new instance of `TourObjective`.
    pub fn new(graph: &'a (dyn WeightedGraph + Send + Sync)) -> Self {
        Self { graph }
    }

    /// Returns total length of the tour.
    pub fn fitness(&self, tour: &Tour) -> EvolutionResult<Fitness> {
        get_tour_length(tour.cities(), self.graph)
    }

    /// Compares two fitness values, shorter tours go first.
    pub fn total_order(&self, a: Fitness, b: Fitness) -> Ordering {
        compare_floats(a, b)
    }

    /// Returns true if candidate is strictly better than the original. Ties keep the original.
    pub fn is_improvement(&self, candidate: Fitness, original: Fitness) -> bool {
        self.total_order(candidate, original) == Ordering::Less
    }
}

/// Returns a sum of weights of consecutive cities including the edge from the last city back to
/// the first one. Edges are always taken in visiting order.
pub fn get_tour_length(cities: &[City], graph: &(dyn WeightedGraph + Send + Sync)) -> EvolutionResult<Fitness> {
    let size = cities.len();

    (0..size).try_fold(0., |acc, idx| graph.weight(cities[idx], cities[(idx + 1) % size]).map(|weight| acc + weight))
}
