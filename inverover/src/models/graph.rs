#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::models::{City, Weight};
use crate::utils::{EvolutionError, EvolutionResult, GenericError};

/// A directed weighted graph over `N` cities with constant time weight lookup.
/// Symmetric instances are a special case where `weight(i, j) == weight(j, i)`.
pub trait WeightedGraph {
    /// Returns amount of vertices (cities).
    fn vertex_count(&self) -> usize;

    /// Returns the cost of the directed edge `from -> to`. Fails with `InvalidIndex` when any of
    /// the cities is out of range or when both are the same city.
    fn weight(&self, from: City, to: City) -> EvolutionResult<Weight>;
}

/// A dense weighted graph which keeps weights in a flat row-major matrix.
#[derive(Clone, Debug)]
pub struct MatrixGraph {
    weights: Vec<Weight>,
    size: usize,
}

impl MatrixGraph {
    /// Creates a new instance of `MatrixGraph` from a flat row-major matrix of `size * size` weights.
    pub fn new(weights: Vec<Weight>, size: usize) -> Result<Self, GenericError> {
        if weights.len() != size * size {
            return Err(format!("expected {} weights for {size} vertices, got {}", size * size, weights.len()).into());
        }

        if let Some((idx, weight)) =
            weights.iter().enumerate().find(|&(idx, weight)| idx % (size + 1) != 0 && (weight.is_nan() || *weight < 0.))
        {
            return Err(format!("invalid weight {weight} between {} and {}", idx / size, idx % size).into());
        }

        Ok(Self { weights, size })
    }

    /// Returns weights as a flat row-major matrix.
    pub fn weights(&self) -> &[Weight] {
        self.weights.as_slice()
    }
}

impl WeightedGraph for MatrixGraph {
    fn vertex_count(&self) -> usize {
        self.size
    }

    #[inline]
    fn weight(&self, from: City, to: City) -> EvolutionResult<Weight> {
        if from == to || from >= self.size || to >= self.size {
            return Err(EvolutionError::InvalidIndex { from, to });
        }

        Ok(self.weights[from * self.size + to])
    }
}

/// Creates a weighted graph from a matrix of weights where `matrix[i][j]` is the cost of moving
/// from city `i` to city `j`. The matrix might not be square for asymmetric instances: the amount
/// of vertices is `max(rows, cols)` and missing cells are treated as absent edges with an infinite
/// weight. Diagonal values are ignored.
pub fn create_matrix_graph(matrix: Vec<Vec<Weight>>) -> Result<MatrixGraph, GenericError> {
    let rows = matrix.len();
    let cols = matrix.iter().map(|row| row.len()).max().unwrap_or(0);
    let size = rows.max(cols);

    if size == 0 {
        return Err("no weights found in matrix".into());
    }

    let mut weights = vec![Weight::INFINITY; size * size];

    matrix.into_iter().enumerate().for_each(|(from, row)| {
        row.into_iter().enumerate().filter(|(to, _)| *to != from).for_each(|(to, weight)| {
            weights[from * size + to] = weight;
        });
    });

    (0..size).for_each(|idx| weights[idx * size + idx] = 0.);

    MatrixGraph::new(weights, size)
}
