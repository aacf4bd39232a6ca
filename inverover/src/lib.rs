//! This crate exposes an Inver-Over evolutionary algorithm for the ***Travelling Salesman Problem***
//! and the building blocks it is made of: a weighted graph model, tour initialization heuristics,
//! tour length evaluation, and a generation loop which improves a population of tours in place.
//!
//! # Inver-Over
//!
//! Inver-Over was introduced by G. Tao and Z. Michalewicz in 1998. Every generation, each tour
//! of the population is repeatedly inverted so that a chosen city gets adjacent to a city it is
//! adjacent to in some other tour (or, with small probability, to a random city). The modified
//! tour replaces the original one only if it is strictly shorter.
//!
//! The next city of an inversion series is taken as the *successor* of the current city in a
//! donor tour. This differs from the published algorithm, but gives better tour length and
//! running time in practice.
//!
//! # Example
//!
//! ```
//! use inverover::prelude::*;
//! use std::sync::Arc;
//!
//! let graph = create_matrix_graph(vec![
//!     vec![0., 1., 2., 1.],
//!     vec![1., 0., 1., 2.],
//!     vec![2., 1., 0., 1.],
//!     vec![1., 2., 1., 0.],
//! ])
//! .unwrap();
//!
//! let config = InverOverConfigBuilder::default().with_generations(10).build().unwrap();
//! let environment = Arc::new(Environment::new_with_seed(42));
//! let algorithm = InverOver::new(config, environment);
//!
//! let population = algorithm.solve(&graph, 8).unwrap();
//!
//! assert_eq!(population.best().unwrap().fitness, 4.);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod evolution;
pub mod models;
pub mod prelude;
pub mod utils;
