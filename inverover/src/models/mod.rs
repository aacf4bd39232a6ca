//! A collection of models to represent a travelling salesman problem and its solutions.

/// Specifies a city: a dense index into the graph, in `0..N`.
pub type City = usize;

/// Specifies a cost of moving from one city to another.
pub type Weight = f64;

/// Specifies a total cyclic length of a tour. Lower is better.
pub type Fitness = f64;

mod graph;
pub use self::graph::*;

mod population;
pub use self::population::*;

mod tour;
pub use self::tour::*;
