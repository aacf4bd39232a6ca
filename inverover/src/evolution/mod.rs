//! Contains functionality to run evolution of tour populations.

use crate::models::{Population, WeightedGraph};
use crate::utils::EvolutionResult;

mod config;
pub use self::config::*;

mod inverover;
pub use self::inverover::InverOver;

mod objective;
pub use self::objective::*;

mod snapshot;
pub use self::snapshot::*;

mod telemetry;
pub use self::telemetry::*;

/// An evolutionary algorithm which improves a population of tours in place.
pub trait Algorithm {
    /// Returns a human readable algorithm name.
    fn name(&self) -> &str;

    /// Runs the whole generation loop on the population against the graph. Returns once all
    /// generations are done or the environment quota is reached.
    fn evolve(
        &self,
        population: &mut Population,
        graph: &(dyn WeightedGraph + Send + Sync),
    ) -> EvolutionResult<TelemetryMetrics>;
}
