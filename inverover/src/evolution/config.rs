#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use crate::construction::InitializationMode;
use crate::utils::{EvolutionError, EvolutionResult};
use serde::{Deserialize, Serialize};

/// An Inver-Over algorithm configuration. It is created once and never changes during a search.
/// Missing fields are taken from default configuration when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InverOverConfig {
    /// Amount of generations to run.
    pub generations: usize,
    /// A probability to pick the next city of an inversion randomly instead of using a donor tour.
    pub mutation_probability: f64,
    /// Specifies how initial tours are created.
    pub initialization: InitializationMode,
}

impl Default for InverOverConfig {
    fn default() -> Self {
        Self { generations: 10000, mutation_probability: 0.05, initialization: InitializationMode::NearestNeighbor }
    }
}

impl InverOverConfig {
    /// Checks that configuration parameters are in valid ranges.
    pub fn validate(&self) -> EvolutionResult<()> {
        if !(0. ..=1.).contains(&self.mutation_probability) {
            return Err(EvolutionError::Configuration(format!(
                "mutation probability must be in [0, 1], got {}",
                self.mutation_probability
            )));
        }

        Ok(())
    }
}

/// Provides configurable way to build an Inver-Over configuration using fluent interface.
#[derive(Default)]
pub struct InverOverConfigBuilder {
    generations: Option<usize>,
    mutation_probability: Option<f64>,
    initialization: Option<InitializationMode>,
}

impl InverOverConfigBuilder {
    /// Sets amount of generations. Default is 10000.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Sets mutation probability. Default is 0.05.
    pub fn with_mutation_probability(mut self, mutation_probability: f64) -> Self {
        self.mutation_probability = Some(mutation_probability);
        self
    }

    /// Sets initialization mode. Default is nearest neighbor.
    pub fn with_initialization(mut self, initialization: InitializationMode) -> Self {
        self.initialization = Some(initialization);
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> EvolutionResult<InverOverConfig> {
        let default = InverOverConfig::default();
        let config = InverOverConfig {
            generations: self.generations.unwrap_or(default.generations),
            mutation_probability: self.mutation_probability.unwrap_or(default.mutation_probability),
            initialization: self.initialization.unwrap_or(default.initialization),
        };

        config.validate()?;

        Ok(config)
    }
}
