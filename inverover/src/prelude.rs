//! This module reimports a common used types.

pub use crate::construction::{InitialOperator, InitializationMode, NearestNeighborInitial, RandomInitial};
pub use crate::construction::create_initial_population;

pub use crate::evolution::Algorithm;
pub use crate::evolution::InverOver;
pub use crate::evolution::InverOverConfig;
pub use crate::evolution::InverOverConfigBuilder;
pub use crate::evolution::SolverSnapshot;
pub use crate::evolution::TelemetryMetrics;
pub use crate::evolution::TelemetryMode;
pub use crate::evolution::{TourObjective, get_tour_length};

pub use crate::models::{City, Fitness, Weight};
pub use crate::models::{Individual, Population, Tour};
pub use crate::models::{MatrixGraph, WeightedGraph, create_matrix_graph};

pub use crate::utils::Environment;
pub use crate::utils::{InfoLogger, create_silent_logger};
pub use crate::utils::ParallelismDegree;
pub use crate::utils::{Quota, TimeQuota};
pub use crate::utils::{DefaultRandom, Random, SeededRandom};
pub use crate::utils::{EvolutionError, EvolutionResult, GenericError, GenericResult};
