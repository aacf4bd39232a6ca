#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{DefaultRandom, Random, SeededRandom, Timer};
use std::sync::Arc;

/// Specifies a computational quota for the search.
/// The main purpose is to allow to stop algorithm in reaction to external events such
/// as user cancellation, timer, etc.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A time quota.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: f64,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_f64() > self.limit_in_secs
    }
}

/// Specifies a logger type.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how many threads are used to evolve members of one generation.
#[derive(Clone, Debug, PartialEq)]
pub enum ParallelismDegree {
    /// No limits in parallelism.
    Full,
    /// Limited parallelism.
    Limited {
        /// Max amount of threads which can be used.
        max: usize,
    },
    /// Members are evolved one after another on the caller thread.
    Sequential,
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A global execution quota.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// Keeps data parallelism settings.
    pub parallelism: ParallelismDegree,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(
        random: Arc<dyn Random + Send + Sync>,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
        parallelism: ParallelismDegree,
        logger: InfoLogger,
    ) -> Self {
        Self { random, quota, parallelism, logger }
    }

    /// Creates an instance of `Environment` with repeatable random source.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(SeededRandom::new(seed)), ..Self::default() }
    }

    /// Returns true if quota is set and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }

    /// Returns amount of threads available for data parallelism.
    pub fn available_threads(&self) -> usize {
        match self.parallelism {
            ParallelismDegree::Full => num_cpus::get(),
            ParallelismDegree::Limited { max } => max.max(1),
            ParallelismDegree::Sequential => 1,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(
            Arc::new(DefaultRandom::default()),
            None,
            ParallelismDegree::Full,
            Arc::new(|msg| println!("{msg}")),
        )
    }
}

/// Creates a logger which discards all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_| {})
}
