//! A module which provides the logic to collect metrics about algorithm execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::models::{Fitness, Population};
use crate::utils::{InfoLogger, Timer, map_reduce};

/// Encapsulates different measurements regarding algorithm evaluation.
#[derive(Clone, Debug)]
pub struct TelemetryMetrics {
    /// Algorithm duration in seconds.
    pub duration: usize,
    /// Total amount of completed generations.
    pub generations: usize,
    /// Speed: generations per second.
    pub speed: f64,
    /// Evolution progress.
    pub evolution: Vec<TelemetryGeneration>,
}

/// Represents information about generation.
#[derive(Clone, Debug)]
pub struct TelemetryGeneration {
    /// Generation sequence number.
    pub number: usize,
    /// Time since evolution started.
    pub timestamp: f64,
    /// Best fitness in population.
    pub best: Fitness,
    /// Average fitness in population.
    pub average: Fitness,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No logging at all, metrics are still collected.
    None,
    /// Logging of search progress.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self {
            metrics: TelemetryMetrics { duration: 0, generations: 0, speed: 0., evolution: vec![] },
            time: Timer::start(),
            mode,
        }
    }

    /// Reports search start.
    pub fn on_initial(
        &mut self,
        population: &Population,
        generations: usize,
        mutation_probability: f64,
        threads: usize,
    ) {
        self.time = Timer::start();
        self.log(
            format!(
                "[0s] started with {} tours, generations: {generations}, mutation probability: {mutation_probability}, \
                 threads: {threads}",
                population.size()
            )
            .as_str(),
        );
        self.log_best(population);
    }

    /// Reports end of generation.
    pub fn on_generation(&mut self, population: &Population) {
        let (best, average) = get_fitness_summary(population);

        self.metrics.generations += 1;
        self.metrics.evolution.push(TelemetryGeneration {
            number: self.metrics.generations,
            timestamp: self.time.elapsed_secs_as_f64(),
            best,
            average,
        });

        let should_log = match &self.mode {
            TelemetryMode::OnlyLogging { log_best, .. } => *log_best > 0 && self.metrics.generations % log_best == 0,
            TelemetryMode::None => false,
        };

        if should_log {
            self.log_best(population);
        }
    }

    /// Reports that search was stopped before all generations were run.
    pub fn on_interruption(&self) {
        self.log(format!("interrupted after {} generations", self.metrics.generations).as_str());
    }

    /// Reports search end and returns collected metrics.
    pub fn on_result(mut self, population: &Population) -> TelemetryMetrics {
        let elapsed = self.time.elapsed_secs_as_f64();

        self.metrics.duration = elapsed.round() as usize;
        self.metrics.speed = if elapsed > 0. { self.metrics.generations as f64 / elapsed } else { 0. };

        let (best, _) = get_fitness_summary(population);
        self.log(
            format!(
                "[{}s] total generations: {}, speed: {:.2} gen/sec, best fitness: {:.7}",
                self.metrics.duration, self.metrics.generations, self.metrics.speed, best
            )
            .as_str(),
        );

        self.metrics
    }

    fn log_best(&self, population: &Population) {
        let (best, average) = get_fitness_summary(population);
        self.log(
            format!(
                "[{}s] generation {}: best fitness: {:.7}, average: {:.7}",
                self.time.elapsed_secs(),
                self.metrics.generations,
                best,
                average
            )
            .as_str(),
        );
    }

    fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}

fn get_fitness_summary(population: &Population) -> (Fitness, Fitness) {
    let best = population.best().map_or(Fitness::INFINITY, |individual| individual.fitness);
    let total = map_reduce(population.individuals(), |individual| individual.fitness, || 0., |a, b| a + b);
    let average = if population.size() > 0 { total / population.size() as f64 } else { 0. };

    (best, average)
}
