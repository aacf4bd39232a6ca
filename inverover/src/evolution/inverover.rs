#[cfg(test)]
#[path = "../../tests/unit/evolution/inverover_test.rs"]
mod inverover_test;

use super::*;
use crate::construction::create_initial_population;
use crate::models::{City, Individual};
use crate::utils::*;
use std::sync::Arc;

/// The Inver-Over evolutionary algorithm.
///
/// Each generation, every tour is evolved independently from a copy: a random city is taken as
/// a pivot and the segment after it is inverted so that the next chosen city gets adjacent to
/// the pivot. The next city is a successor of the pivot in a random donor tour or, with
/// `mutation_probability`, just a random city. The series stops when the chosen city is already
/// adjacent. An evolved tour replaces the original one only if it is strictly shorter.
///
/// Donor tours are read from the population state at the start of the generation, so members
/// can be evolved in parallel. Each member uses its own random generator seeded from the
/// environment random, which makes runs with a seeded environment repeatable regardless of
/// parallelism settings.
///
/// Stored fitness of the given population is recomputed from the graph before the first generation.
#[derive(Clone)]
pub struct InverOver {
    config: InverOverConfig,
    environment: Arc<Environment>,
    telemetry_mode: TelemetryMode,
}

impl InverOver {
    /// Creates a new instance of `InverOver` which logs progress using environment logger.
    pub fn new(config: InverOverConfig, environment: Arc<Environment>) -> Self {
        let telemetry_mode = TelemetryMode::OnlyLogging { logger: environment.logger.clone(), log_best: 100 };

        Self { config, environment, telemetry_mode }
    }

    /// Sets a different telemetry mode.
    pub fn with_telemetry(mut self, telemetry_mode: TelemetryMode) -> Self {
        self.telemetry_mode = telemetry_mode;
        self
    }

    /// Returns algorithm configuration.
    pub fn config(&self) -> &InverOverConfig {
        &self.config
    }

    /// Creates an initial population using configured initialization mode.
    pub fn initialize(&self, graph: &(dyn WeightedGraph + Send + Sync), size: usize) -> EvolutionResult<Population> {
        validate_graph(graph)?;

        create_initial_population(graph, size, self.config.initialization, self.environment.as_ref())
    }

    /// Creates an initial population and evolves it.
    pub fn solve(&self, graph: &(dyn WeightedGraph + Send + Sync), size: usize) -> EvolutionResult<Population> {
        let mut population = self.initialize(graph, size)?;

        self.evolve(&mut population, graph)?;

        Ok(population)
    }

    fn validate(&self, population: &Population, graph: &(dyn WeightedGraph + Send + Sync)) -> EvolutionResult<()> {
        self.config.validate()?;
        validate_graph(graph)?;

        if population.size() < 2 {
            return Err(EvolutionError::InsufficientPopulation(population.size()));
        }

        let vertices = graph.vertex_count();
        if let Some(individual) = population.individuals().iter().find(|individual| individual.tour.len() != vertices) {
            return Err(EvolutionError::Configuration(format!(
                "tour of {} cities does not match graph of {vertices} cities",
                individual.tour.len()
            )));
        }

        Ok(())
    }

    fn run_generation(
        &self,
        population: &mut Population,
        graph: &(dyn WeightedGraph + Send + Sync),
        pool: Option<&ThreadPool>,
    ) -> EvolutionResult<()> {
        let donors = population.individuals().to_vec();
        let seeds = (0..donors.len()).map(|index| (index, self.environment.random.next_seed())).collect::<Vec<_>>();
        let mutation_probability = self.config.mutation_probability;

        let evolve_member = |&(index, seed): &(usize, u64)| {
            if self.environment.is_quota_reached() {
                return Ok(None);
            }

            improve_individual(index, donors.as_slice(), graph, mutation_probability, &SeededRandom::new(seed))
        };

        let offspring = match (&self.environment.parallelism, pool) {
            (ParallelismDegree::Sequential, _) => seeds.iter().map(evolve_member).collect::<Vec<_>>(),
            (_, Some(pool)) => pool.execute(|| parallel_collect(seeds.as_slice(), evolve_member)),
            (_, None) => parallel_collect(seeds.as_slice(), evolve_member),
        };

        offspring.into_iter().zip(0..).try_for_each(|(individual, index)| {
            if let Some(individual) = individual? {
                population.replace(index, individual);
            }

            Ok(())
        })
    }
}

impl Algorithm for InverOver {
    fn name(&self) -> &str {
        "Inver-Over"
    }

    fn evolve(
        &self,
        population: &mut Population,
        graph: &(dyn WeightedGraph + Send + Sync),
    ) -> EvolutionResult<TelemetryMetrics> {
        self.validate(population, graph)?;

        let threads = self.environment.available_threads();
        let pool = match self.environment.parallelism {
            ParallelismDegree::Limited { .. } => Some(ThreadPool::new(threads).map_err(EvolutionError::Configuration)?),
            _ => None,
        };

        refresh_fitness(population, graph)?;

        let mut telemetry = Telemetry::new(self.telemetry_mode.clone());
        telemetry.on_initial(population, self.config.generations, self.config.mutation_probability, threads);

        for _ in 0..self.config.generations {
            if self.environment.is_quota_reached() {
                telemetry.on_interruption();
                break;
            }

            self.run_generation(population, graph, pool.as_ref())?;
            telemetry.on_generation(population);
        }

        Ok(telemetry.on_result(population))
    }
}

fn validate_graph(graph: &(dyn WeightedGraph + Send + Sync)) -> EvolutionResult<()> {
    if graph.vertex_count() < 3 {
        return Err(EvolutionError::Configuration(format!(
            "graph must have at least 3 cities, got {}",
            graph.vertex_count()
        )));
    }

    Ok(())
}

/// Recomputes fitness of individuals whose stored fitness does not match their tours.
fn refresh_fitness(population: &mut Population, graph: &(dyn WeightedGraph + Send + Sync)) -> EvolutionResult<()> {
    let objective = TourObjective::new(graph);
    let mut refreshed = Vec::new();

    for (index, individual) in population.individuals().iter().enumerate() {
        let fitness = objective.fitness(&individual.tour)?;
        if compare_floats(individual.fitness, fitness).is_ne() {
            refreshed.push((index, Individual::new(individual.tour.clone(), fitness)));
        }
    }

    refreshed.into_iter().for_each(|(index, individual)| {
        population.replace(index, individual);
    });

    Ok(())
}

/// Runs one series of inversions on a copy of the individual at `index`. Returns a new individual
/// if its tour is strictly shorter than the original one.
fn improve_individual(
    index: usize,
    donors: &[Individual],
    graph: &(dyn WeightedGraph + Send + Sync),
    mutation_probability: f64,
    random: &dyn Random,
) -> EvolutionResult<Option<Individual>> {
    if donors.len() < 2 {
        return Err(EvolutionError::InsufficientPopulation(donors.len()));
    }

    let original = donors.get(index).ok_or(EvolutionError::InsufficientPopulation(donors.len()))?;
    let mut tour = original.tour.clone();
    let size = tour.len() as i32;

    let invalid_city = |city: City| EvolutionError::InvalidIndex { from: city, to: city };

    let mut city1 = tour.get(random.uniform_int(0, size - 1) as usize).ok_or_else(|| invalid_city(0))?;

    loop {
        let position1 = tour.position_of(city1).ok_or_else(|| invalid_city(city1))?;

        let city2 = if random.is_hit(mutation_probability) {
            let position = random.uniform_int(0, size - 2) as usize;
            let position = if position >= position1 { position + 1 } else { position };

            tour.get(position)
        } else {
            let donor = random.uniform_int(0, donors.len() as i32 - 2) as usize;
            let donor = if donor >= index { donor + 1 } else { donor };

            donors[donor].tour.successor_of(city1)
        }
        .ok_or_else(|| invalid_city(city1))?;

        let next_position = (position1 + 1) % tour.len();
        let next1 = tour.get(next_position).ok_or_else(|| invalid_city(city1))?;

        if city2 == next1 || city2 == city1 {
            break;
        }

        let position2 = tour.position_of(city2).ok_or_else(|| invalid_city(city2))?;
        tour.invert(next_position, position2);

        city1 = city2;
    }

    if tour == original.tour {
        return Ok(None);
    }

    let objective = TourObjective::new(graph);
    let fitness = objective.fitness(&tour)?;

    Ok(if objective.is_improvement(fitness, original.fitness) { Some(Individual::new(tour, fitness)) } else { None })
}

