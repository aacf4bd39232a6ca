#[cfg(test)]
#[path = "../../tests/unit/models/population_test.rs"]
mod population_test;

use crate::models::{Fitness, Tour};
use crate::utils::compare_floats;
use std::fmt::{Display, Formatter};

/// A tour with its fitness.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    /// A tour.
    pub tour: Tour,
    /// A total length of the tour.
    pub fitness: Fitness,
}

impl Individual {
    /// Creates a new instance of `Individual`.
    pub fn new(tour: Tour, fitness: Fitness) -> Self {
        Self { tour, fitness }
    }
}

/// A fixed size collection of individuals which is improved in place generation by generation.
/// Individuals have no identity beyond their tours.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a new instance of `Population`.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Returns amount of individuals.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Returns an individual at given index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Replaces an individual at given index returning the old one.
    pub fn replace(&mut self, index: usize, individual: Individual) -> Option<Individual> {
        self.individuals.get_mut(index).map(|slot| std::mem::replace(slot, individual))
    }

    /// Returns all individuals.
    pub fn individuals(&self) -> &[Individual] {
        self.individuals.as_slice()
    }

    /// Returns an individual with the shortest tour. The first one is returned on ties.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.iter().reduce(|best, individual| {
            if compare_floats(individual.fitness, best.fitness).is_lt() { individual } else { best }
        })
    }
}

impl Display for Population {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let values = self
            .individuals
            .iter()
            .map(|individual| format!("{:.7}", individual.fitness))
            .collect::<Vec<_>>()
            .join(",");

        write!(f, "[{values}]")
    }
}
