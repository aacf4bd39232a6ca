#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::City;
use crate::utils::{EvolutionError, EvolutionResult};

/// A closed tour: a permutation of all cities `0..N` where the last city is connected back to
/// the first one. Keeps an inverse index to locate a city in constant time.
#[derive(Clone, Debug)]
pub struct Tour {
    cities: Vec<City>,
    positions: Vec<usize>,
}

impl Tour {
    /// Creates a new instance of `Tour`. Fails if cities do not form a permutation of `0..N`.
    pub fn new(cities: Vec<City>) -> EvolutionResult<Self> {
        let size = cities.len();
        let mut positions = vec![usize::MAX; size];

        for (position, &city) in cities.iter().enumerate() {
            match positions.get_mut(city) {
                Some(slot) if *slot == usize::MAX => *slot = position,
                Some(_) => return Err(EvolutionError::Configuration(format!("city {city} is visited twice"))),
                None => {
                    return Err(EvolutionError::Configuration(format!(
                        "city {city} is out of range for a tour of {size} cities"
                    )));
                }
            }
        }

        Ok(Self { cities, positions })
    }

    /// Returns cities in visiting order.
    pub fn cities(&self) -> &[City] {
        self.cities.as_slice()
    }

    /// Returns amount of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns a city at given position.
    pub fn get(&self, position: usize) -> Option<City> {
        self.cities.get(position).copied()
    }

    /// Returns a position of the city in the tour.
    pub fn position_of(&self, city: City) -> Option<usize> {
        self.positions.get(city).copied()
    }

    /// Returns a city which follows given one, wrapping around the end of the tour.
    pub fn successor_of(&self, city: City) -> Option<City> {
        self.position_of(city).map(|position| self.cities[(position + 1) % self.cities.len()])
    }

    /// Reverses the cyclic segment which starts at `start` and ends at `end` (both inclusive)
    /// going forward in tour order, wrapping around the end of the tour if needed.
    pub fn invert(&mut self, start: usize, end: usize) {
        let size = self.cities.len();
        if size == 0 {
            return;
        }

        let length = (end + size - start) % size + 1;

        (0..length / 2).for_each(|offset| {
            let left = (start + offset) % size;
            let right = (end + size - offset) % size;

            self.cities.swap(left, right);
            self.positions[self.cities[left]] = left;
            self.positions[self.cities[right]] = right;
        });
    }

    /// Returns an iterator over directed edges of the tour including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (City, City)> + '_ {
        let size = self.cities.len();
        (0..size).map(move |idx| (self.cities[idx], self.cities[(idx + 1) % size]))
    }
}

impl PartialEq for Tour {
    fn eq(&self, other: &Self) -> bool {
        self.cities == other.cities
    }
}

impl Eq for Tour {}
