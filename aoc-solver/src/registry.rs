//! Solution registry for looking up days and creating fresh solutions

use crate::error::{RegistrationError, SolverError};
use crate::solution::Solution;
use std::ops::RangeInclusive;

/// Days per Advent of Code event (1-25)
pub const DAYS_PER_YEAR: usize = 25;

/// Constructor stored for each registered day
pub type SolutionFactory<S> = fn() -> S;

/// Calculate the slot for a day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day == 0 || day as usize > DAYS_PER_YEAR {
        return None;
    }
    Some((day - 1) as usize)
}

/// Builder for constructing a [`SolverRegistry`] with a fluent API
///
/// The builder rejects duplicates while registering and checks the whole
/// table in [`build`](RegistryBuilder::build), so a built registry is always
/// contiguous from day 1.
///
/// # Example
///
/// ```ignore
/// # use aoc_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register(1, || Day::Trebuchet)?
///     .register(2, || Day::CubeConundrum)?
///     .build()?;
/// ```
pub struct RegistryBuilder<S> {
    factories: Vec<Option<SolutionFactory<S>>>,
}

impl<S> RegistryBuilder<S> {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            factories: vec![None; DAYS_PER_YEAR],
        }
    }

    /// Register a solution factory for a specific day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the factory registered, ready for chaining
    /// * `Err(RegistrationError::InvalidDay)` - Day outside 1..=25
    /// * `Err(RegistrationError::DuplicateSolver)` - Day already registered
    pub fn register(mut self, day: u8, factory: SolutionFactory<S>) -> Result<Self, RegistrationError> {
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;

        if self.factories[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }
        self.factories[index] = Some(factory);
        Ok(self)
    }
}

impl<S: Solution> RegistryBuilder<S> {
    /// Finalize the builder and create an immutable registry
    ///
    /// Fails if a registered day leaves a gap before it, or if a factory
    /// builds a solution for a different day than the one it was registered for.
    pub fn build(self) -> Result<SolverRegistry<S>, RegistrationError> {
        let registered = self
            .factories
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1);

        let factories = self
            .factories
            .into_iter()
            .take(registered)
            .zip(1u8..)
            .map(|(factory, day)| {
                let factory = factory.ok_or(RegistrationError::MissingDay(day))?;
                let built = factory().day();
                if built != day {
                    return Err(RegistrationError::DayMismatch { slot: day, built });
                }
                Ok(factory)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SolverRegistry { factories })
    }
}

impl<S> Default for RegistryBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable, ordered table from day number to solution constructor
///
/// Days are contiguous from 1; `lookup(d)` always builds the solution
/// registered for day `d`.
pub struct SolverRegistry<S> {
    factories: Vec<SolutionFactory<S>>,
}

impl<S> SolverRegistry<S> {
    /// Build a fresh solution for `day`
    ///
    /// # Returns
    /// * `Ok(S)` - The solution registered for `day`
    /// * `Err(SolverError::NotFound)` - No solution exists for `day` yet
    pub fn lookup(&self, day: u8) -> Result<S, SolverError> {
        let factory = calc_index(day)
            .and_then(|i| self.factories.get(i))
            .ok_or(SolverError::NotFound(day))?;
        Ok(factory())
    }

    /// Check if a solution is registered for `day`
    pub fn contains(&self, day: u8) -> bool {
        calc_index(day).is_some_and(|i| i < self.factories.len())
    }

    /// Registered days in ascending order
    pub fn days(&self) -> RangeInclusive<u8> {
        // At most 25 entries, always fits in u8
        1..=self.factories.len() as u8
    }

    /// Number of registered days
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
