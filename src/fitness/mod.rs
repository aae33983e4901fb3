pub mod multi;
pub mod scalar;

pub use multi::MultiFitness;
pub use scalar::ScalarFitness;

use serde::{de::DeserializeOwned, Serialize};
use std::cmp::Ordering;

/// A comparable quality score that may not have been evaluated yet.
///
/// The value is archived through serde, but only when the fitness is not
/// null; null values are never written.
pub trait Fitness: Default + Clone + PartialOrd + Serialize + DeserializeOwned {
    /// True if this fitness has not been evaluated (or was invalidated).
    fn is_null(&self) -> bool;

    /// Mark this fitness as unevaluated.
    fn nullify(&mut self);

    /// Total order over fitnesses: null sorts lowest, two nulls are equal,
    /// and values that do not compare are treated as equal.
    fn fitness_cmp(&self, other: &Self) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
        }
    }
}
