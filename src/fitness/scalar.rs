use super::Fitness;
use crate::archive::Real;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Single-objective fitness. NaN is the null value; infinities are ordinary
/// evaluated values and are archived as `"inf"` / `"-inf"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Real", into = "Real")]
pub struct ScalarFitness(f64);

impl ScalarFitness {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn null() -> Self {
        Self(f64::NAN)
    }

    /// The evaluated value, or `None` if null.
    pub fn value(&self) -> Option<f64> {
        if self.is_null() {
            None
        } else {
            Some(self.0)
        }
    }

    pub fn set(&mut self, value: f64) {
        self.0 = value;
    }
}

impl Default for ScalarFitness {
    fn default() -> Self {
        Self::null()
    }
}

impl From<f64> for ScalarFitness {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Real> for ScalarFitness {
    fn from(real: Real) -> Self {
        Self(real.0)
    }
}

impl From<ScalarFitness> for Real {
    fn from(fitness: ScalarFitness) -> Self {
        Real(fitness.0)
    }
}

impl Fitness for ScalarFitness {
    fn is_null(&self) -> bool {
        self.0.is_nan()
    }

    fn nullify(&mut self) {
        self.0 = f64::NAN;
    }
}

// Nulls compare equal to each other regardless of NaN payload.
impl PartialEq for ScalarFitness {
    fn eq(&self, other: &Self) -> bool {
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl PartialOrd for ScalarFitness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        let fitness = ScalarFitness::default();
        assert!(fitness.is_null());
        assert_eq!(fitness.value(), None);
    }

    #[test]
    fn test_null_evaluated_transitions() {
        let mut fitness = ScalarFitness::default();
        fitness.set(4.5);
        assert!(!fitness.is_null());
        assert_eq!(fitness.value(), Some(4.5));

        fitness.nullify();
        assert!(fitness.is_null());
    }

    #[test]
    fn test_nulls_equal_regardless_of_payload() {
        let a = ScalarFitness::new(f64::NAN);
        let b = ScalarFitness::new(-f64::NAN);
        assert_eq!(a, b);
        assert_ne!(a, ScalarFitness::new(0.0));
    }

    #[test]
    fn test_null_sorts_lowest() {
        let null = ScalarFitness::null();
        let low = ScalarFitness::new(f64::NEG_INFINITY);
        let high = ScalarFitness::new(1.0);

        assert!(null < low);
        assert!(low < high);
        assert_eq!(null.fitness_cmp(&low), Ordering::Less);
        assert_eq!(high.fitness_cmp(&null), Ordering::Greater);
        assert_eq!(null.fitness_cmp(&ScalarFitness::null()), Ordering::Equal);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&ScalarFitness::new(2.5)).unwrap(), "2.5");
        let fitness: ScalarFitness = serde_json::from_str("7").unwrap();
        assert_eq!(fitness.value(), Some(7.0));
    }

    #[test]
    fn test_infinite_values_survive_serialization() {
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            let text = serde_json::to_string(&ScalarFitness::new(value)).unwrap();
            let fitness: ScalarFitness = serde_json::from_str(&text).unwrap();
            assert_eq!(fitness.value(), Some(value));
        }
        assert_eq!(serde_json::to_string(&ScalarFitness::new(f64::NEG_INFINITY)).unwrap(), "\"-inf\"");
    }
}
