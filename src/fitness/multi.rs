use super::Fitness;
use crate::archive::Real;
use serde::{Deserialize, Serialize};

/// Multi-objective fitness, compared lexicographically by objective.
/// An empty objective list is the null value. Objectives may be non-finite.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "Vec<Real>", into = "Vec<Real>")]
pub struct MultiFitness(Vec<f64>);

impl MultiFitness {
    pub fn new(objectives: Vec<f64>) -> Self {
        Self(objectives)
    }

    pub fn objectives(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for MultiFitness {
    fn from(objectives: Vec<f64>) -> Self {
        Self(objectives)
    }
}

impl From<Vec<Real>> for MultiFitness {
    fn from(objectives: Vec<Real>) -> Self {
        Self(objectives.into_iter().map(|r| r.0).collect())
    }
}

impl From<MultiFitness> for Vec<Real> {
    fn from(fitness: MultiFitness) -> Self {
        fitness.0.into_iter().map(Real).collect()
    }
}

impl Fitness for MultiFitness {
    fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    fn nullify(&mut self) {
        self.0.clear();
    }
}
