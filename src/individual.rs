use crate::archive::{Archivable, ArchiveReader, ArchiveWriter, Real};
use crate::error::Result;
use crate::fitness::Fitness;
use crate::meta_data::MetaData;
use std::cmp::Ordering;

/// A candidate solution: a representation, its fitness, and annotations.
///
/// Names are assigned by whoever manages the population; a new individual is
/// always named 0. Fitness starts out null and becomes evaluated once the
/// caller assigns a computed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<R, F> {
    /// Name (id number) of this individual.
    pub name: i64,
    /// Generation of this individual.
    pub generation: f64,
    /// Update at which this individual was born.
    pub update: i64,
    fitness: F,
    repr: R,
    meta_data: MetaData,
}

impl<R: Default, F: Fitness> Default for Individual<R, F> {
    fn default() -> Self {
        Self::from_repr(R::default())
    }
}

impl<R: Default, F: Fitness> Individual<R, F> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R, F: Fitness> Individual<R, F> {
    /// Build an unevaluated individual around `repr`.
    pub fn from_repr(repr: R) -> Self {
        let mut fitness = F::default();
        fitness.nullify();
        Self {
            name: 0,
            generation: 0.0,
            update: 0,
            fitness,
            repr,
            meta_data: MetaData::new(),
        }
    }

    pub fn fitness(&self) -> &F {
        &self.fitness
    }

    pub fn fitness_mut(&mut self) -> &mut F {
        &mut self.fitness
    }

    pub fn set_fitness(&mut self, fitness: F) {
        self.fitness = fitness;
    }

    pub fn repr(&self) -> &R {
        &self.repr
    }

    /// Mutable access to the representation. Changing it does not touch the
    /// fitness; call `fitness_mut().nullify()` if the old value is now stale.
    pub fn repr_mut(&mut self) -> &mut R {
        &mut self.repr
    }

    pub fn meta_data(&self) -> &MetaData {
        &self.meta_data
    }

    pub fn meta_data_mut(&mut self) -> &mut MetaData {
        &mut self.meta_data
    }

    pub fn into_repr(self) -> R {
        self.repr
    }
}

/// Compare individuals by fitness; null fitness sorts lowest.
pub fn compare_fitness<R, F: Fitness>(a: &Individual<R, F>, b: &Individual<R, F>) -> Ordering {
    a.fitness.fitness_cmp(&b.fitness)
}

/// Sort ascending by fitness, unevaluated individuals first.
pub fn sort_by_fitness<R, F: Fitness>(individuals: &mut [Individual<R, F>]) {
    individuals.sort_by(compare_fitness);
}

impl<R: Archivable, F: Fitness> Archivable for Individual<R, F> {
    fn save(&self, ar: &mut ArchiveWriter) -> Result<()> {
        ar.field("name", &self.name)?;
        ar.field("generation", &Real(self.generation))?;

        // Null fitness may be NaN, which does not round-trip through text, so
        // store a flag instead of the value.
        let null_fitness = self.fitness.is_null();
        ar.field("null_fitness", &null_fitness)?;
        if !null_fitness {
            ar.field("fitness", &self.fitness)?;
        }

        ar.nested("representation", &self.repr)?;
        ar.nested("meta_data", &self.meta_data)?;
        ar.field("update", &self.update)
    }

    fn load(&mut self, ar: &mut ArchiveReader) -> Result<()> {
        self.name = ar.field("name")?;
        self.generation = ar.field::<Real>("generation")?.0;

        let null_fitness: bool = ar.field("null_fitness")?;
        if null_fitness {
            self.fitness.nullify();
        } else {
            self.fitness = ar.field("fitness")?;
        }

        ar.nested("representation", &mut self.repr)?;
        ar.nested("meta_data", &mut self.meta_data)?;
        self.update = ar.field("update")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::ScalarFitness;
    use crate::representations::IntString;
    use serde_json::json;

    type TestIndividual = Individual<IntString, ScalarFitness>;

    fn saved(ind: &TestIndividual) -> serde_json::Value {
        let mut ar = ArchiveWriter::new();
        ind.save(&mut ar).unwrap();
        ar.into_value()
    }

    #[test]
    fn test_new_individual_is_unevaluated() {
        let ind = TestIndividual::new();
        assert_eq!(ind.name, 0);
        assert_eq!(ind.generation, 0.0);
        assert_eq!(ind.update, 0);
        assert!(ind.fitness().is_null());
        assert!(ind.repr().is_empty());
        assert!(ind.meta_data().is_empty());
    }

    #[test]
    fn test_from_repr_nullifies_fitness() {
        let ind: Individual<IntString, ScalarFitness> = Individual::from_repr(vec![1, 2, 3].into());
        assert!(ind.fitness().is_null());
        assert_eq!(**ind.repr(), vec![1, 2, 3]);
    }

    #[test]
    fn test_save_evaluated_layout() {
        let mut ind = TestIndividual::from_repr(vec![3, -1, 7].into());
        ind.name = 5;
        ind.generation = 2.0;
        ind.update = 10;
        ind.set_fitness(ScalarFitness::new(1.5));

        assert_eq!(
            saved(&ind),
            json!({
                "name": 5,
                "generation": 2.0,
                "null_fitness": false,
                "fitness": 1.5,
                "representation": {"genome": "3 3 -1 7"},
                "meta_data": {},
                "update": 10
            })
        );
    }

    #[test]
    fn test_save_null_fitness_omits_value() {
        let ind = TestIndividual::from_repr(vec![1, 2].into());
        let value = saved(&ind);
        let tags: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            tags,
            vec!["name", "generation", "null_fitness", "representation", "meta_data", "update"]
        );
        assert_eq!(value["null_fitness"], json!(true));
    }

    #[test]
    fn test_load_null_flag_nullifies_existing_fitness() {
        let mut ind = TestIndividual::new();
        ind.set_fitness(ScalarFitness::new(9.0));

        let document = json!({
            "name": 1,
            "generation": 0.5,
            "null_fitness": true,
            "representation": {"genome": "0"},
            "meta_data": {},
            "update": 3
        });
        let mut ar = ArchiveReader::from_value("individual", document).unwrap();
        ind.load(&mut ar).unwrap();
        ar.finish().unwrap();

        assert!(ind.fitness().is_null());
        assert_eq!(ind.update, 3);
    }

    #[test]
    fn test_compare_fitness() {
        let mut a = TestIndividual::new();
        let mut b = TestIndividual::new();
        let c = TestIndividual::new();
        a.set_fitness(ScalarFitness::new(1.0));
        b.set_fitness(ScalarFitness::new(2.0));

        assert_eq!(compare_fitness(&a, &b), Ordering::Less);
        assert_eq!(compare_fitness(&c, &a), Ordering::Less);

        let mut population = vec![b.clone(), c, a.clone()];
        sort_by_fitness(&mut population);
        assert!(population[0].fitness().is_null());
        assert_eq!(population[1], a);
        assert_eq!(population[2], b);
    }
}
