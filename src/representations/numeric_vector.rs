use super::codec::{self, Codon};
use crate::archive::{Archivable, ArchiveReader, ArchiveWriter};
use crate::error::{EaError, Result};
use std::ops::{Deref, DerefMut};

/// Canonical numeric representation for genetic algorithms.
///
/// Archives as a nested document with a single packed `genome` field rather
/// than one node per codon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericVector<T: Codon>(Vec<T>);

impl<T: Codon> NumericVector<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Genome of `n` default (zero) codons.
    pub fn with_len(n: usize) -> Self {
        Self(vec![T::default(); n])
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: Codon> From<Vec<T>> for NumericVector<T> {
    fn from(codons: Vec<T>) -> Self {
        Self(codons)
    }
}

impl<T: Codon> FromIterator<T> for NumericVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Codon> Deref for NumericVector<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.0
    }
}

impl<T: Codon> DerefMut for NumericVector<T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T: Codon> Archivable for NumericVector<T> {
    fn save(&self, ar: &mut ArchiveWriter) -> Result<()> {
        ar.field("genome", &codec::encode(&self.0))
    }

    fn load(&mut self, ar: &mut ArchiveReader) -> Result<()> {
        let genome: String = ar.field("genome")?;
        self.0 = codec::decode(&genome).map_err(|e| EaError::parse("genome", e))?;
        Ok(())
    }
}
