use crate::archive::{Archivable, ArchiveReader, ArchiveWriter};
use crate::error::{EaError, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Open key-value annotations attached to an individual.
///
/// Values are heterogeneous; each is stored in its serialized form and
/// converted on access. Entries keep their insertion order, including in
/// archives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaData {
    entries: Map<String, Value>,
}

impl MetaData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Values that would not read back as a `T` are refused and leave the
    /// bag unchanged. Non-finite reals must be wrapped in [`Real`](crate::archive::Real).
    pub fn put<T: Serialize + DeserializeOwned>(&mut self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        T::deserialize(&value).map_err(|e| EaError::unarchivable(key, e))?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    /// Retrieve the value under `key` as a `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .entries
            .get(key)
            .ok_or_else(|| EaError::MissingMetaData(key.to_string()))?;
        T::deserialize(value).map_err(|e| EaError::parse(key, e))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl Archivable for MetaData {
    fn save(&self, ar: &mut ArchiveWriter) -> Result<()> {
        for (key, value) in &self.entries {
            ar.raw(key, value.clone())?;
        }
        Ok(())
    }

    fn load(&mut self, ar: &mut ArchiveReader) -> Result<()> {
        self.entries = ar.drain().collect();
        Ok(())
    }
}
