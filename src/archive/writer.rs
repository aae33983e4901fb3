use super::Archivable;
use crate::error::{EaError, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Builds one level of a tagged document.
#[derive(Debug, Default)]
pub struct ArchiveWriter {
    fields: Map<String, Value>,
}

impl ArchiveWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a serde value under `tag`.
    ///
    /// The written node must read back as a `T`. Values that serialize
    /// lossily (e.g. a bare non-finite `f64`, which becomes `null`) are
    /// refused here rather than failing on load.
    pub fn field<T: Serialize + DeserializeOwned>(&mut self, tag: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        T::deserialize(&value).map_err(|e| EaError::unarchivable(tag, e))?;
        self.raw(tag, value)
    }

    /// Write `value` as a nested document under `tag`.
    pub fn nested<A: Archivable + ?Sized>(&mut self, tag: &str, value: &A) -> Result<()> {
        let mut child = ArchiveWriter::new();
        value.save(&mut child)?;
        self.raw(tag, child.into_value())
    }

    pub fn raw(&mut self, tag: &str, value: Value) -> Result<()> {
        if self.fields.contains_key(tag) {
            return Err(EaError::Format(format!("Duplicate tag `{}`", tag)));
        }
        self.fields.insert(tag.to_string(), value);
        Ok(())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
