use super::Archivable;
use crate::error::{EaError, Result};
use serde::de::DeserializeOwned;
use serde_json::{map, Map, Value};

/// Reads one level of a tagged document, strictly in written order.
pub struct ArchiveReader {
    fields: map::IntoIter,
}

impl ArchiveReader {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            fields: fields.into_iter(),
        }
    }

    /// Build a reader over `value`, which must be a document node.
    pub fn from_value(tag: &str, value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self::new(fields)),
            other => Err(EaError::Format(format!(
                "Expected a document under `{}`, found {}",
                tag,
                kind(&other)
            ))),
        }
    }

    /// Read the next field, which must be tagged `tag`.
    pub fn field<T: DeserializeOwned>(&mut self, tag: &str) -> Result<T> {
        let value = self.next_tagged(tag)?;
        serde_json::from_value(value).map_err(|e| EaError::parse(tag, e))
    }

    /// Read the next field as a nested document into `target`.
    pub fn nested<A: Archivable + ?Sized>(&mut self, tag: &str, target: &mut A) -> Result<()> {
        let value = self.next_tagged(tag)?;
        let mut child = ArchiveReader::from_value(tag, value)?;
        target.load(&mut child)?;
        child.finish()
    }

    /// Take every remaining field.
    pub fn drain(&mut self) -> impl Iterator<Item = (String, Value)> + '_ {
        self.fields.by_ref()
    }

    /// Fail if any field was left unread.
    pub fn finish(mut self) -> Result<()> {
        match self.fields.next() {
            None => Ok(()),
            Some((tag, _)) => Err(EaError::Format(format!("Unexpected field `{}`", tag))),
        }
    }

    fn next_tagged(&mut self, tag: &str) -> Result<Value> {
        match self.fields.next() {
            Some((found, value)) if found == tag => Ok(value),
            Some((found, _)) => Err(EaError::Format(format!(
                "Expected field `{}`, found `{}`",
                tag, found
            ))),
            None => Err(EaError::Format(format!("Missing field `{}`", tag))),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a document",
    }
}
