use super::{ArchiveReader, ArchiveWriter};
use crate::error::Result;

/// A type that writes itself as a nested document and reads itself back.
///
/// Save and load are separate because the two directions may take different
/// paths, e.g. a field that is only present in some states.
pub trait Archivable {
    fn save(&self, ar: &mut ArchiveWriter) -> Result<()>;

    /// Load into `self`. On error the contents of `self` are unspecified.
    fn load(&mut self, ar: &mut ArchiveReader) -> Result<()>;
}
