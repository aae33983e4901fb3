//! Named-field tagged documents.
//!
//! Every value is written under a tag, and tags are read back in exactly the
//! order they were written. The concrete text format is JSON with
//! insertion-ordered objects.

pub mod document;
pub mod reader;
pub mod real;
pub mod traits;
pub mod writer;

pub use document::{read_document, write_document};
pub use reader::ArchiveReader;
pub use real::Real;
pub use traits::Archivable;
pub use writer::ArchiveWriter;
