use super::{Archivable, ArchiveReader, ArchiveWriter};
use crate::config::{ArchiveConfig, ConfigSection};
use crate::error::{EaError, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::{Read, Write};

/// Write `value` as a complete document whose single root field is `root_tag`.
pub fn write_document<A, W>(mut out: W, root_tag: &str, value: &A, config: &ArchiveConfig) -> Result<()>
where
    A: Archivable + ?Sized,
    W: Write,
{
    config.validate()?;

    let mut root = ArchiveWriter::new();
    root.nested(root_tag, value)?;
    let document = root.into_value();

    if config.pretty {
        let indent = vec![b' '; config.indent_width];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        document.serialize(&mut ser).map_err(write_error)?;
    } else {
        serde_json::to_writer(&mut out, &document).map_err(write_error)?;
    }
    writeln!(out)?;
    out.flush()?;

    log::debug!("Wrote `{}` document", root_tag);
    Ok(())
}

/// Read a document written by [`write_document`] into `target`.
///
/// The whole document is parsed before `target` is touched, so a syntax
/// error never leaves `target` half loaded. Semantic errors still may; callers
/// that need atomicity load into a fresh value.
pub fn read_document<A, R>(input: R, root_tag: &str, target: &mut A) -> Result<()>
where
    A: Archivable + ?Sized,
    R: Read,
{
    let document: Value = serde_json::from_reader(input).map_err(EaError::from_document)?;

    let mut root = ArchiveReader::from_value(root_tag, document)?;
    root.nested(root_tag, target)?;
    root.finish()?;

    log::debug!("Read `{}` document", root_tag);
    Ok(())
}

fn write_error(err: serde_json::Error) -> EaError {
    if err.is_io() {
        EaError::Resource(err.into())
    } else {
        EaError::Serde(err)
    }
}
