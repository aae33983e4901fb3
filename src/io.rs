//! Entry points for persisting single individuals.
//!
//! Each call works on one individual and one stream. Loads build a fresh
//! individual and return it only if the whole document was read; on error
//! nothing is returned. File handles are closed on every exit path.

use crate::archive::{read_document, write_document, Archivable};
use crate::config::ArchiveConfig;
use crate::error::{EaError, Result};
use crate::fitness::Fitness;
use crate::individual::Individual;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Root tag of an individual document.
pub const INDIVIDUAL_TAG: &str = "individual";

/// Write `ind` as a complete document using the default layout.
pub fn save_individual<W, R, F>(out: W, ind: &Individual<R, F>) -> Result<()>
where
    W: Write,
    R: Archivable,
    F: Fitness,
{
    save_individual_with(out, ind, &ArchiveConfig::default())
}

pub fn save_individual_with<W, R, F>(out: W, ind: &Individual<R, F>, config: &ArchiveConfig) -> Result<()>
where
    W: Write,
    R: Archivable,
    F: Fitness,
{
    write_document(out, INDIVIDUAL_TAG, ind, config)?;
    log::debug!("Saved individual {}", ind.name);
    Ok(())
}

/// Read an individual previously written by [`save_individual`].
pub fn load_individual<Rd, R, F>(input: Rd) -> Result<Individual<R, F>>
where
    Rd: Read,
    R: Archivable + Default,
    F: Fitness,
{
    let mut ind = Individual::new();
    read_document(input, INDIVIDUAL_TAG, &mut ind)?;
    log::debug!("Loaded individual {}", ind.name);
    Ok(ind)
}

pub fn save_individual_to_path<P, R, F>(path: P, ind: &Individual<R, F>, config: &ArchiveConfig) -> Result<()>
where
    P: AsRef<Path>,
    R: Archivable,
    F: Fitness,
{
    let file = File::create(path.as_ref())?;
    save_individual_with(BufWriter::new(file), ind, config)
}

/// Open `path` and read one individual from it.
///
/// A missing or unreadable file is a [`EaError::Resource`]; a readable file
/// with bad contents is a format or parse error.
pub fn load_individual_from_path<P, R, F>(path: P) -> Result<Individual<R, F>>
where
    P: AsRef<Path>,
    R: Archivable + Default,
    F: Fitness,
{
    let file = File::open(path.as_ref())?;
    load_individual(BufReader::new(file))
}

pub fn individual_to_string<R, F>(ind: &Individual<R, F>, config: &ArchiveConfig) -> Result<String>
where
    R: Archivable,
    F: Fitness,
{
    let mut buf = Vec::new();
    save_individual_with(&mut buf, ind, config)?;
    String::from_utf8(buf).map_err(|e| EaError::Format(format!("Document is not UTF-8: {}", e)))
}

pub fn individual_from_str<R, F>(document: &str) -> Result<Individual<R, F>>
where
    R: Archivable + Default,
    F: Fitness,
{
    load_individual(document.as_bytes())
}
