//! Individuals, numeric genomes and their named-field text archive.
//!
//! An [`Individual`] couples a representation (genome), a fitness value and a
//! bag of [`MetaData`]. Individuals are persisted as self-describing tagged
//! documents; see [`io`] for the entry points and [`archive`] for the
//! document layer.

pub mod archive;
pub mod config;
pub mod error;
pub mod fitness;
pub mod individual;
pub mod io;
pub mod meta_data;
pub mod representations;

pub use archive::{Archivable, ArchiveReader, ArchiveWriter, Real};
pub use config::{ArchiveConfig, ConfigManager};
pub use error::{EaError, Result};
pub use fitness::{Fitness, MultiFitness, ScalarFitness};
pub use individual::{compare_fitness, sort_by_fitness, Individual};
pub use io::{
    individual_from_str, individual_to_string, load_individual, load_individual_from_path,
    save_individual, save_individual_to_path, save_individual_with,
};
pub use meta_data::MetaData;
pub use representations::{BitString, Codon, IntString, NumericVector, RealString};
