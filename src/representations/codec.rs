//! Compact text packing for numeric genomes.
//!
//! A genome of n codons is packed into a single string, the count followed
//! by the codons, all separated by single spaces:
//!
//! ```text
//! [3, -1, 7]  ->  "3 3 -1 7"
//! []          ->  "0"
//! ```
//!
//! Codons use their standard `Display` / `FromStr` text forms. Floats print
//! as the shortest string that parses back to the same value, and non-finite
//! values print as `NaN`, `inf` and `-inf`, which parse back unchanged.

use std::fmt::{Debug, Display, Write};
use std::str::FromStr;
use thiserror::Error;

/// A numeric element of a packed genome.
pub trait Codon: Copy + Default + PartialEq + Debug + Display + FromStr {}

macro_rules! impl_codon {
    ($($t:ty),*) => {
        $(impl Codon for $t {})*
    };
}

impl_codon!(i8, i16, i32, i64, f32, f64);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("missing codon count")]
    MissingCount,

    #[error("invalid codon count `{0}`")]
    InvalidCount(String),

    #[error("invalid codon `{token}` at position {index}")]
    InvalidCodon { index: usize, token: String },

    #[error("declared {expected} codons, found {found}")]
    CountMismatch { expected: usize, found: usize },
}

/// Pack `codons` as `"<count> <c0> <c1> ..."`.
pub fn encode<T: Codon>(codons: &[T]) -> String {
    let mut out = codons.len().to_string();
    for codon in codons {
        // Writing to a String cannot fail
        let _ = write!(out, " {}", codon);
    }
    log::trace!("Encoded {} codons", codons.len());
    out
}

/// Unpack a string produced by [`encode`].
///
/// The number of codons must match the declared count exactly; nothing is
/// truncated or padded.
pub fn decode<T: Codon>(packed: &str) -> Result<Vec<T>, CodecError> {
    let mut tokens = packed.split_whitespace();

    let count_token = tokens.next().ok_or(CodecError::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| CodecError::InvalidCount(count_token.to_string()))?;

    // Check the token count before sizing the output, so a forged count
    // cannot force a huge allocation.
    let tokens: Vec<&str> = tokens.collect();
    if tokens.len() != count {
        return Err(CodecError::CountMismatch {
            expected: count,
            found: tokens.len(),
        });
    }

    let mut codons = Vec::with_capacity(count);
    for (index, token) in tokens.into_iter().enumerate() {
        let codon = token.parse::<T>().map_err(|_| CodecError::InvalidCodon {
            index,
            token: token.to_string(),
        })?;
        codons.push(codon);
    }

    log::trace!("Decoded {} codons", count);
    Ok(codons)
}
