pub mod codec;
pub mod numeric_vector;

pub use codec::{decode, encode, Codon, CodecError};
pub use numeric_vector::NumericVector;

/// Bitstring representation; codons are expected to be 0 or 1.
pub type BitString = NumericVector<i32>;

/// Integer-string representation.
pub type IntString = NumericVector<i32>;

/// Real-string representation.
pub type RealString = NumericVector<f64>;
