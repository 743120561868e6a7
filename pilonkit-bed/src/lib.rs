//! Convert a Pilon `.changes` log into a seven-column tab-delimited table.
//!
//! Each change line looks like
//!
//! ```text
//! chr1:100-102 chr1_pilon:98 ACG .
//! ```
//!
//! Every `:` and every single space separates a token, giving
//! `[seq, orig_coord, result_seq, result_coord, orig_bases, result_bases]`.
//! A coordinate holding a `-` is a range and is split at the first dash;
//! a single coordinate gets `NA` as its range end. The output row is
//!
//! ```text
//! seq  orig_start  orig_end|NA  result_start  result_end|NA  orig_bases  result_bases
//! ```
//!
pub mod consts;
pub mod convert;
pub mod errors;
pub mod parser;

// Re-exports
pub use convert::*;
pub use errors::BedConvertError;
pub use parser::{ChangeLine, Coordinate};
