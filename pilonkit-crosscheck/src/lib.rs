//! Cross-check a list of correction candidates against a Pilon change log.
//!
//! The change log (the bed table written by `pilonkit bed`) is loaded into a
//! lookup keyed by sequence and 0-based start. Every candidate is then looked
//! up at its own position:
//!
//! - absent: the line goes verbatim to the unmatched output
//! - present: the candidate is rewritten with the known change to the primary
//!   output, and the original line is annotated into the warning or
//!   non-warning output depending on whether it carries a haplotype
//!
//! Header lines go to the primary output only.
//!
pub mod changelog;
pub mod classify;
pub mod consts;
pub mod crosscheck;
pub mod errors;

// Re-exports
pub use changelog::ChangeLog;
pub use classify::{Classification, classify_candidate};
pub use crosscheck::*;
pub use errors::CrossCheckError;
