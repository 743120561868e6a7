//! # Core models for pilonkit
//!
//! Record types shared by the pilonkit tools: genomic keys, Pilon change
//! records, correction candidates, per-position coverage, and homopolymer
//! runs. Each record type knows how to parse itself from one tab-delimited
//! line and reports failures as a [`RecordParseError`] carrying the line number.
//!
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::RecordParseError;
pub use models::*;
