//! Combine the per-position evidence behind every Pilon indel.
//!
//! A manifest names four inputs: the indel list written by `pilonkit
//! crosscheck`, an Illumina and a PacBio per-base count dump, and a
//! homopolymer table. For every indel, in (sequence, position) order, the
//! combiner reads coverage and indel counts from both platforms, derives the
//! fraction of reads supporting the indel, and checks whether the position
//! opens a homopolymer run. It writes
//!
//! - the unified report, one row per indel
//! - a long-form coverage table, one row per indel and platform
//! - a statistics table summarising indels inside homopolymers
//!
//! Deletions are looked up one base downstream of their recorded position,
//! since Pilon anchors a deletion on the base before the deleted one.
//!
pub mod combine;
pub mod consts;
pub mod coverage;
pub mod errors;
pub mod homopolymer;
pub mod indels;
pub mod manifest;
pub mod stats;

// Re-exports
pub use combine::*;
pub use coverage::CoverageTable;
pub use errors::CombineError;
pub use homopolymer::HomopolymerTable;
pub use indels::IndelTable;
pub use manifest::{Manifest, ManifestEntry};
pub use stats::{BaseCounts, CombineStats, HomopolymerTally};
