use std::path::PathBuf;

use pilonkit_core::RecordParseError;
use pilonkit_core::models::{GenomicKey, Platform};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CombineError {
    #[error("Manifest line {line}: unrecognised file kind: {name:?}")]
    UnknownManifestEntry { line: usize, name: String },

    #[error("Manifest line {line}: expected `<kind>\\t<path>`, found: {text:?}")]
    MalformedManifestLine { line: usize, text: String },

    #[error("Manifest is missing a required entry: {0}")]
    MissingManifestEntry(String),

    #[error("Error parsing {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: RecordParseError,
    },

    #[error("No {platform} coverage recorded at {key}")]
    MissingCoverage { platform: Platform, key: GenomicKey },

    #[error("Insufficient data: zero {platform} coverage at {key}")]
    ZeroCoverage { platform: Platform, key: GenomicKey },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid progress bar template: {0}")]
    Progress(#[from] indicatif::style::TemplateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CombineError {
    /// Errors that stem from a single indel row rather than from the inputs as a whole.
    pub fn is_join_miss(&self) -> bool {
        matches!(
            self,
            CombineError::MissingCoverage { .. } | CombineError::ZeroCoverage { .. }
        )
    }
}
