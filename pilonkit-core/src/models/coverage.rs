use std::fmt::{self, Display};

use crate::errors::RecordParseError;
use crate::models::change::IndelKind;
use crate::utils::TabFields;

/// `pos, A, C, G, T, N, DEL, INS` as written by `igvtools count --bases`.
pub const COVERAGE_MIN_COLUMNS: usize = 8;
pub const DELETION_COLUMN: usize = 6;
pub const INSERTION_COLUMN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Illumina,
    PacBio,
}

impl Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Illumina => write!(f, "Illumina"),
            Platform::PacBio => write!(f, "PacBio"),
        }
    }
}

///
/// Read depth at one position on one platform, plus how many of those reads
/// carry an insertion or a deletion.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageRecord {
    pub total: f64,
    pub insertions: f64,
    pub deletions: f64,
}

impl CoverageRecord {
    ///
    /// Parse one data line of a per-base count dump. Total coverage is the sum
    /// of the four nucleotide columns.
    ///
    pub fn from_count_line(text: &str, line: usize) -> Result<(u64, Self), RecordParseError> {
        let fields = TabFields::with_min_columns(text, line, COVERAGE_MIN_COLUMNS)?;
        let pos = fields.integer(0)?;

        let mut total = 0.0;
        for column in 1..=4 {
            total += fields.number(column)?;
        }

        Ok((
            pos,
            CoverageRecord {
                total,
                deletions: fields.number(DELETION_COLUMN)?,
                insertions: fields.number(INSERTION_COLUMN)?,
            },
        ))
    }

    pub fn count(&self, kind: IndelKind) -> f64 {
        match kind {
            IndelKind::Insertion => self.insertions,
            IndelKind::Deletion => self.deletions,
        }
    }

    /// Indel count over total coverage; `None` when there is no coverage.
    pub fn fraction(&self, kind: IndelKind) -> Option<f64> {
        if self.total > 0.0 {
            Some(self.count(kind) / self.total)
        } else {
            None
        }
    }
}
