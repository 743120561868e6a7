use std::fmt::{self, Display};

use crate::consts::{DELETION_MARKER, INSERTION_REF_SENTINEL};
use crate::errors::RecordParseError;
use crate::models::key::GenomicKey;
use crate::utils::TabFields;

pub const CHANGE_BED_MIN_COLUMNS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndelKind {
    Insertion,
    Deletion,
}

impl IndelKind {
    ///
    /// Polarity of a rendered change string such as `+2AT` or `-1G`.
    /// Anything carrying the deletion marker is a deletion.
    ///
    pub fn from_change_str(change: &str) -> Self {
        if change.contains(DELETION_MARKER) {
            IndelKind::Deletion
        } else {
            IndelKind::Insertion
        }
    }
}

///
/// An insertion or deletion of a run of bases, rendered as `+<len><bases>`
/// or `-<len><bases>`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndelChange {
    pub kind: IndelKind,
    pub bases: String,
}

impl IndelChange {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Length with the sign of the change; deletions are negative.
    pub fn signed_len(&self) -> i64 {
        match self.kind {
            IndelKind::Insertion => self.len() as i64,
            IndelKind::Deletion => -(self.len() as i64),
        }
    }
}

impl Display for IndelChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            IndelKind::Insertion => '+',
            IndelKind::Deletion => '-',
        };
        write!(f, "{}{}{}", sign, self.len(), self.bases)
    }
}

///
/// One correction from the Pilon change log, keyed by its 0-based start.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub seq: String,
    pub start: u64,
    pub ref_allele: String,
    pub alt_allele: String,
}

impl ChangeRecord {
    ///
    /// Parse one row of the bed-formatted change log:
    /// `seq, orig_start (1-based), orig_end, result_start, result_end, ref, alt`.
    ///
    pub fn from_bed_line(text: &str, line: usize) -> Result<Self, RecordParseError> {
        let fields = TabFields::with_min_columns(text, line, CHANGE_BED_MIN_COLUMNS)?;
        Ok(ChangeRecord {
            seq: fields.get(0)?.to_string(),
            start: fields.one_based_position(1)?,
            ref_allele: fields.get(5)?.to_string(),
            alt_allele: fields.get(6)?.to_string(),
        })
    }

    pub fn key(&self) -> GenomicKey {
        GenomicKey::new(self.seq.clone(), self.start)
    }

    /// A `.` reference means no reference base was consumed.
    pub fn is_insertion(&self) -> bool {
        self.ref_allele == INSERTION_REF_SENTINEL
    }

    pub fn change(&self) -> IndelChange {
        if self.is_insertion() {
            IndelChange {
                kind: IndelKind::Insertion,
                bases: self.alt_allele.clone(),
            }
        } else {
            IndelChange {
                kind: IndelKind::Deletion,
                bases: self.ref_allele.clone(),
            }
        }
    }
}
