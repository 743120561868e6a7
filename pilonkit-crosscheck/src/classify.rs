use pilonkit_core::models::{CandidateRecord, IndelChange};
use pilonkit_core::utils::is_comment;

use crate::changelog::ChangeLog;
use crate::errors::CrossCheckError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Header or comment line; copied to the primary output as is.
    Header,
    /// Blank line; dropped.
    Blank,
    /// No Pilon change at the candidate's position.
    Unmatched,
    /// Pilon made this change; `warning` is set when the candidate has a haplotype.
    Matched {
        primary_row: String,
        change: IndelChange,
        warning: bool,
    },
}

///
/// Decide where one candidate line belongs.
///
/// A lookup miss is a classification outcome, not an error. A line fails only
/// when its key can't be read, or when it matches but lacks the trailing
/// columns the primary row carries over.
///
pub fn classify_candidate(
    line: &str,
    line_no: usize,
    changelog: &ChangeLog,
) -> Result<Classification, CrossCheckError> {
    if is_comment(line) {
        return Ok(Classification::Header);
    }
    if line.is_empty() {
        return Ok(Classification::Blank);
    }

    let candidate = CandidateRecord::parse(line, line_no).map_err(CrossCheckError::Candidate)?;

    match changelog.get(&candidate.key()) {
        None => Ok(Classification::Unmatched),
        Some(record) => {
            let change = record.change();
            let primary_row = candidate
                .with_change(&change)
                .map_err(CrossCheckError::Candidate)?;
            Ok(Classification::Matched {
                primary_row,
                change,
                warning: candidate.has_haplotype(),
            })
        }
    }
}
