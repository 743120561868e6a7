use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use pilonkit_core::models::IndelKind;
use pilonkit_core::utils::get_dynamic_reader;

use crate::changelog::ChangeLog;
use crate::classify::{Classification, classify_candidate};
use crate::consts::{NON_WARNING_ANNOTATION, WARNING_ANNOTATION};
use crate::errors::CrossCheckError;

///
/// The four destinations of a cross-check run.
///
pub struct CrossCheckWriters<W: Write> {
    pub primary: W,
    pub unmatched: W,
    pub non_warning: W,
    pub warning: W,
}

impl<W: Write> CrossCheckWriters<W> {
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.primary.flush()?;
        self.unmatched.flush()?;
        self.non_warning.flush()?;
        self.warning.flush()
    }
}

#[derive(Debug, Clone)]
pub struct CrossCheckPaths {
    pub primary: PathBuf,
    pub unmatched: PathBuf,
    pub non_warning: PathBuf,
    pub warning: PathBuf,
}

impl CrossCheckPaths {
    fn create_writers(&self) -> Result<CrossCheckWriters<BufWriter<File>>, CrossCheckError> {
        Ok(CrossCheckWriters {
            primary: BufWriter::new(File::create(&self.primary)?),
            unmatched: BufWriter::new(File::create(&self.unmatched)?),
            non_warning: BufWriter::new(File::create(&self.non_warning)?),
            warning: BufWriter::new(File::create(&self.warning)?),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CrossCheckSummary {
    pub headers: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub warnings: usize,
    pub non_warnings: usize,
    pub insertions: usize,
    pub deletions: usize,
}

///
/// Stream candidates through the change log and route every line.
///
pub fn cross_check<R: BufRead, W: Write>(
    changelog: &ChangeLog,
    candidates: R,
    writers: &mut CrossCheckWriters<W>,
) -> Result<CrossCheckSummary, CrossCheckError> {
    let mut summary = CrossCheckSummary::default();

    for (index, line) in candidates.lines().enumerate() {
        let line = line?;

        match classify_candidate(&line, index + 1, changelog)? {
            Classification::Header => {
                writeln!(writers.primary, "{}", line)?;
                summary.headers += 1;
            }
            Classification::Blank => {}
            Classification::Unmatched => {
                writeln!(writers.unmatched, "{}", line)?;
                summary.unmatched += 1;
            }
            Classification::Matched {
                primary_row,
                change,
                warning,
            } => {
                if warning {
                    writeln!(writers.warning, "{}\t{}", line, WARNING_ANNOTATION)?;
                    summary.warnings += 1;
                } else {
                    writeln!(writers.non_warning, "{}\t{}", line, NON_WARNING_ANNOTATION)?;
                    summary.non_warnings += 1;
                }
                match change.kind {
                    IndelKind::Insertion => summary.insertions += 1,
                    IndelKind::Deletion => summary.deletions += 1,
                }
                writeln!(writers.primary, "{}", primary_row)?;
                summary.matched += 1;
            }
        }
    }

    Ok(summary)
}

///
/// Cross-check a candidate list file against a Pilon change-log bed file.
///
/// # Arguments:
/// - changes: the bed-formatted Pilon change log
/// - candidates: the candidate-correction list
/// - outputs: where the four outputs go; every file is truncated first
///
pub fn cross_check_files(
    changes: &Path,
    candidates: &Path,
    outputs: &CrossCheckPaths,
) -> Result<CrossCheckSummary, CrossCheckError> {
    let changelog = ChangeLog::from_file(changes)?;

    info!("Cross-checking candidates from {:?}", candidates);
    let reader = get_dynamic_reader(candidates)?;
    let mut writers = outputs.create_writers()?;

    let summary = cross_check(&changelog, reader, &mut writers)?;
    writers.flush()?;

    info!(
        "{} candidates already corrected by Pilon ({} with warnings), {} not found",
        summary.matched, summary.warnings, summary.unmatched
    );

    Ok(summary)
}
