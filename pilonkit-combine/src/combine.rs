use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use serde::Serialize;

use pilonkit_core::consts::MISSING_VALUE;
use pilonkit_core::models::{Base, GenomicKey, IndelKind, Platform};

use crate::consts::{COVERAGE_FILE_NAME, COVERAGE_HEADER, REPORT_HEADER, STATS_FILE_NAME};
use crate::coverage::CoverageTable;
use crate::errors::CombineError;
use crate::homopolymer::HomopolymerTable;
use crate::indels::IndelTable;
use crate::manifest::Manifest;
use crate::stats::{CombineStats, HomopolymerTally};

///
/// What to do with an indel whose coverage is missing or zero on either platform.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinMissPolicy {
    /// Abort the run.
    #[default]
    Fail,
    /// Log a warning and leave the indel out of every output.
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CombineOptions {
    pub join_miss: JoinMissPolicy,
    /// Show a spinner on stderr during the merge.
    pub progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformEvidence {
    pub coverage: f64,
    pub fraction: f64,
}

/// A homopolymer run starting at an indel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomopolymerHit {
    pub base: Base,
    pub length: u64,
}

///
/// One row of the unified report.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRow {
    pub key: GenomicKey,
    pub change: String,
    pub illumina: PlatformEvidence,
    pub pacbio: PlatformEvidence,
    pub homopolymer: Option<HomopolymerHit>,
}

impl CombinedRow {
    ///
    /// Tab-separated report row. Coverage values and fractions always carry a
    /// decimal point (`20.0`, `1.0`), the form downstream plotting expects.
    ///
    pub fn report_line(&self) -> String {
        let (in_homopolymer, base, length) = match &self.homopolymer {
            Some(hit) => ("YES", hit.base.to_string(), hit.length.to_string()),
            None => ("NO", MISSING_VALUE.to_string(), MISSING_VALUE.to_string()),
        };
        format!(
            "{}\t{}\t{}\t{:?}\t{:?}\t{:?}\t{:?}\t{}\t{}\t{}",
            self.key.seq,
            self.key.pos,
            self.change,
            self.illumina.coverage,
            self.illumina.fraction,
            self.pacbio.coverage,
            self.pacbio.fraction,
            in_homopolymer,
            base,
            length,
        )
    }

    /// Long-form coverage rows, Illumina first.
    pub fn coverage_lines(&self) -> [String; 2] {
        [
            (Platform::Illumina, &self.illumina),
            (Platform::PacBio, &self.pacbio),
        ]
        .map(|(platform, evidence)| {
            format!(
                "{}\t{}\t{:?}\t{:?}\t{}",
                self.key.seq, self.key.pos, evidence.coverage, evidence.fraction, platform
            )
        })
    }
}

///
/// Clamp both fractions to exactly 1 as soon as either exceeds 1. Count dumps
/// occasionally report more indel reads than covering reads.
///
pub fn clamp_fractions(illumina: f64, pacbio: f64) -> (f64, f64) {
    if illumina > 1.0 || pacbio > 1.0 {
        (1.0, 1.0)
    } else {
        (illumina, pacbio)
    }
}

fn platform_evidence(
    table: &CoverageTable,
    lookup: &GenomicKey,
    kind: IndelKind,
) -> Result<PlatformEvidence, CombineError> {
    let record = table
        .get(lookup)
        .ok_or_else(|| CombineError::MissingCoverage {
            platform: table.platform,
            key: lookup.clone(),
        })?;
    let fraction = record
        .fraction(kind)
        .ok_or_else(|| CombineError::ZeroCoverage {
            platform: table.platform,
            key: lookup.clone(),
        })?;

    Ok(PlatformEvidence {
        coverage: record.total,
        fraction,
    })
}

///
/// The four tables a combine run joins.
///
#[derive(Debug)]
pub struct CombineInputs {
    pub indels: IndelTable,
    pub illumina: CoverageTable,
    pub pacbio: CoverageTable,
    pub homopolymers: HomopolymerTable,
}

impl CombineInputs {
    pub fn load(manifest: &Manifest) -> Result<Self, CombineError> {
        Ok(CombineInputs {
            indels: IndelTable::from_file(&manifest.indels)?,
            illumina: CoverageTable::from_file(Platform::Illumina, &manifest.illumina_coverage)?,
            pacbio: CoverageTable::from_file(Platform::PacBio, &manifest.pacbio_coverage)?,
            homopolymers: HomopolymerTable::from_file(&manifest.homopolymers)?,
        })
    }

    ///
    /// Join one indel against the coverage and homopolymer tables.
    ///
    /// A deletion is anchored on the base before the deleted one, so its
    /// coverage and deletion count are read one position downstream. The row
    /// keeps the indel's own position, which is also where a homopolymer
    /// run must start to count.
    ///
    pub fn process_indel(&self, key: &GenomicKey, change: &str) -> Result<CombinedRow, CombineError> {
        let kind = IndelKind::from_change_str(change);
        let lookup = match kind {
            IndelKind::Deletion => key.next(),
            IndelKind::Insertion => key.clone(),
        };

        let mut illumina = platform_evidence(&self.illumina, &lookup, kind)?;
        let mut pacbio = platform_evidence(&self.pacbio, &lookup, kind)?;
        (illumina.fraction, pacbio.fraction) = clamp_fractions(illumina.fraction, pacbio.fraction);

        let homopolymer = self
            .homopolymers
            .starting_at(key)
            .map(|run| HomopolymerHit {
                base: run.base,
                length: run.length,
            });

        Ok(CombinedRow {
            key: key.clone(),
            change: change.to_string(),
            illumina,
            pacbio,
            homopolymer,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CombineOutputs {
    pub report: PathBuf,
    pub coverage: PathBuf,
    pub stats: PathBuf,
}

impl CombineOutputs {
    /// Place the fixed-name coverage and statistics files next to the report.
    pub fn beside(report: &Path) -> Self {
        let dir = report.parent().unwrap_or_else(|| Path::new(""));
        CombineOutputs {
            report: report.to_path_buf(),
            coverage: dir.join(COVERAGE_FILE_NAME),
            stats: dir.join(STATS_FILE_NAME),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombineSummary {
    pub rows_written: usize,
    pub rows_skipped: usize,
    pub stats: CombineStats,
}

///
/// Write the unified report and the long-form coverage table, then compute
/// the homopolymer statistics.
///
pub fn combine<W: Write>(
    inputs: &CombineInputs,
    report: &mut W,
    coverage: &mut W,
    options: CombineOptions,
) -> Result<CombineSummary, CombineError> {
    writeln!(report, "{}", REPORT_HEADER)?;
    writeln!(coverage, "{}", COVERAGE_HEADER)?;

    let spinner = if options.progress {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg} ({per_sec})")?
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message("Merging indel information...");

    let mut tally = HomopolymerTally::default();
    let mut rows_written: usize = 0;
    let mut rows_skipped: usize = 0;

    for (key, change) in inputs.indels.iter() {
        let row = match inputs.process_indel(key, change) {
            Ok(row) => row,
            Err(err) if err.is_join_miss() && options.join_miss == JoinMissPolicy::Skip => {
                warn!("Skipping indel at {}: {}", key, err);
                rows_skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        for line in row.coverage_lines() {
            writeln!(coverage, "{}", line)?;
        }
        if let Some(hit) = &row.homopolymer {
            tally.record(hit.base);
        }
        writeln!(report, "{}", row.report_line())?;

        rows_written += 1;
        spinner.inc(1);
    }

    spinner.finish_with_message("Done!");

    let stats = CombineStats::compute(
        &inputs.homopolymers.base_totals(),
        inputs.indels.len() as u64,
        &tally,
    )?;

    Ok(CombineSummary {
        rows_written,
        rows_skipped,
        stats,
    })
}

///
/// Run a full combine from a manifest file.
///
/// # Arguments:
/// - manifest: path to the `kind \t path` manifest
/// - outputs: where the report, coverage table, and statistics go
/// - options: join-miss policy and progress display
///
pub fn combine_files(
    manifest: &Path,
    outputs: &CombineOutputs,
    options: CombineOptions,
) -> Result<CombineSummary, CombineError> {
    let manifest = Manifest::from_file(manifest)?;
    let inputs = CombineInputs::load(&manifest)?;

    let mut report = BufWriter::new(File::create(&outputs.report)?);
    let mut coverage = BufWriter::new(File::create(&outputs.coverage)?);

    info!("Merging all information and calculating basic stats");
    let summary = combine(&inputs, &mut report, &mut coverage, options)?;
    report.flush()?;
    coverage.flush()?;

    let mut stats = BufWriter::new(File::create(&outputs.stats)?);
    summary.stats.write_tsv(&mut stats)?;
    stats.flush()?;

    info!(
        "Output files generated: {:?}, {:?}, {:?}",
        outputs.report, outputs.coverage, outputs.stats
    );

    Ok(summary)
}
