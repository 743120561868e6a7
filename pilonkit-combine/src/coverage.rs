use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use log::{debug, info, warn};

use pilonkit_core::RecordParseError;
use pilonkit_core::models::{CoverageRecord, GenomicKey, Platform};
use pilonkit_core::utils::{get_dynamic_reader, is_comment};

use crate::consts::{CHROM_ATTRIBUTE, TRACK_MARKER, VARIABLE_STEP_MARKER};
use crate::errors::CombineError;

///
/// Per-position coverage for one sequencing platform, read from an
/// `igvtools count --bases` dump.
///
/// The dump is sparse and grouped by sequence: a `variableStep chrom=<seq>`
/// line names the sequence every following data line belongs to.
///
#[derive(Debug)]
pub struct CoverageTable {
    pub platform: Platform,
    records: HashMap<GenomicKey, CoverageRecord>,
}

fn parse_step_sequence(text: &str, line: usize) -> Result<String, RecordParseError> {
    text.split_whitespace()
        .find_map(|token| token.strip_prefix(CHROM_ATTRIBUTE))
        .filter(|seq| !seq.is_empty())
        .map(str::to_string)
        .ok_or_else(|| RecordParseError::MalformedStep {
            line,
            text: text.to_string(),
        })
}

impl CoverageTable {
    pub fn from_reader<R: BufRead>(platform: Platform, reader: R) -> Result<Self, RecordParseError> {
        let mut records: HashMap<GenomicKey, CoverageRecord> = HashMap::new();
        let mut current_seq: Option<String> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;

            if line.is_empty() || is_comment(&line) || line.contains(TRACK_MARKER) {
                continue;
            }

            if line.contains(VARIABLE_STEP_MARKER) {
                let seq = parse_step_sequence(&line, line_no)?;
                debug!("Parsing {} coverage for {}", platform, seq);
                current_seq = Some(seq);
                continue;
            }

            let seq = current_seq
                .as_deref()
                .ok_or(RecordParseError::OrphanCoverageLine { line: line_no })?;
            let (pos, record) = CoverageRecord::from_count_line(&line, line_no)?;
            let key = GenomicKey::new(seq, pos);
            if records.insert(key.clone(), record).is_some() {
                warn!("Duplicate {} coverage at {}; keeping the later one", platform, key);
            }
        }

        Ok(CoverageTable { platform, records })
    }

    pub fn from_file(platform: Platform, path: &Path) -> Result<Self, CombineError> {
        info!("Reading {} coverage information from {:?}", platform, path);
        let reader = get_dynamic_reader(path)?;
        CoverageTable::from_reader(platform, reader).map_err(|source| CombineError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get(&self, key: &GenomicKey) -> Option<&CoverageRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
