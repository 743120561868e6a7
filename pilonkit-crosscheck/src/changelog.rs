use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use log::{info, warn};

use pilonkit_core::models::{ChangeRecord, GenomicKey};
use pilonkit_core::utils::{get_dynamic_reader, is_comment};

use crate::errors::CrossCheckError;

///
/// Pilon corrections keyed by (sequence, 0-based start).
///
#[derive(Debug, Default)]
pub struct ChangeLog {
    records: HashMap<GenomicKey, ChangeRecord>,
}

impl ChangeLog {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CrossCheckError> {
        let mut records: HashMap<GenomicKey, ChangeRecord> = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() || is_comment(&line) {
                continue;
            }

            let record =
                ChangeRecord::from_bed_line(&line, index + 1).map_err(CrossCheckError::ChangeLog)?;
            if let Some(previous) = records.insert(record.key(), record) {
                warn!(
                    "Duplicate change at {}:{}; keeping the later one",
                    previous.seq,
                    previous.start + 1
                );
            }
        }

        Ok(ChangeLog { records })
    }

    pub fn from_file(path: &Path) -> Result<Self, CrossCheckError> {
        let reader = get_dynamic_reader(path)?;
        let changelog = ChangeLog::from_reader(reader)?;
        info!("Loaded {} Pilon changes from {:?}", changelog.len(), path);
        Ok(changelog)
    }

    pub fn get(&self, key: &GenomicKey) -> Option<&ChangeRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Cursor;

    #[rstest]
    fn test_changelog_is_keyed_zero_based() {
        let bed = "#seq\tstart\n\
                   chr1\t100\tNA\t101\tNA\t.\tAT\n\
                   chr1\t200\t201\t199\tNA\tGG\t.\n";
        let changelog = ChangeLog::from_reader(Cursor::new(bed)).unwrap();

        assert_eq!(changelog.len(), 2);
        assert!(changelog.get(&GenomicKey::new("chr1", 99)).is_some());
        assert!(changelog.get(&GenomicKey::new("chr1", 100)).is_none());
        assert_eq!(
            changelog
                .get(&GenomicKey::new("chr1", 199))
                .unwrap()
                .ref_allele,
            "GG"
        );
    }

    #[rstest]
    fn test_duplicate_key_keeps_last() {
        let bed = "chr1\t100\tNA\t101\tNA\t.\tA\n\
                   chr1\t100\tNA\t101\tNA\t.\tTT\n";
        let changelog = ChangeLog::from_reader(Cursor::new(bed)).unwrap();
        assert_eq!(changelog.len(), 1);
        assert_eq!(
            changelog.get(&GenomicKey::new("chr1", 99)).unwrap().alt_allele,
            "TT"
        );
    }

    #[rstest]
    fn test_malformed_changelog_line() {
        let bed = "chr1\t100\tNA\n";
        assert!(matches!(
            ChangeLog::from_reader(Cursor::new(bed)),
            Err(CrossCheckError::ChangeLog(_))
        ));
    }
}
