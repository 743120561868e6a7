use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use log::{info, warn};

use pilonkit_core::RecordParseError;
use pilonkit_core::models::{GenomicKey, HomopolymerRecord};
use pilonkit_core::utils::get_dynamic_reader;

use crate::errors::CombineError;
use crate::stats::BaseCounts;

///
/// Homopolymer runs keyed by their 0-based start.
///
#[derive(Debug, Default)]
pub struct HomopolymerTable {
    records: HashMap<GenomicKey, HomopolymerRecord>,
}

impl HomopolymerTable {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, RecordParseError> {
        let mut records: HashMap<GenomicKey, HomopolymerRecord> = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() || HomopolymerRecord::is_header(&line) {
                continue;
            }

            let record = HomopolymerRecord::from_line(&line, index + 1)?;
            let key = record.key();
            if records.insert(key.clone(), record).is_some() {
                warn!("Two homopolymers start at {}; keeping the later one", key);
            }
        }

        Ok(HomopolymerTable { records })
    }

    pub fn from_file(path: &Path) -> Result<Self, CombineError> {
        info!("Reading homopolymer information from {:?}", path);
        let reader = get_dynamic_reader(path)?;
        let table = HomopolymerTable::from_reader(reader).map_err(|source| CombineError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Number of homopolymers: {}", table.len());
        Ok(table)
    }

    /// The run starting exactly at `key`, if any.
    pub fn starting_at(&self, key: &GenomicKey) -> Option<&HomopolymerRecord> {
        self.records.get(key)
    }

    /// Number of runs per repeated base.
    pub fn base_totals(&self) -> BaseCounts {
        let mut totals = BaseCounts::default();
        for record in self.records.values() {
            totals.add(record.base);
        }
        totals
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
    use pilonkit_core::models::Base;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Cursor;

    #[fixture]
    fn table() -> HomopolymerTable {
        let text = "seqID\tstart\tend\tsize\tbase\tx\tlength\n\
                    chr1\t51\t56\t6\tAs\tx\t6\n\
                    chr1\t101\t104\t4\tCs\tx\t4\n\
                    chr2\t11\t15\t5\tAs\tx\t5\n";
        HomopolymerTable::from_reader(Cursor::new(text)).unwrap()
    }

    #[rstest]
    fn test_homopolymer_lookup_is_zero_based(table: HomopolymerTable) {
        assert_eq!(table.len(), 3);
        let run = table.starting_at(&GenomicKey::new("chr1", 50)).unwrap();
        assert_eq!(run.base, Base::A);
        assert_eq!(run.length, 6);
        assert!(table.starting_at(&GenomicKey::new("chr1", 51)).is_none());
    }

    #[rstest]
    fn test_base_totals(table: HomopolymerTable) {
        let totals = table.base_totals();
        assert_eq!(totals.get(Base::A), 2);
        assert_eq!(totals.get(Base::C), 1);
        assert_eq!(totals.get(Base::G), 0);
        assert_eq!(totals.total(), 3);
    }
}
