use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use log::{info, warn};

use pilonkit_core::RecordParseError;
use pilonkit_core::models::GenomicKey;
use pilonkit_core::utils::{TabFields, get_dynamic_reader, is_comment};

use crate::consts::{INDEL_CHANGE_COLUMN, INDEL_MIN_COLUMNS};
use crate::errors::CombineError;

///
/// Indel positions and their change strings, kept sorted by (sequence, position).
///
#[derive(Debug, Default)]
pub struct IndelTable {
    changes: BTreeMap<GenomicKey, String>,
}

impl IndelTable {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, RecordParseError> {
        let mut changes: BTreeMap<GenomicKey, String> = BTreeMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() || is_comment(&line) {
                continue;
            }

            let fields = TabFields::with_min_columns(&line, index + 1, INDEL_MIN_COLUMNS)?;
            let key = GenomicKey::new(fields.get(0)?, fields.integer(1)?);
            let change = fields.get(INDEL_CHANGE_COLUMN)?.to_string();

            if changes.insert(key.clone(), change).is_some() {
                warn!("Duplicate indel at {}; keeping the later one", key);
            }
        }

        Ok(IndelTable { changes })
    }

    pub fn from_file(path: &Path) -> Result<Self, CombineError> {
        info!("Reading indel positions from {:?}", path);
        let reader = get_dynamic_reader(path)?;
        let table = IndelTable::from_reader(reader).map_err(|source| CombineError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Number of indels: {}", table.len());
        Ok(table)
    }

    /// Indels in (sequence, position) order.
    pub fn iter(&self) -> impl Iterator<Item = (&GenomicKey, &str)> {
        self.changes.iter().map(|(key, change)| (key, change.as_str()))
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
