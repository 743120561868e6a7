use crate::errors::RecordParseError;
use crate::models::change::IndelChange;
use crate::models::key::GenomicKey;
use crate::utils::TabFields;

pub const HAPLOTYPE_COLUMN: usize = 8;
pub const CANDIDATE_MIN_COLUMNS: usize = HAPLOTYPE_COLUMN + 1;
/// Columns 9 and 10 are carried into the primary row of a matched candidate.
pub const MATCHED_CANDIDATE_COLUMNS: usize = 11;

///
/// One line of a correction-candidate list. The record borrows the raw line;
/// candidates are classified as they stream past and never stored.
///
/// The position is used as given, no coordinate shift is applied.
///
#[derive(Debug, Clone)]
pub struct CandidateRecord<'a> {
    pub seq: &'a str,
    pub pos: u64,
    fields: TabFields<'a>,
}

impl<'a> CandidateRecord<'a> {
    pub fn parse(text: &'a str, line: usize) -> Result<Self, RecordParseError> {
        let fields = TabFields::with_min_columns(text, line, CANDIDATE_MIN_COLUMNS)?;
        Ok(CandidateRecord {
            seq: fields.get(0)?,
            pos: fields.integer(1)?,
            fields,
        })
    }

    pub fn key(&self) -> GenomicKey {
        GenomicKey::new(self.seq, self.pos)
    }

    /// The raw line, without its trailing newline.
    pub fn raw(&self) -> &'a str {
        self.fields.text
    }

    /// The haplotype annotation, `None` when the column is empty.
    pub fn haplotype(&self) -> Option<&'a str> {
        self.fields
            .get(HAPLOTYPE_COLUMN)
            .ok()
            .filter(|h| !h.is_empty())
    }

    pub fn has_haplotype(&self) -> bool {
        self.haplotype().is_some()
    }

    ///
    /// Render the candidate with a known change spliced in: columns 0-6 of the
    /// candidate, the signed change length, the change string, then columns
    /// 9 and 10. Only this step needs the full eleven columns.
    ///
    pub fn with_change(&self, change: &IndelChange) -> Result<String, RecordParseError> {
        if self.fields.len() < MATCHED_CANDIDATE_COLUMNS {
            return Err(RecordParseError::MissingColumns {
                line: self.fields.line,
                expected: MATCHED_CANDIDATE_COLUMNS,
                found: self.fields.len(),
                text: self.fields.text.to_string(),
            });
        }

        let mut columns: Vec<String> = Vec::with_capacity(MATCHED_CANDIDATE_COLUMNS);
        columns.push(self.seq.to_string());
        columns.push(self.pos.to_string());
        columns.extend(self.fields.iter().skip(2).take(5).map(str::to_string));
        columns.push(change.signed_len().to_string());
        columns.push(change.to_string());
        columns.extend(self.fields.iter().skip(9).take(2).map(str::to_string));
        Ok(columns.join("\t"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::change::IndelKind;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn candidate_line() -> &'static str {
        "chr1\t99\t100\tc3\tc4\t.\tAT\tc7\t\tc9\tc10"
    }

    #[rstest]
    fn test_parse_candidate(candidate_line: &str) {
        let candidate = CandidateRecord::parse(candidate_line, 2).unwrap();
        assert_eq!(candidate.key(), GenomicKey::new("chr1", 99));
        assert_eq!(candidate.raw(), candidate_line);
        assert_eq!(candidate.haplotype(), None);
        assert!(!candidate.has_haplotype());
    }

    #[rstest]
    fn test_haplotype_present() {
        let line = "chr1\t99\t100\tc3\tc4\t.\tAT\tc7\tA,T\tc9\tc10";
        let candidate = CandidateRecord::parse(line, 1).unwrap();
        assert_eq!(candidate.haplotype(), Some("A,T"));
    }

    #[rstest]
    fn test_with_insertion_change(candidate_line: &str) {
        let candidate = CandidateRecord::parse(candidate_line, 1).unwrap();
        let change = IndelChange {
            kind: IndelKind::Insertion,
            bases: "AT".to_string(),
        };
        assert_eq!(
            candidate.with_change(&change).unwrap(),
            "chr1\t99\t100\tc3\tc4\t.\tAT\t2\t+2AT\tc9\tc10"
        );
    }

    #[rstest]
    fn test_with_deletion_change(candidate_line: &str) {
        let candidate = CandidateRecord::parse(candidate_line, 1).unwrap();
        let change = IndelChange {
            kind: IndelKind::Deletion,
            bases: "GG".to_string(),
        };
        assert_eq!(
            candidate.with_change(&change).unwrap(),
            "chr1\t99\t100\tc3\tc4\t.\tAT\t-2\t-2GG\tc9\tc10"
        );
    }

    #[rstest]
    fn test_short_candidate_is_rejected() {
        assert!(matches!(
            CandidateRecord::parse("chr1\t99\t100", 9),
            Err(RecordParseError::MissingColumns { line: 9, expected: 9, .. })
        ));
    }

    #[rstest]
    fn test_nine_columns_parse_but_cannot_take_a_change() {
        let line = "chr1\t99\t100\tc3\tc4\t.\tAT\tc7\tA,T";
        let candidate = CandidateRecord::parse(line, 5).unwrap();
        assert_eq!(candidate.key(), GenomicKey::new("chr1", 99));
        assert_eq!(candidate.haplotype(), Some("A,T"));

        let change = IndelChange {
            kind: IndelKind::Insertion,
            bases: "AT".to_string(),
        };
        assert!(matches!(
            candidate.with_change(&change),
            Err(RecordParseError::MissingColumns { line: 5, expected: 11, found: 9, .. })
        ));
    }
}
