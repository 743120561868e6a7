use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::consts::COMMENT_MARKER;
use crate::errors::RecordParseError;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to open file {:?}: {}", path, e))
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// True for header/comment lines, i.e. lines starting with `#`.
pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER)
}

///
/// The tab-separated columns of one input line, remembering the 1-based
/// line number so every accessor can produce a located error.
///
#[derive(Debug, Clone)]
pub struct TabFields<'a> {
    pub line: usize,
    pub text: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> TabFields<'a> {
    pub fn new(text: &'a str, line: usize) -> Self {
        TabFields {
            line,
            text,
            fields: text.split('\t').collect(),
        }
    }

    /// Split the line and fail unless it has at least `n` columns.
    pub fn with_min_columns(text: &'a str, line: usize, n: usize) -> Result<Self, RecordParseError> {
        let fields = TabFields::new(text, line);
        if fields.len() < n {
            return Err(RecordParseError::MissingColumns {
                line,
                expected: n,
                found: fields.len(),
                text: text.to_string(),
            });
        }
        Ok(fields)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, column: usize) -> Result<&'a str, RecordParseError> {
        self.fields
            .get(column)
            .copied()
            .ok_or_else(|| RecordParseError::MissingColumns {
                line: self.line,
                expected: column + 1,
                found: self.fields.len(),
                text: self.text.to_string(),
            })
    }

    pub fn integer(&self, column: usize) -> Result<u64, RecordParseError> {
        let value = self.get(column)?;
        value
            .trim()
            .parse::<u64>()
            .map_err(|_| RecordParseError::InvalidInteger {
                line: self.line,
                column,
                value: value.to_string(),
            })
    }

    pub fn number(&self, column: usize) -> Result<f64, RecordParseError> {
        let value = self.get(column)?;
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| RecordParseError::InvalidNumber {
                line: self.line,
                column,
                value: value.to_string(),
            })
    }

    /// Read a 1-based coordinate and shift it to 0-based.
    pub fn one_based_position(&self, column: usize) -> Result<u64, RecordParseError> {
        let pos = self.integer(column)?;
        pos.checked_sub(1)
            .ok_or(RecordParseError::ZeroCoordinate { line: self.line })
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> {
        self.fields.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::{BufRead, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;

    #[rstest]
    #[case("#header", true)]
    #[case("chr1\t10", false)]
    #[case("chr1#\t10", false)]
    #[case("", false)]
    fn test_is_comment(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_comment(line), expected);
    }

    #[rstest]
    fn test_tab_fields_accessors() {
        let fields = TabFields::new("chr1\t100\t2.5\tx", 3);
        assert_eq!(fields.len(), 4);
        assert_eq!(fields.get(0).unwrap(), "chr1");
        assert_eq!(fields.integer(1).unwrap(), 100);
        assert_eq!(fields.number(2).unwrap(), 2.5);
        assert_eq!(fields.one_based_position(1).unwrap(), 99);
    }

    #[rstest]
    fn test_tab_fields_errors_carry_line_number() {
        let fields = TabFields::new("chr1\tabc", 7);
        match fields.integer(1) {
            Err(RecordParseError::InvalidInteger { line, column, value }) => {
                assert_eq!(line, 7);
                assert_eq!(column, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            fields.get(5),
            Err(RecordParseError::MissingColumns { line: 7, .. })
        ));
    }

    #[rstest]
    fn test_zero_one_based_coordinate_is_rejected() {
        let fields = TabFields::new("chr1\t0", 1);
        assert!(matches!(
            fields.one_based_position(1),
            Err(RecordParseError::ZeroCoordinate { line: 1 })
        ));
    }

    #[rstest]
    fn test_min_columns() {
        assert!(TabFields::with_min_columns("a\tb\tc", 1, 3).is_ok());
        assert!(TabFields::with_min_columns("a\tb", 1, 3).is_err());
    }

    #[rstest]
    fn test_dynamic_reader_reads_gzip_and_plain() {
        let dir = tempfile::tempdir().unwrap();

        let plain = dir.path().join("data.txt");
        std::fs::write(&plain, "line1\nline2\n").unwrap();

        let gz = dir.path().join("data.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(b"line1\nline2\n").unwrap();
        encoder.finish().unwrap();

        let plain_lines: Vec<String> = get_dynamic_reader(&plain)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();
        let gz_lines: Vec<String> = get_dynamic_reader(&gz)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();

        assert_eq!(plain_lines, vec!["line1", "line2"]);
        assert_eq!(gz_lines, plain_lines);
    }
}
