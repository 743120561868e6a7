use thiserror::Error;

#[derive(Error, Debug)]
pub enum BedConvertError {
    #[error("Line {line}: expected at least {expected} tokens, found {found}: {text:?}")]
    MalformedLine {
        line: usize,
        expected: usize,
        found: usize,
        text: String,
    },

    #[error("Line {line}: invalid coordinate: {value:?}")]
    InvalidCoordinate { line: usize, value: String },

    #[error("Line {line}: range end {end} comes before its start {start}")]
    InvertedRange { line: usize, start: u64, end: u64 },

    #[error("Line {line}: invalid bases: {value:?}")]
    InvalidBases { line: usize, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
