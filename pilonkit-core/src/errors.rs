use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordParseError {
    #[error("Line {line}: expected at least {expected} columns, found {found}: {text:?}")]
    MissingColumns {
        line: usize,
        expected: usize,
        found: usize,
        text: String,
    },

    #[error("Line {line}: column {column} is not a valid integer: {value:?}")]
    InvalidInteger {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Line {line}: column {column} is not a valid number: {value:?}")]
    InvalidNumber {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Line {line}: 1-based coordinate can't be zero")]
    ZeroCoordinate { line: usize },

    #[error("Line {line}: unknown homopolymer base code: {value:?}")]
    UnknownBase { line: usize, value: String },

    #[error("Line {line}: coverage values found before any variableStep declaration")]
    OrphanCoverageLine { line: usize },

    #[error("Line {line}: malformed variableStep declaration: {text:?}")]
    MalformedStep { line: usize, text: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
