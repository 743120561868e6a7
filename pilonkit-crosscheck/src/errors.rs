use pilonkit_core::RecordParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrossCheckError {
    #[error("Error parsing change log: {0}")]
    ChangeLog(RecordParseError),

    #[error("Error parsing candidate list: {0}")]
    Candidate(RecordParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
