use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::RecordParseError;
use crate::models::key::GenomicKey;
use crate::utils::TabFields;

pub const HOMOPOLYMER_MIN_COLUMNS: usize = 7;
pub const HOMOPOLYMER_HEADER_MARKER: &str = "seqID";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    A,
    T,
    C,
    G,
}

impl Base {
    /// Report order used by the statistics table.
    pub const REPORT_ORDER: [Base; 4] = [Base::A, Base::T, Base::G, Base::C];
}

impl FromStr for Base {
    type Err = String;

    /// Accepts the pluralised run code (`As`, `Ts`, ...) or the bare letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "As" | "A" => Ok(Base::A),
            "Ts" | "T" => Ok(Base::T),
            "Cs" | "C" => Ok(Base::C),
            "Gs" | "G" => Ok(Base::G),
            _ => Err(format!("Unknown base code: {}", s)),
        }
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Base::A => "A",
            Base::T => "T",
            Base::C => "C",
            Base::G => "G",
        };
        write!(f, "{}", letter)
    }
}

///
/// A homopolymer run. Coordinates are stored 0-based.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomopolymerRecord {
    pub seq: String,
    pub start: u64,
    pub end: u64,
    pub base: Base,
    pub length: u64,
}

impl HomopolymerRecord {
    pub fn is_header(line: &str) -> bool {
        line.contains(HOMOPOLYMER_HEADER_MARKER)
    }

    ///
    /// Parse one row of the homopolymer table:
    /// `seq, start (1-based), end (1-based), _, base code, _, run length`.
    ///
    pub fn from_line(text: &str, line: usize) -> Result<Self, RecordParseError> {
        let fields = TabFields::with_min_columns(text, line, HOMOPOLYMER_MIN_COLUMNS)?;
        let code = fields.get(4)?;
        let base = code
            .parse::<Base>()
            .map_err(|_| RecordParseError::UnknownBase {
                line,
                value: code.to_string(),
            })?;

        Ok(HomopolymerRecord {
            seq: fields.get(0)?.to_string(),
            start: fields.one_based_position(1)?,
            end: fields.one_based_position(2)?,
            base,
            length: fields.integer(6)?,
        })
    }

    pub fn key(&self) -> GenomicKey {
        GenomicKey::new(self.seq.clone(), self.start)
    }
}
