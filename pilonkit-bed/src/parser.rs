use pilonkit_core::consts::{INSERTION_REF_SENTINEL, MISSING_VALUE};

use crate::consts::{CHANGE_LINE_MIN_TOKENS, RANGE_SEPARATOR, TOKEN_SEPARATORS};
use crate::errors::BedConvertError;

const NUCLEOTIDE_CODES: &[u8] = b"ACGTURYSWKMBDHVN";

///
/// A single coordinate or a `start-end` range, kept as the raw text.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate<'a> {
    pub start: &'a str,
    pub end: Option<&'a str>,
}

impl<'a> Coordinate<'a> {
    /// Split at the first dash, if there is one.
    pub fn parse(token: &'a str) -> Self {
        match token.split_once(RANGE_SEPARATOR) {
            Some((start, end)) => Coordinate {
                start,
                end: Some(end),
            },
            None => Coordinate {
                start: token,
                end: None,
            },
        }
    }

    pub fn is_range(&self) -> bool {
        self.end.is_some()
    }

    pub fn end_or_missing(&self) -> &'a str {
        self.end.unwrap_or(MISSING_VALUE)
    }

    fn validate(&self, line: usize) -> Result<(), BedConvertError> {
        let start = parse_coordinate(self.start, line)?;
        if let Some(end) = self.end {
            let end = parse_coordinate(end, line)?;
            if end < start {
                return Err(BedConvertError::InvertedRange { line, start, end });
            }
        }
        Ok(())
    }
}

fn parse_coordinate(value: &str, line: usize) -> Result<u64, BedConvertError> {
    match value.parse::<u64>() {
        Ok(pos) if pos > 0 => Ok(pos),
        _ => Err(BedConvertError::InvalidCoordinate {
            line,
            value: value.to_string(),
        }),
    }
}

fn validate_bases(value: &str, line: usize) -> Result<(), BedConvertError> {
    let valid = value == INSERTION_REF_SENTINEL
        || (!value.is_empty()
            && value
                .bytes()
                .all(|b| NUCLEOTIDE_CODES.contains(&b.to_ascii_uppercase())));

    if valid {
        Ok(())
    } else {
        Err(BedConvertError::InvalidBases {
            line,
            value: value.to_string(),
        })
    }
}

///
/// One line of a Pilon changes file, split into its tokens.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeLine<'a> {
    pub seq: &'a str,
    pub original: Coordinate<'a>,
    pub result: Coordinate<'a>,
    pub original_bases: &'a str,
    pub result_bases: &'a str,
}

impl<'a> ChangeLine<'a> {
    ///
    /// Split a changes line on `:` and single spaces. Only the token count is
    /// checked; values pass through untouched.
    ///
    pub fn parse(text: &'a str, line: usize) -> Result<Self, BedConvertError> {
        let tokens: Vec<&str> = text.split(TOKEN_SEPARATORS).collect();
        if tokens.len() < CHANGE_LINE_MIN_TOKENS {
            return Err(BedConvertError::MalformedLine {
                line,
                expected: CHANGE_LINE_MIN_TOKENS,
                found: tokens.len(),
                text: text.to_string(),
            });
        }

        Ok(ChangeLine {
            seq: tokens[0],
            original: Coordinate::parse(tokens[1]),
            result: Coordinate::parse(tokens[3]),
            original_bases: tokens[4],
            result_bases: tokens[5],
        })
    }

    /// Value checks used in strict mode.
    pub fn validate(&self, line: usize) -> Result<(), BedConvertError> {
        self.original.validate(line)?;
        self.result.validate(line)?;
        validate_bases(self.original_bases, line)?;
        validate_bases(self.result_bases, line)?;
        Ok(())
    }

    pub fn to_bed_row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.seq,
            self.original.start,
            self.original.end_or_missing(),
            self.result.start,
            self.result.end_or_missing(),
            self.original_bases,
            self.result_bases,
        )
    }
}
