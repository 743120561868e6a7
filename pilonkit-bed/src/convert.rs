use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use pilonkit_core::utils::get_dynamic_reader;

use crate::consts::BED_SUFFIX;
use crate::errors::BedConvertError;
use crate::parser::ChangeLine;

#[derive(Debug, Clone, Copy, Default)]
pub struct BedConvertOptions {
    /// Validate coordinates and bases, not just the token count.
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub converted: usize,
    pub ranges: usize,
    pub blank: usize,
}

///
/// The default output path: the input path with `.bed` appended.
///
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(BED_SUFFIX);
    PathBuf::from(name)
}

///
/// Convert every line of a changes stream into a bed row.
///
/// Blank lines are skipped. Any line with too few tokens aborts the run; in
/// strict mode so does any line whose coordinates or bases don't validate.
///
pub fn convert_changes<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: BedConvertOptions,
) -> Result<ConversionSummary, BedConvertError> {
    let mut summary = ConversionSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        if line.is_empty() {
            summary.blank += 1;
            continue;
        }

        let change = ChangeLine::parse(&line, line_no)?;
        if options.strict {
            change.validate(line_no)?;
        }

        if change.original.is_range() || change.result.is_range() {
            summary.ranges += 1;
        }

        writeln!(writer, "{}", change.to_bed_row())?;
        summary.converted += 1;
    }

    Ok(summary)
}

///
/// Convert a Pilon changes file (optionally gzip'd) into a bed table on disk.
///
/// # Arguments:
/// - input: path to the Pilon changes file
/// - output: path to the bed file to create (truncated if it exists)
/// - options: conversion options
///
pub fn convert_changes_file(
    input: &Path,
    output: &Path,
    options: BedConvertOptions,
) -> Result<ConversionSummary, BedConvertError> {
    info!("Opening and reading {:?} as Pilon changes file", input);
    let reader = get_dynamic_reader(input)?;

    let mut writer = BufWriter::new(File::create(output)?);
    let summary = convert_changes(reader, &mut writer, options)?;
    writer.flush()?;

    info!(
        "Converted {} changes ({} ranges) into {:?}",
        summary.converted, summary.ranges, output
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Cursor;

    #[fixture]
    fn changes() -> &'static str {
        "chr1:100 chr1_pilon:105 A C\n\
         chr1:200-202 chr1_pilon:205 ACG .\n\
         \n\
         chr2:7 chr2_pilon:9-10 . TT\n"
    }

    #[rstest]
    fn test_convert_changes(changes: &str) {
        let mut out: Vec<u8> = Vec::new();
        let summary =
            convert_changes(Cursor::new(changes), &mut out, BedConvertOptions::default()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "chr1\t100\tNA\t105\tNA\tA\tC\n\
             chr1\t200\t202\t205\tNA\tACG\t.\n\
             chr2\t7\tNA\t9\t10\t.\tTT\n"
        );
        assert_eq!(
            summary,
            ConversionSummary {
                converted: 3,
                ranges: 2,
                blank: 1
            }
        );
    }

    #[rstest]
    fn test_strict_mode_reports_line_number() {
        let input = "chr1:100 chr1_pilon:105 A C\nchr1:x chr1_pilon:105 A C\n";
        let mut out: Vec<u8> = Vec::new();
        let res = convert_changes(
            Cursor::new(input),
            &mut out,
            BedConvertOptions { strict: true },
        );
        assert!(matches!(
            res,
            Err(BedConvertError::InvalidCoordinate { line: 2, .. })
        ));
    }

    #[rstest]
    fn test_lenient_mode_passes_values_through() {
        let input = "chr1:x chr1_pilon:105 A C\n";
        let mut out: Vec<u8> = Vec::new();
        convert_changes(Cursor::new(input), &mut out, BedConvertOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "chr1\tx\tNA\t105\tNA\tA\tC\n");
    }

    #[rstest]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/pilon.changes")),
            PathBuf::from("/data/pilon.changes.bed")
        );
    }
}
