use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use pilonkit_bed::{BedConvertOptions, convert_changes_file, default_output_path};

pub fn run_bed(matches: &ArgMatches) -> Result<()> {
    let changes = matches
        .get_one::<String>("changes")
        .expect("A path to a Pilon changes file is required.");
    let changes = Path::new(changes);

    let output = match matches.get_one::<String>("output") {
        Some(output) => PathBuf::from(output),
        None => default_output_path(changes),
    };

    let options = BedConvertOptions {
        strict: matches.get_flag("strict"),
    };

    convert_changes_file(changes, &output, options)
        .with_context(|| format!("Failed to convert Pilon changes file: {:?}", changes))?;

    Ok(())
}
