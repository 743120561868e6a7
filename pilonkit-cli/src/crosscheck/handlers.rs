use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use pilonkit_crosscheck::{CrossCheckPaths, cross_check_files};

fn path_arg(matches: &ArgMatches, name: &str) -> PathBuf {
    PathBuf::from(
        matches
            .get_one::<String>(name)
            .expect("All cross-check paths are required."),
    )
}

pub fn run_crosscheck(matches: &ArgMatches) -> Result<()> {
    let changes = path_arg(matches, "changes");
    let candidates = path_arg(matches, "candidates");

    let outputs = CrossCheckPaths {
        primary: path_arg(matches, "primary"),
        unmatched: path_arg(matches, "unmatched"),
        non_warning: path_arg(matches, "non_warning"),
        warning: path_arg(matches, "warning"),
    };

    let summary = cross_check_files(&changes, &candidates, &outputs)
        .with_context(|| {
            format!(
                "Failed to cross-check {:?} against {:?}",
                candidates, changes
            )
        })?;

    if matches.get_flag("json") {
        let json =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary to JSON")?;
        println!("{}", json);
    }

    Ok(())
}
