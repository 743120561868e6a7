use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use pilonkit_combine::{CombineOptions, CombineOutputs, JoinMissPolicy, combine_files};

pub fn run_combine(matches: &ArgMatches) -> Result<()> {
    let manifest = matches
        .get_one::<String>("manifest")
        .expect("A path to the file list is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");

    let join_miss = if matches.get_flag("skip-missing") {
        JoinMissPolicy::Skip
    } else {
        JoinMissPolicy::Fail
    };

    let options = CombineOptions {
        join_miss,
        progress: matches.get_flag("progress"),
    };

    let outputs = CombineOutputs::beside(Path::new(output));
    let summary = combine_files(Path::new(manifest), &outputs, options)
        .with_context(|| format!("Failed to combine files listed in {:?}", manifest))?;

    if matches.get_flag("json") {
        let json =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary to JSON")?;
        println!("{}", json);
    }

    Ok(())
}
