use clap::{Arg, ArgAction, Command, arg};

pub use pilonkit_combine::consts::COMBINE_CMD;

pub fn create_combine_cli() -> Command {
    Command::new(COMBINE_CMD)
        .about("Combine indel, coverage, and homopolymer information into one report plus statistics.")
        .long_about(
            "Combine indel, coverage, and homopolymer information into one report plus statistics.\n\n\
             The manifest is a tab-separated list of `<kind>\\t<path>` rows with kinds:\n\
             Indels, Illumina_coverage, PacBio_coverage, Homopolymers_file, GCSkew_file.\n\n\
             tempcoverage.txt and stats.txt are written next to the output report.",
        )
        .arg(
            Arg::new("manifest")
                .required(true)
                .help("Tab-separated list of input files"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .help("Path of the unified report"),
        )
        .arg(
            Arg::new("skip-missing")
                .long("skip-missing")
                .action(ArgAction::SetTrue)
                .help("Skip indels without usable coverage instead of failing"),
        )
        .arg(
            arg!(--progress)
                .action(ArgAction::SetTrue)
                .help("Show a progress spinner while merging"),
        )
        .arg(
            arg!(--json)
                .action(ArgAction::SetTrue)
                .help("Print a JSON summary to stdout"),
        )
}
