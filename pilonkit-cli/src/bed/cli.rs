use clap::{Arg, ArgAction, Command, arg};

pub use pilonkit_bed::consts::BED_CMD;

pub fn create_bed_cli() -> Command {
    Command::new(BED_CMD)
        .about("Convert a Pilon changes file into a tab-delimited bed table.")
        .arg(
            Arg::new("changes")
                .required(true)
                .help("Path to the Pilon .changes file"),
        )
        .arg(
            arg!(--output <output>)
                .required(false)
                .help("Output path (default: <changes>.bed)"),
        )
        .arg(
            arg!(--strict)
                .action(ArgAction::SetTrue)
                .help("Validate coordinates and bases instead of passing them through"),
        )
}
