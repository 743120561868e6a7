use clap::{Arg, ArgAction, Command, arg};

pub use pilonkit_crosscheck::consts::CROSSCHECK_CMD;

pub fn create_crosscheck_cli() -> Command {
    Command::new(CROSSCHECK_CMD)
        .about("Check correction candidates against the changes Pilon already made.")
        .arg(
            Arg::new("changes")
                .required(true)
                .help("Pilon changes in bed format (see `pilonkit bed`)"),
        )
        .arg(
            Arg::new("candidates")
                .required(true)
                .help("Candidate corrections to check"),
        )
        .arg(
            Arg::new("primary")
                .required(true)
                .help("Output: candidates Pilon also corrected, with the change spliced in"),
        )
        .arg(
            Arg::new("unmatched")
                .required(true)
                .help("Output: candidates Pilon did not correct"),
        )
        .arg(
            Arg::new("non_warning")
                .required(true)
                .help("Output: corrected candidates without a haplotype"),
        )
        .arg(
            Arg::new("warning")
                .required(true)
                .help("Output: corrected candidates with a haplotype"),
        )
        .arg(
            arg!(--json)
                .action(ArgAction::SetTrue)
                .help("Print a JSON summary to stdout"),
        )
}
