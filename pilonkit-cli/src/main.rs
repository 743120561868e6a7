mod bed;
mod combine;
mod crosscheck;

use anyhow::Result;
use clap::Command;
use env_logger::Env;
use log::error;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "pilonkit";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Cross-reference Pilon polishing changes with correction candidates, read coverage, and homopolymer runs.")
        .subcommand_required(true)
        .subcommand(bed::cli::create_bed_cli())
        .subcommand(crosscheck::cli::create_crosscheck_cli())
        .subcommand(combine::cli::create_combine_cli())
}

fn run() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // PILON CHANGES TO BED
        //
        Some((bed::cli::BED_CMD, matches)) => {
            bed::handlers::run_bed(matches)?;
        }

        //
        // CANDIDATE CROSS-CHECK
        //
        Some((crosscheck::cli::CROSSCHECK_CMD, matches)) => {
            crosscheck::handlers::run_crosscheck(matches)?;
        }

        //
        // COMBINE INDEL INFORMATION
        //
        Some((combine::cli::COMBINE_CMD, matches)) => {
            combine::handlers::run_combine(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        error!("{:#}", err);
        std::process::exit(1);
    }
}
