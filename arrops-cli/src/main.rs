mod closest;
mod complement;
mod io;
mod merge;
mod overlap;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "arrops";
    pub const VERBOSE: &str = "verbose";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Batch interval algebra on BED-like files: overlaps, merging, complements and nearest neighbors.")
        .subcommand_required(true)
        .arg(
            Arg::new(consts::VERBOSE)
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Log more (-v for info, -vv for debug). RUST_LOG takes precedence"),
        )
        .subcommand(merge::cli::create_merge_cli())
        .subcommand(complement::cli::create_complement_cli())
        .subcommand(overlap::cli::create_overlap_cli())
        .subcommand(closest::cli::create_closest_cli())
}

fn init_logging(matches: &ArgMatches) {
    let level = match matches.get_count(consts::VERBOSE) {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);

    match matches.subcommand() {
        //
        // MERGE
        //
        Some((merge::cli::MERGE_CMD, matches)) => {
            merge::handlers::run_merge(matches)?;
        }

        //
        // COMPLEMENT
        //
        Some((complement::cli::COMPLEMENT_CMD, matches)) => {
            complement::handlers::run_complement(matches)?;
        }

        //
        // OVERLAP
        //
        Some((overlap::cli::OVERLAP_CMD, matches)) => {
            overlap::handlers::run_overlap(matches)?;
        }

        //
        // CLOSEST
        //
        Some((closest::cli::CLOSEST_CMD, matches)) => {
            closest::handlers::run_closest(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
