use clap::{Arg, ArgAction, Command, arg};

pub const MERGE_CMD: &str = "merge";
pub const MIN_DIST: &str = "min-dist";
pub const OVERLAP_ONLY: &str = "overlap-only";

pub fn create_merge_cli() -> Command {
    Command::new(MERGE_CMD)
        .about("Merge overlapping and nearby intervals into clusters, per contig.")
        .arg(arg!(--input <BED> "Input BED file").required(true))
        .arg(
            Arg::new(MIN_DIST)
                .long(MIN_DIST)
                .required(false)
                .help("Join intervals separated by at most this many bases (default: 0, so touching intervals merge)"),
        )
        .arg(
            Arg::new(OVERLAP_ONLY)
                .long(OVERLAP_ONLY)
                .action(ArgAction::SetTrue)
                .conflicts_with(MIN_DIST)
                .help("Only join intervals that strictly overlap; touching intervals stay apart"),
        )
        .arg(arg!(--output <OUTPUT> "Output BED file (default: stdout)").required(false))
}
