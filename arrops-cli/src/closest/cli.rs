use clap::{Arg, ArgAction, Command, arg};

pub const CLOSEST_CMD: &str = "closest";
pub const K: &str = "k";
pub const IGNORE_OVERLAPS: &str = "ignore-overlaps";
pub const IGNORE_UPSTREAM: &str = "ignore-upstream";
pub const IGNORE_DOWNSTREAM: &str = "ignore-downstream";

pub fn create_closest_cli() -> Command {
    Command::new(CLOSEST_CMD)
        .about("Report the k closest intervals of B for every interval of A.")
        .arg(arg!(-a <BED_A> "Input BED file A (queries)").required(true))
        .arg(arg!(-b <BED_B> "Input BED file B (candidates)").required(true))
        .arg(
            Arg::new(K)
                .short('k')
                .required(false)
                .default_value("1")
                .help("Number of neighbors to report per query"),
        )
        .arg(
            Arg::new(IGNORE_OVERLAPS)
                .long(IGNORE_OVERLAPS)
                .action(ArgAction::SetTrue)
                .help("Do not report overlapping intervals"),
        )
        .arg(
            Arg::new(IGNORE_UPSTREAM)
                .long(IGNORE_UPSTREAM)
                .action(ArgAction::SetTrue)
                .help("Do not report intervals ending before the query"),
        )
        .arg(
            Arg::new(IGNORE_DOWNSTREAM)
                .long(IGNORE_DOWNSTREAM)
                .action(ArgAction::SetTrue)
                .help("Do not report intervals starting after the query"),
        )
        .arg(arg!(--output <OUTPUT> "Output file (default: stdout)").required(false))
}
