use clap::{Command, arg};

pub const OVERLAP_CMD: &str = "overlap";

pub fn create_overlap_cli() -> Command {
    Command::new(OVERLAP_CMD)
        .about("Report every overlapping pair of intervals between two BED files.")
        .arg(arg!(-a <BED_A> "Input BED file A").required(true))
        .arg(arg!(-b <BED_B> "Input BED file B").required(true))
        .arg(arg!(--output <OUTPUT> "Output file (default: stdout)").required(false))
}
