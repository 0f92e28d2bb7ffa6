use clap::{Arg, Command, arg};

pub const COMPLEMENT_CMD: &str = "complement";
pub const CHROM_SIZES: &str = "chrom-sizes";

pub fn create_complement_cli() -> Command {
    Command::new(COMPLEMENT_CMD)
        .about("Report the gaps between intervals, per contig.")
        .arg(arg!(--input <BED> "Input BED file").required(true))
        .arg(
            Arg::new(CHROM_SIZES)
                .long(CHROM_SIZES)
                .required(false)
                .help("Path to chrom.sizes file. Without it a contig ends at its last covered base"),
        )
        .arg(arg!(--output <OUTPUT> "Output BED file (default: stdout)").required(false))
}
