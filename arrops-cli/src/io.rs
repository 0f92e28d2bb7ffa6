use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use arrops_core::adapter::ContigPartition;
use arrops_core::models::BedRecord;
use arrops_core::utils::read_bedlike_records;

pub const OUTPUT: &str = "output";

/// Records of a BED-like file, split by contig.
pub struct LoadedBed {
    pub records: Vec<BedRecord>,
    pub partition: ContigPartition,
}

impl LoadedBed {
    pub fn record(&self, row: usize) -> &BedRecord {
        &self.records[row]
    }
}

pub fn load_bed(path: &str) -> Result<LoadedBed> {
    let records = read_bedlike_records(path)
        .with_context(|| format!("Failed to load BED file: {}", path))?;
    let partition = ContigPartition::from_records(&records);
    if partition.is_empty() {
        warn!("No records found in {}", path);
    }
    info!(
        "Loaded {} records on {} contigs from {}",
        records.len(),
        partition.len(),
        path
    );
    Ok(LoadedBed { records, partition })
}

pub fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(id)
        .with_context(|| format!("Missing required argument: {}", id))
}

///
/// Write lines to the `--output` path, or to stdout when it is not given.
///
pub fn write_lines<S: AsRef<str>>(lines: &[S], matches: &ArgMatches) -> Result<()> {
    let mut writer: BufWriter<Box<dyn Write>> = match matches.get_one::<String>(OUTPUT) {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            BufWriter::new(Box::new(file))
        }
        None => BufWriter::new(Box::new(io::stdout().lock())),
    };

    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()?;

    if let Some(path) = matches.get_one::<String>(OUTPUT) {
        info!("Output written to {}", path);
    }
    Ok(())
}
