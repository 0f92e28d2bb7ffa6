use std::collections::HashMap;

use anyhow::Result;
use clap::ArgMatches;
use log::warn;
use rayon::prelude::*;

use arrops::complement_intervals;
use arrops_core::adapter::ContigGroup;
use arrops_core::utils::get_chrom_sizes;

use super::cli::CHROM_SIZES;
use crate::io::{load_bed, required, write_lines};

pub fn run_complement(matches: &ArgMatches) -> Result<()> {
    let input = required(matches, "input")?;
    let chrom_sizes = match matches.get_one::<String>(CHROM_SIZES) {
        Some(path) => Some(get_chrom_sizes(path)?),
        None => None,
    };

    let bed = load_bed(input)?;
    let per_contig: Vec<Vec<String>> = bed
        .partition
        .groups()
        .par_iter()
        .map(|group| complement_contig(group, chrom_sizes.as_ref()))
        .collect();

    let lines: Vec<String> = per_contig.into_iter().flatten().collect();
    write_lines(&lines, matches)
}

/// Upper bound for a contig: its size when known, else the furthest end on it.
fn contig_end(group: &ContigGroup, chrom_sizes: Option<&HashMap<String, i64>>) -> i64 {
    let last_end = group.intervals.ends().iter().copied().max().unwrap_or(0);
    match chrom_sizes {
        Some(sizes) => match sizes.get(&group.contig) {
            Some(size) => *size,
            None => {
                warn!(
                    "Contig {} is missing from the chrom sizes, using its last end {}",
                    group.contig, last_end
                );
                last_end
            }
        },
        None => last_end,
    }
}

fn complement_contig(group: &ContigGroup, chrom_sizes: Option<&HashMap<String, i64>>) -> Vec<String> {
    let hi = contig_end(group, chrom_sizes);
    complement_intervals(&group.intervals, 0, hi)
        .iter()
        .map(|(start, end)| format!("{}\t{}\t{}", group.contig, start, end))
        .collect()
}
