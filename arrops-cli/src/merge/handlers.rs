use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use rayon::prelude::*;

use arrops::merge_intervals;
use arrops_core::adapter::ContigGroup;
use arrops_core::models::MergeDistance;

use super::cli::{MIN_DIST, OVERLAP_ONLY};
use crate::io::{load_bed, required, write_lines};

pub fn run_merge(matches: &ArgMatches) -> Result<()> {
    let input = required(matches, "input")?;
    let min_dist = merge_distance(matches)?;

    let bed = load_bed(input)?;
    let per_contig: Vec<Vec<String>> = bed
        .partition
        .groups()
        .par_iter()
        .map(|group| merge_contig(group, min_dist))
        .collect();

    let lines: Vec<String> = per_contig.into_iter().flatten().collect();
    info!("Merged {} records into {} clusters", bed.records.len(), lines.len());

    write_lines(&lines, matches)
}

fn merge_distance(matches: &ArgMatches) -> Result<MergeDistance<i64>> {
    if matches.get_flag(OVERLAP_ONLY) {
        return Ok(MergeDistance::OverlapOnly);
    }
    let min_dist = match matches.get_one::<String>(MIN_DIST) {
        Some(raw) => raw
            .parse::<i64>()
            .context("--min-dist must be an integer")?,
        None => 0,
    };
    Ok(MergeDistance::Within(min_dist))
}

/// One `chr start end n_members` line per cluster.
fn merge_contig(group: &ContigGroup, min_dist: MergeDistance<i64>) -> Vec<String> {
    let merged = merge_intervals(&group.intervals, min_dist);
    merged
        .spans
        .iter()
        .zip(merged.cluster_sizes())
        .map(|((start, end), size)| format!("{}\t{}\t{}\t{}", group.contig, start, end, size))
        .collect()
}
