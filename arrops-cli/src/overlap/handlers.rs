use anyhow::Result;
use clap::ArgMatches;
use log::info;
use rayon::prelude::*;

use arrops::overlap_intervals;
use arrops_core::adapter::ContigGroup;
use arrops_core::models::BedRecord;

use crate::io::{LoadedBed, load_bed, required, write_lines};

pub fn run_overlap(matches: &ArgMatches) -> Result<()> {
    let a = load_bed(required(matches, "BED_A")?)?;
    let b = load_bed(required(matches, "BED_B")?)?;

    let lines = join_contigs(&a, &b, |group_a, group_b| {
        Ok(overlap_intervals(&group_a.intervals, &group_b.intervals)
            .into_iter()
            .map(|pair| {
                format_pair(
                    a.record(group_a.row(pair.id1)),
                    b.record(group_b.row(pair.id2)),
                )
            })
            .collect())
    })?;
    info!("Found {} overlapping pairs", lines.len());

    write_lines(&lines, matches)
}

///
/// Run `per_contig` on every contig of `a` that also appears in `b`.
///
/// Contigs are processed in parallel; the output keeps the order in which contigs first
/// appear in `a`.
///
pub fn join_contigs<F>(a: &LoadedBed, b: &LoadedBed, per_contig: F) -> Result<Vec<String>>
where
    F: Fn(&ContigGroup, &ContigGroup) -> Result<Vec<String>> + Sync,
{
    let per_contig: Vec<Vec<String>> = a
        .partition
        .groups()
        .par_iter()
        .map(|group_a| match b.partition.get(&group_a.contig) {
            Some(group_b) => per_contig(group_a, group_b),
            None => Ok(Vec::new()),
        })
        .collect::<Result<_>>()?;
    Ok(per_contig.into_iter().flatten().collect())
}

pub fn format_pair(a: &BedRecord, b: &BedRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        a.chr, a.start, a.end, b.chr, b.start, b.end
    )
}
