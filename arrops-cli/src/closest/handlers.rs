use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use arrops::closest_intervals;
use arrops_core::adapter::ContigGroup;
use arrops_core::models::ClosestOptions;

use super::cli::{IGNORE_DOWNSTREAM, IGNORE_OVERLAPS, IGNORE_UPSTREAM, K};
use crate::io::{LoadedBed, load_bed, required, write_lines};
use crate::overlap::handlers::{format_pair, join_contigs};

pub fn run_closest(matches: &ArgMatches) -> Result<()> {
    let options = closest_options(matches)?;
    let a = load_bed(required(matches, "BED_A")?)?;
    let b = load_bed(required(matches, "BED_B")?)?;

    let lines = closest_lines(&a, &b, &options)?;
    info!("Reported {} neighbors", lines.len());

    write_lines(&lines, matches)
}

fn closest_options(matches: &ArgMatches) -> Result<ClosestOptions> {
    let k = required(matches, K)?
        .parse::<usize>()
        .context("-k must be a positive integer")?;
    Ok(ClosestOptions::default()
        .with_k(k)
        .ignore_overlaps(matches.get_flag(IGNORE_OVERLAPS))
        .ignore_upstream(matches.get_flag(IGNORE_UPSTREAM))
        .ignore_downstream(matches.get_flag(IGNORE_DOWNSTREAM)))
}

/// A and B coordinates, then distance and direction of every neighbor.
fn closest_lines(a: &LoadedBed, b: &LoadedBed, options: &ClosestOptions) -> Result<Vec<String>> {
    join_contigs(a, b, |group_a: &ContigGroup, group_b: &ContigGroup| {
        let hits = closest_intervals(&group_a.intervals, &group_b.intervals, options)?;
        Ok(hits
            .into_iter()
            .map(|hit| {
                format!(
                    "{}\t{}\t{}",
                    format_pair(
                        a.record(group_a.row(hit.id1)),
                        b.record(group_b.row(hit.id2)),
                    ),
                    hit.distance,
                    hit.direction
                )
            })
            .collect())
    })
}
