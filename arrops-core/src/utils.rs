use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::models::BedRecord;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path_str: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

/// Parse one line of a BED-like file.
///
/// Returns `Ok(None)` for blank lines and `browser`/`track`/`#` header lines.
pub fn parse_bedlike_line(line: &str) -> Result<Option<BedRecord>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty()
        || line.starts_with('#')
        || line.starts_with("browser")
        || line.starts_with("track")
    {
        return Ok(None);
    }

    let mut fields = line.splitn(4, '\t');

    let chr = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("Missing chromosome field: {}", line))?;
    let start = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("Missing start field: {}", line))?
        .parse::<i64>()
        .with_context(|| format!("Failed to parse start position in line: {}", line))?;
    let end = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("Missing end field: {}", line))?
        .parse::<i64>()
        .with_context(|| format!("Failed to parse end position in line: {}", line))?;
    let rest = fields.next().map(str::to_owned).filter(|s| !s.is_empty());

    Ok(Some(BedRecord {
        chr: chr.to_owned(),
        start,
        end,
        rest,
    }))
}

///
/// Read every record of a BED-like file, in file order.
///
/// # Arguments
/// - path: path to the file, or '-' for stdin
pub fn read_bedlike_records(path: &str) -> Result<Vec<BedRecord>> {
    let reader = get_dynamic_reader_w_stdin(path)?;
    let mut records = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {} of {}", line_no + 1, path))?;
        if let Some(record) = parse_bedlike_line(&line)
            .with_context(|| format!("Malformed record at line {} of {}", line_no + 1, path))?
        {
            records.push(record);
        }
    }
    Ok(records)
}

/// Read a two-column `chrom<TAB>size` file.
pub fn get_chrom_sizes<T: AsRef<Path>>(path: T) -> Result<HashMap<String, i64>> {
    let reader = get_dynamic_reader(path.as_ref())?;
    let mut chrom_sizes: HashMap<String, i64> = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let (Some(chr), Some(size)) = (parts.next(), parts.next()) else {
            continue;
        };
        let size = size
            .parse::<i64>()
            .with_context(|| format!("Failed to parse chromosome size in line: {}", line))?;
        chrom_sizes.insert(chr.to_owned(), size);
    }

    Ok(chrom_sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[rstest]
    fn test_parse_bedlike_line_keeps_extra_columns() {
        let record = parse_bedlike_line("chr1\t10\t20\tpeak1\t0.5")
            .unwrap()
            .unwrap();
        assert_eq!(record.chr, "chr1");
        assert_eq!(record.start, 10);
        assert_eq!(record.end, 20);
        assert_eq!(record.rest.as_deref(), Some("peak1\t0.5"));
        assert_eq!(record.as_string(), "chr1\t10\t20\tpeak1\t0.5");
    }

    #[rstest]
    #[case("")]
    #[case("# comment")]
    #[case("track name=foo")]
    #[case("browser position chr1")]
    fn test_parse_bedlike_line_skips_headers(#[case] line: &str) {
        assert!(parse_bedlike_line(line).unwrap().is_none());
    }

    #[rstest]
    fn test_parse_bedlike_line_rejects_bad_coordinates() {
        assert!(parse_bedlike_line("chr1\tten\t20").is_err());
        assert!(parse_bedlike_line("chr1\t10").is_err());
    }

    #[rstest]
    fn test_read_gzipped_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.bed.gz");
        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        writeln!(encoder, "# header").unwrap();
        writeln!(encoder, "chr1\t1\t5").unwrap();
        writeln!(encoder, "chr2\t3\t8\tname").unwrap();
        encoder.finish().unwrap();

        let records = read_bedlike_records(path.to_str().unwrap()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].chr, "chr2");
        assert_eq!(records[1].rest.as_deref(), Some("name"));
    }

    #[rstest]
    fn test_get_chrom_sizes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("genome.chrom.sizes");
        std::fs::write(&path, "chr1\t100\nchr2\t250\n").unwrap();
        let sizes = get_chrom_sizes(&path).unwrap();
        assert_eq!(sizes.get("chr1"), Some(&100));
        assert_eq!(sizes.get("chr2"), Some(&250));
    }
}
