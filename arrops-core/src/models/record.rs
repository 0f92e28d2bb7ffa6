use std::fmt::{self, Display};

///
/// One line of a BED-like file: a contig, a half-open interval and whatever columns follow.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct BedRecord {
    pub chr: String,
    pub start: i64,
    pub end: i64,

    pub rest: Option<String>,
}

impl BedRecord {
    ///
    /// Get the tab-separated line for this record
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}{}",
            self.chr,
            self.start,
            self.end,
            self.rest
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }
}

impl Display for BedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
