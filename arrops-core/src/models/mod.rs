pub mod interval_set;
pub mod options;
pub mod pairs;
pub mod record;

// re-export for cleaner imports
pub use self::interval_set::IntervalSet;
pub use self::options::{ClosestOptions, MergeDistance};
pub use self::pairs::{Direction, NeighborPair, OverlapPair};
pub use self::record::BedRecord;
