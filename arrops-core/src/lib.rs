//! Core types shared by the arrops crates.
//!
//! This crate holds the value types that flow in and out of the interval algebra
//! in [`arrops`](https://docs.rs/arrops): interval collections, overlap and neighbor pairs,
//! the option values that configure merging and nearest-neighbor search, and the error
//! taxonomy. It also holds the boundary adapters that turn labeled or contig-grouped
//! input into the plain positional sequences the algorithms consume.
//!
//! ```rust
//! use arrops_core::models::IntervalSet;
//!
//! let set: IntervalSet<i64> = vec![(1, 5), (3, 8), (10, 12)].into();
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.get(1), Some((3, 8)));
//! ```

pub mod adapter;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use self::errors::{AdapterError, ArropsError};
pub use self::models::{
    ClosestOptions, Direction, IntervalSet, MergeDistance, NeighborPair, OverlapPair,
};
