//! # Alternating Disks
//!
//! Sorts a row of alternating light and dark disks so that every light disk
//! ends up left of every dark disk, using only adjacent swaps. Two competing
//! algorithms are provided and both report how many swaps they performed.
//!
//! ## Modules
//!
//! - [`disks`] — Disk colors and the row container
//! - [`sorting`] — Alternate and lawnmower algorithms, `Sorter` trait
//! - [`report`] — Serializable run reports and the timing sweep
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod disks;
pub mod error;
pub mod report;
pub mod sorting;

pub use disks::{DiskColor, DiskRow};
pub use sorting::{sort_alternate, sort_lawnmower, Algorithm, SortResult, Sorter};
