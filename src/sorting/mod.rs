//! The two adjacent-swap algorithms that separate an alternating row, plus
//! the shared [`Sorter`] interface and [`SortResult`] output type.

mod alternate;
mod lawnmower;
mod sorter;

pub use alternate::{sort_alternate, AlternateSorter};
pub use lawnmower::{sort_lawnmower, LawnmowerSorter};
pub use sorter::{expected_swap_count, SortResult, Sorter};

use crate::disks::DiskRow;

/// Selectable sorting algorithm, used by the config file and the CLI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Alternate,
    Lawnmower,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Alternate, Algorithm::Lawnmower];

    pub fn sorter(self) -> Box<dyn Sorter> {
        match self {
            Algorithm::Alternate => Box::new(AlternateSorter),
            Algorithm::Lawnmower => Box::new(LawnmowerSorter),
        }
    }

    pub fn run(self, before: &DiskRow) -> SortResult {
        match self {
            Algorithm::Alternate => sort_alternate(before),
            Algorithm::Lawnmower => sort_lawnmower(before),
        }
    }

    /// Lowercase name, as written in config files
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Alternate => "alternate",
            Algorithm::Lawnmower => "lawnmower",
        }
    }
}
