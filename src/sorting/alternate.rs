use crate::disks::{DiskColor, DiskRow};

use super::sorter::{SortResult, Sorter};

/// Odd-even transposition over `total_count() - 1` passes. Even passes look at
/// pairs starting on even indices, odd passes at pairs starting on odd ones.
pub struct AlternateSorter;

impl Sorter for AlternateSorter {
    fn sort(&self, before: &DiskRow) -> SortResult {
        sort_alternate(before)
    }

    fn name(&self) -> &str {
        "Alternate"
    }
}

/// Sort disks with the alternate algorithm.
pub fn sort_alternate(before: &DiskRow) -> SortResult {
    let mut disks = before.clone();
    let total = disks.total_count();
    let mut swap_count = 0u64;

    for pass in 0..total - 1 {
        let start = pass % 2;
        let mut pass_swaps = 0u64;
        for j in (start..total - 1).step_by(2) {
            if disks.get(j) == DiskColor::Dark && disks.get(j + 1) == DiskColor::Light {
                disks.swap(j);
                pass_swaps += 1;
            }
        }
        tracing::trace!(pass, pass_swaps, "alternate pass");
        swap_count += pass_swaps;
    }

    tracing::debug!(
        light_count = disks.light_count(),
        swap_count,
        "alternate sort finished"
    );
    SortResult::new(disks, swap_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::expected_swap_count;

    #[test]
    fn test_single_pair_needs_no_swaps() {
        let result = sort_alternate(&DiskRow::new(1));
        assert_eq!(result.after().to_text(), "L D");
        assert_eq!(result.swap_count(), 0);
    }

    #[test]
    fn test_three_pairs() {
        let result = sort_alternate(&DiskRow::new(3));
        assert_eq!(result.after().to_text(), "L L L D D D");
        assert_eq!(result.swap_count(), 3);
    }

    #[test]
    fn test_four_pairs() {
        let result = sort_alternate(&DiskRow::new(4));
        assert_eq!(result.after().to_text(), "L L L L D D D D");
        assert_eq!(result.swap_count(), 6);
    }

    #[test]
    fn test_input_is_not_modified() {
        let before = DiskRow::new(5);
        let _ = sort_alternate(&before);
        assert!(before.is_alternating());
    }

    #[test]
    fn test_sorted_input_takes_no_swaps() {
        let sorted: DiskRow = "L L L D D D".parse().unwrap();
        let result = sort_alternate(&sorted);
        assert_eq!(result.after(), &sorted);
        assert_eq!(result.swap_count(), 0);
    }

    #[test]
    fn test_larger_rows_sort_with_minimum_swaps() {
        for n in [10, 25, 64] {
            let result = sort_alternate(&DiskRow::new(n));
            assert!(result.after().is_sorted(), "n = {n}");
            assert_eq!(result.swap_count(), expected_swap_count(n));
        }
    }

    #[test]
    fn test_sorter_name() {
        assert_eq!(AlternateSorter.name(), "Alternate");
    }
}
