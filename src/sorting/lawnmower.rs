use crate::disks::{DiskColor, DiskRow};

use super::sorter::{SortResult, Sorter};

/// Runs `light_count()` passes, each a left-to-right sweep followed by a
/// right-to-left sweep over the whole row.
pub struct LawnmowerSorter;

impl Sorter for LawnmowerSorter {
    fn sort(&self, before: &DiskRow) -> SortResult {
        sort_lawnmower(before)
    }

    fn name(&self) -> &str {
        "Lawnmower"
    }
}

/// Sort disks with the lawnmower algorithm.
pub fn sort_lawnmower(before: &DiskRow) -> SortResult {
    let mut disks = before.clone();
    let total = disks.total_count();
    let mut swap_count = 0u64;

    for pass in 0..disks.light_count() {
        let mut pass_swaps = 0u64;

        // Left to right: push dark disks rightwards
        for j in 0..total - 1 {
            if disks.get(j) == DiskColor::Dark && disks.get(j + 1) == DiskColor::Light {
                disks.swap(j);
                pass_swaps += 1;
            }
        }

        // Right to left: pull light disks leftwards
        for k in (1..total).rev() {
            if disks.get(k) == DiskColor::Light && disks.get(k - 1) == DiskColor::Dark {
                disks.swap(k - 1);
                pass_swaps += 1;
            }
        }

        tracing::trace!(pass, pass_swaps, "lawnmower pass");
        swap_count += pass_swaps;
    }

    tracing::debug!(
        light_count = disks.light_count(),
        swap_count,
        "lawnmower sort finished"
    );
    SortResult::new(disks, swap_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::expected_swap_count;

    #[test]
    fn test_single_pair_needs_no_swaps() {
        let result = sort_lawnmower(&DiskRow::new(1));
        assert_eq!(result.after().to_text(), "L D");
        assert_eq!(result.swap_count(), 0);
    }

    #[test]
    fn test_three_pairs() {
        let result = sort_lawnmower(&DiskRow::new(3));
        assert_eq!(result.after().to_text(), "L L L D D D");
        assert_eq!(result.swap_count(), 3);
    }

    #[test]
    fn test_four_pairs() {
        let result = sort_lawnmower(&DiskRow::new(4));
        assert_eq!(result.after().to_text(), "L L L L D D D D");
        assert_eq!(result.swap_count(), 6);
    }

    #[test]
    fn test_input_is_not_modified() {
        let before = DiskRow::new(5);
        let _ = sort_lawnmower(&before);
        assert!(before.is_alternating());
    }

    #[test]
    fn test_sorted_input_takes_no_swaps() {
        let sorted: DiskRow = "L L L L D D D D".parse().unwrap();
        let result = sort_lawnmower(&sorted);
        assert_eq!(result.after(), &sorted);
        assert_eq!(result.swap_count(), 0);
    }

    #[test]
    fn test_larger_rows_sort_with_minimum_swaps() {
        for n in [10, 25, 64] {
            let result = sort_lawnmower(&DiskRow::new(n));
            assert!(result.after().is_sorted(), "n = {n}");
            assert_eq!(result.swap_count(), expected_swap_count(n));
        }
    }

    #[test]
    fn test_sorter_name() {
        assert_eq!(LawnmowerSorter.name(), "Lawnmower");
    }
}
