use crate::disks::DiskRow;

/// Output of a sorting algorithm: the final row and how many adjacent swaps
/// it took to get there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortResult {
    after: DiskRow,
    swap_count: u64,
}

impl SortResult {
    pub fn new(after: DiskRow, swap_count: u64) -> Self {
        SortResult { after, swap_count }
    }

    pub fn after(&self) -> &DiskRow {
        &self.after
    }

    pub fn swap_count(&self) -> u64 {
        self.swap_count
    }

    pub fn into_after(self) -> DiskRow {
        self.after
    }
}

/// Common interface for the disk sorting algorithms.
pub trait Sorter {
    /// Sort a private copy of `before`. The caller's row is left untouched.
    fn sort(&self, before: &DiskRow) -> SortResult;

    /// Return the algorithm's display name.
    fn name(&self) -> &str;
}

/// Fewest adjacent swaps that sort the canonical alternating row with
/// `light_count` disks of each color.
pub fn expected_swap_count(light_count: usize) -> u64 {
    let n = light_count as u64;
    n * n.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_result_accessors() {
        let row = DiskRow::new(2);
        let result = SortResult::new(row.clone(), 7);
        assert_eq!(result.after(), &row);
        assert_eq!(result.swap_count(), 7);
        assert_eq!(result.into_after(), row);
    }

    #[test]
    fn test_expected_swap_count() {
        assert_eq!(expected_swap_count(1), 0);
        assert_eq!(expected_swap_count(3), 3);
        assert_eq!(expected_swap_count(4), 6);
        for n in 1..20 {
            assert_eq!(expected_swap_count(n), DiskRow::new(n).inversions());
        }
    }
}
