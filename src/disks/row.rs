use std::fmt;
use std::str::FromStr;

use super::color::DiskColor;
use crate::error::DiskError;

/// A row of `2n` disks, `n` light and `n` dark.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiskRow {
    colors: Vec<DiskColor>,
}

impl DiskRow {
    /// Create the canonical alternating row with `light_count` disks of each
    /// color: light at even indices, dark at odd ones.
    ///
    /// # Panics
    ///
    /// Panics if `light_count` is zero or `2 * light_count` overflows `usize`.
    pub fn new(light_count: usize) -> Self {
        assert!(light_count > 0, "a disk row needs at least one light disk");
        let total = light_count
            .checked_mul(2)
            .unwrap_or_else(|| panic!("light disk count {light_count} overflows the row length"));
        Self::alternating(total)
    }

    /// Fallible form of [`DiskRow::new`].
    pub fn try_new(light_count: usize) -> Result<Self, DiskError> {
        match light_count.checked_mul(2) {
            Some(total) if total > 0 => Ok(Self::alternating(total)),
            _ => Err(DiskError::InvalidLightCount(light_count)),
        }
    }

    fn alternating(total: usize) -> Self {
        DiskRow {
            colors: (0..total).map(DiskColor::alternating_at).collect(),
        }
    }

    pub fn total_count(&self) -> usize {
        self.colors.len()
    }

    pub fn light_count(&self) -> usize {
        self.total_count() / 2
    }

    pub fn dark_count(&self) -> usize {
        self.light_count()
    }

    /// Check whether `index` addresses a disk in this row
    pub fn is_index(&self, index: usize) -> bool {
        index < self.total_count()
    }

    /// Get the color at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> DiskColor {
        assert!(
            self.is_index(index),
            "disk index {index} out of range for row of {}",
            self.total_count()
        );
        self.colors[index]
    }

    /// Exchange the disks at `left_index` and `left_index + 1`
    ///
    /// # Panics
    ///
    /// Panics unless both indices are in range.
    pub fn swap(&mut self, left_index: usize) {
        let right_index = left_index
            .checked_add(1)
            .filter(|&right| self.is_index(right));
        let Some(right_index) = right_index else {
            panic!(
                "swap at {left_index} out of range for row of {}",
                self.total_count()
            );
        };
        self.colors.swap(left_index, right_index);
    }

    /// Light at every even index, dark at every odd index.
    pub fn is_alternating(&self) -> bool {
        self.colors
            .iter()
            .enumerate()
            .all(|(i, &color)| color == DiskColor::alternating_at(i))
    }

    /// All light disks on the left, all dark disks on the right. Position
    /// `light_count()` is the first dark slot.
    pub fn is_sorted(&self) -> bool {
        let boundary = self.light_count();
        self.colors.iter().enumerate().all(|(i, &color)| {
            let required = if i < boundary {
                DiskColor::Light
            } else {
                DiskColor::Dark
            };
            color == required
        })
    }

    /// Number of (dark, light) pairs with the dark disk on the left, i.e. the
    /// fewest adjacent swaps that can sort this row.
    pub fn inversions(&self) -> u64 {
        let mut darks_seen = 0u64;
        let mut inversions = 0u64;
        for &color in &self.colors {
            match color {
                DiskColor::Dark => darks_seen += 1,
                DiskColor::Light => inversions += darks_seen,
            }
        }
        inversions
    }

    /// Space-separated `L`/`D` rendering
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn colors(&self) -> &[DiskColor] {
        &self.colors
    }
}

impl fmt::Display for DiskRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(color.token())?;
        }
        Ok(())
    }
}

impl FromStr for DiskRow {
    type Err = DiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| {
                DiskColor::from_token(token).ok_or_else(|| DiskError::UnknownToken {
                    position,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if colors.is_empty() {
            return Err(DiskError::EmptyRow);
        }
        if colors.len() % 2 != 0 {
            return Err(DiskError::OddLength(colors.len()));
        }
        let light = colors.iter().filter(|&&c| c == DiskColor::Light).count();
        let dark = colors.len() - light;
        if light != dark {
            return Err(DiskError::Unbalanced { light, dark });
        }

        Ok(DiskRow { colors })
    }
}
