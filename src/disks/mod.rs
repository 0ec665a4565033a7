//! Disk colors and the row of disks the sorting algorithms permute.

mod color;
mod row;

pub use color::DiskColor;
pub use row::DiskRow;
