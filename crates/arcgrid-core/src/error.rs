//! Error types for grid construction and divider detection.

use crate::Direction;

/// Errors raised when building a [`Grid`](crate::Grid) from row data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The input contained no rows.
    #[display("grid has no rows")]
    Empty,
    /// A row contained no cells.
    #[display("row {row} has no cells")]
    EmptyRow {
        /// 0-based row index.
        row: usize,
    },
    /// A row's length differs from the first row's.
    #[display("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// 0-based row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// Errors raised by multi-grid divider detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DividerError {
    /// No grids were supplied.
    #[display("no grids supplied for divider detection")]
    EmptyInput,
    /// A grid found dividers along a different axis than the first grid.
    #[display("grid {grid} has {found} dividers, but the first grid has {expected} dividers")]
    DirectionMismatch {
        /// 0-based position of the offending grid.
        grid: usize,
        /// Direction detected in the first grid.
        expected: Direction,
        /// Direction detected in the offending grid.
        found: Direction,
    },
}

/// Errors raised when decoding a serialized divider record.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DividerRecordError {
    /// The `direction` field held something other than `row`, `col` or an empty string.
    #[display("unknown divider direction: {direction:?}")]
    UnknownDirection {
        /// The rejected value.
        direction: String,
    },
    /// The `divider` flag disagrees with the direction and indexes.
    #[display("divider flag is {divider} but the record has direction {direction:?} and {indexes} indexes")]
    Inconsistent {
        /// The `divider` flag as written.
        divider: bool,
        /// The `direction` field as written.
        direction: String,
        /// Number of indexes in the record.
        indexes: usize,
    },
    /// The indexes are not strictly ascending.
    #[display("divider indexes are not strictly ascending: {indexes:?}")]
    UnorderedIndexes {
        /// The indexes as written.
        indexes: Vec<usize>,
    },
}
