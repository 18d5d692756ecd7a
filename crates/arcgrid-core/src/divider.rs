//! Divider detection.
//!
//! A *divider* is a full row or column whose cells all hold the same value.
//! Puzzles use such lines to separate a grid into sub-grids, and the value used
//! varies between puzzles, so detection is purely structural: no particular
//! character is treated as a divider.
//!
//! Columns take precedence over rows. If a grid has both a constant column and a
//! constant row, only the columns are reported.
//!
//! Grids with fewer than two rows or fewer than two columns never report a
//! divider; there is nothing on either side of the line to separate.

use serde::{Deserialize, Serialize};

use crate::{DividerError, DividerRecordError, Grid};

/// The axis a divider line runs along.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
pub enum Direction {
    /// A full row holding one value.
    #[display("row")]
    #[serde(rename = "row")]
    Row,
    /// A full column holding one value.
    #[display("col")]
    #[serde(rename = "col")]
    Column,
}

impl Direction {
    /// Parses the short name used in serialized records (`row` or `col`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "row" => Some(Self::Row),
            "col" => Some(Self::Column),
            _ => None,
        }
    }
}

/// Outcome of divider detection on one grid or a set of grids.
///
/// A result either carries a direction together with at least one index, or
/// carries neither. Indexes are 0-based rows or columns in ascending order.
///
/// The serialized form is the flat record consumed by prompt tooling:
///
/// ```
/// use arcgrid_core::{Direction, DividerResult};
///
/// let result = DividerResult::new(Direction::Column, vec![4]);
/// assert_eq!(
///     serde_json::to_string(&result)?,
///     r#"{"direction":"col","indexes":[4],"divider":true}"#
/// );
/// assert_eq!(
///     serde_json::to_string(&DividerResult::none())?,
///     r#"{"direction":"","indexes":[],"divider":false}"#
/// );
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "DividerRecord", try_from = "DividerRecord")]
pub struct DividerResult {
    direction: Option<Direction>,
    indexes: Vec<usize>,
}

impl DividerResult {
    /// Returns the result for a grid without dividers.
    ///
    /// This is also the [`Default`] value.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            direction: None,
            indexes: Vec::new(),
        }
    }

    /// Creates a result with dividers along `direction` at `indexes`.
    ///
    /// Indexes are sorted and duplicates dropped. Empty `indexes` yield
    /// [`DividerResult::none`].
    ///
    /// ```
    /// use arcgrid_core::{Direction, DividerResult};
    ///
    /// let result = DividerResult::new(Direction::Column, vec![7, 3, 3]);
    /// assert_eq!(result.indexes(), &[3, 7]);
    /// assert_eq!(DividerResult::new(Direction::Row, vec![]), DividerResult::none());
    /// ```
    #[must_use]
    pub fn new(direction: Direction, mut indexes: Vec<usize>) -> Self {
        if indexes.is_empty() {
            return Self::none();
        }
        indexes.sort_unstable();
        indexes.dedup();
        Self {
            direction: Some(direction),
            indexes,
        }
    }

    /// Returns the divider direction, or `None` if no divider was found.
    #[must_use]
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the divider indexes. Empty if no divider was found.
    #[must_use]
    #[inline]
    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    /// Returns `true` if at least one divider was found.
    #[must_use]
    #[inline]
    pub fn is_divider(&self) -> bool {
        self.direction.is_some()
    }

    /// Consumes the result and returns its indexes.
    #[must_use]
    pub fn into_indexes(self) -> Vec<usize> {
        self.indexes
    }
}

/// Wire form of [`DividerResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DividerRecord {
    direction: String,
    indexes: Vec<usize>,
    divider: bool,
}

impl From<DividerResult> for DividerRecord {
    fn from(result: DividerResult) -> Self {
        Self {
            direction: result
                .direction
                .map(|direction| direction.to_string())
                .unwrap_or_default(),
            divider: result.is_divider(),
            indexes: result.indexes,
        }
    }
}

impl TryFrom<DividerRecord> for DividerResult {
    type Error = DividerRecordError;

    fn try_from(record: DividerRecord) -> Result<Self, Self::Error> {
        let direction = match record.direction.as_str() {
            "" => None,
            name => Some(Direction::from_name(name).ok_or_else(|| {
                DividerRecordError::UnknownDirection {
                    direction: record.direction.clone(),
                }
            })?),
        };
        let consistent = record.divider == direction.is_some()
            && direction.is_some() != record.indexes.is_empty();
        if !consistent {
            return Err(DividerRecordError::Inconsistent {
                divider: record.divider,
                direction: record.direction,
                indexes: record.indexes.len(),
            });
        }
        if !record.indexes.is_sorted_by(|a, b| a < b) {
            return Err(DividerRecordError::UnorderedIndexes {
                indexes: record.indexes,
            });
        }
        Ok(Self {
            direction,
            indexes: record.indexes,
        })
    }
}

/// Detects dividers in a single grid.
///
/// Columns are scanned left to right first; if any column holds a single value
/// from top to bottom, those columns are returned and rows are not examined.
/// Otherwise rows are scanned top to bottom.
///
/// # Examples
///
/// ```
/// use arcgrid_core::{Direction, Grid, detect_single};
///
/// let grid: Grid = "
///     0042200920
///     4404290902
///     4044209102
/// "
/// .parse()?;
/// let result = detect_single(&grid);
/// assert_eq!(result.direction(), Some(Direction::Column));
/// assert_eq!(result.indexes(), &[4]);
/// # Ok::<(), arcgrid_core::GridError>(())
/// ```
#[must_use]
pub fn detect_single(grid: &Grid) -> DividerResult {
    detect_rows(grid.rows())
}

/// Detects dividers in raw row data.
///
/// This is the same scan as [`detect_single`], but accepts rows that have not
/// been validated into a [`Grid`]. The first row's length sets the number of
/// columns. Missing cells never match, so a short row disqualifies every
/// column it lacks and is itself not a divider row. An empty input, or an
/// empty first row, has no dividers.
///
/// # Examples
///
/// ```
/// use arcgrid_core::{Direction, detect_rows};
///
/// let rows = [vec!['1', '5', '2'], vec!['3', '5'], vec!['4', '5', '6']];
/// let result = detect_rows(&rows);
/// assert_eq!(result.direction(), Some(Direction::Column));
/// assert_eq!(result.indexes(), &[1]);
/// ```
#[must_use]
pub fn detect_rows<R>(rows: &[R]) -> DividerResult
where
    R: AsRef<[char]>,
{
    let cols = rows.first().map_or(0, |row| row.as_ref().len());
    if rows.len() < 2 || cols < 2 {
        log::trace!(
            "skipping divider detection on {}x{cols} grid",
            rows.len()
        );
        return DividerResult::none();
    }

    let col_separators: Vec<usize> = (0..cols)
        .filter(|&col| is_column_separator(rows, col))
        .collect();
    if !col_separators.is_empty() {
        log::debug!("column dividers at {col_separators:?}");
        return DividerResult::new(Direction::Column, col_separators);
    }

    let row_separators: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| is_row_separator(row.as_ref(), cols))
        .map(|(index, _)| index)
        .collect();
    if !row_separators.is_empty() {
        log::debug!("row dividers at {row_separators:?}");
        return DividerResult::new(Direction::Row, row_separators);
    }

    DividerResult::none()
}

fn is_column_separator<R>(rows: &[R], col: usize) -> bool
where
    R: AsRef<[char]>,
{
    let Some((first, rest)) = rows.split_first() else {
        return false;
    };
    let Some(value) = first.as_ref().get(col) else {
        return false;
    };
    rest.iter().all(|row| row.as_ref().get(col) == Some(value))
}

fn is_row_separator(row: &[char], cols: usize) -> bool {
    let Some(value) = row.first() else {
        return false;
    };
    (1..cols).all(|col| row.get(col) == Some(value))
}

/// Detects dividers shared by every grid in `grids`.
///
/// Each grid is scanned with [`detect_single`]. If the first grid has no
/// divider its result is returned as is, without looking at the others.
/// Otherwise the result keeps the first grid's direction and the indexes found
/// in every grid, in the first grid's order. If no index survives, the result
/// has no divider. A grid without dividers contributes an empty set.
///
/// # Errors
///
/// - [`DividerError::EmptyInput`] if `grids` is empty.
/// - [`DividerError::DirectionMismatch`] if a later grid has dividers along the
///   other axis than the first grid.
///
/// # Examples
///
/// ```
/// use arcgrid_core::{Grid, detect_across_grids};
///
/// let a: Grid = "0525\n1525\n3525".parse()?;
/// let b: Grid = "0520\n1521\n3523".parse()?;
/// let result = detect_across_grids([&a, &b])?;
/// assert_eq!(result.indexes(), &[1, 2]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn detect_across_grids<'a, I>(grids: I) -> Result<DividerResult, DividerError>
where
    I: IntoIterator<Item = &'a Grid>,
{
    let mut results = grids.into_iter().map(detect_single);
    let first = results.next().ok_or(DividerError::EmptyInput)?;
    let Some(direction) = first.direction() else {
        return Ok(first);
    };

    let mut indexes = first.into_indexes();
    for (offset, result) in results.enumerate() {
        let grid = offset + 1;
        if let Some(found) = result.direction()
            && found != direction
        {
            return Err(DividerError::DirectionMismatch {
                grid,
                expected: direction,
                found,
            });
        }
        indexes.retain(|index| result.indexes().contains(index));
        log::trace!("grid {grid}: shared {direction} dividers {indexes:?}");
    }

    Ok(DividerResult::new(direction, indexes))
}
