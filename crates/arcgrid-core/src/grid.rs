//! Rectangular character grids.

use std::{
    fmt::{self, Display},
    ops::Range,
    str::FromStr,
};

use crate::{Direction, DividerResult, GridError};

/// A rectangular grid of single-character cells.
///
/// Each cell holds one `char`; ARC puzzles use the digits `0`-`9`, but any
/// character is accepted. A grid always has at least one row and one column,
/// and every row has the same length.
///
/// # Examples
///
/// ```
/// use arcgrid_core::Grid;
///
/// let grid = Grid::from_rows(["012", "345"].map(|row| row.chars()))?;
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.get(1, 2), Some('5'));
/// assert_eq!(grid.get(2, 0), None);
/// # Ok::<(), arcgrid_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Builds a grid from an iterator of rows.
    ///
    /// # Errors
    ///
    /// - [`GridError::Empty`] if there are no rows.
    /// - [`GridError::EmptyRow`] if a row has no cells.
    /// - [`GridError::Ragged`] if a row's length differs from the first row's.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = char>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        Self::try_from(rows)
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the cell at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Returns the rows of the grid, top to bottom.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Returns the cells of column `col`, top to bottom.
    ///
    /// The iterator is empty if `col` is out of bounds.
    pub fn column(&self, col: usize) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().filter_map(move |row| row.get(col).copied())
    }

    /// Splits the grid into panes along the divider lines in `dividers`.
    ///
    /// The divider rows or columns themselves are dropped. Adjacent dividers and
    /// dividers on the border do not produce empty panes, and indexes outside the
    /// grid are ignored. Without a divider the result is a single pane holding
    /// the whole grid; a grid made only of divider lines yields no panes.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgrid_core::{Grid, detect_single};
    ///
    /// let grid: Grid = "
    ///     12
    ///     55
    ///     34
    /// "
    /// .parse()?;
    /// let panes = grid.split_panes(&detect_single(&grid));
    /// assert_eq!(panes.len(), 2);
    /// assert_eq!(panes[1].to_string(), "34");
    /// # Ok::<(), arcgrid_core::GridError>(())
    /// ```
    #[must_use]
    pub fn split_panes(&self, dividers: &DividerResult) -> Vec<Grid> {
        let Some(direction) = dividers.direction() else {
            return vec![self.clone()];
        };
        match direction {
            Direction::Column => pane_ranges(self.width, dividers.indexes())
                .into_iter()
                .map(|cols| Grid {
                    rows: self.rows.iter().map(|row| row[cols.clone()].to_vec()).collect(),
                    width: cols.len(),
                })
                .collect(),
            Direction::Row => pane_ranges(self.height(), dividers.indexes())
                .into_iter()
                .map(|rows| Grid {
                    rows: self.rows[rows].to_vec(),
                    width: self.width,
                })
                .collect(),
        }
    }
}

/// Returns the non-empty ranges of `0..len` left between divider positions.
fn pane_ranges(len: usize, dividers: &[usize]) -> Vec<Range<usize>> {
    let mut cuts: Vec<usize> = dividers.iter().copied().filter(|&i| i < len).collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut ranges = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts.into_iter().chain([len]) {
        if cut > start {
            ranges.push(start..cut);
        }
        start = cut + 1;
    }
    ranges
}

impl TryFrom<Vec<Vec<char>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<char>>) -> Result<Self, Self::Error> {
        let width = rows.first().ok_or(GridError::Empty)?.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.is_empty() {
                return Err(GridError::EmptyRow { row });
            }
            if cells.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        Ok(Self { rows, width })
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses a grid with one row per line.
    ///
    /// Blank lines are skipped and whitespace inside a line is ignored, so the
    /// grid may be indented or written with spaces between cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(
            s.lines()
                .map(|line| line.chars().filter(|c| !c.is_whitespace()))
                .filter(|row| row.clone().next().is_some()),
        )
    }
}

impl Display for Grid {
    /// Writes the rows joined by newlines, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
