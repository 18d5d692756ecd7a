//! Core data structures and divider detection for ARC-style puzzle grids.
//!
//! This crate provides the grid type shared by the other arcgrid crates and the
//! structural analysis performed on it before a puzzle is handed to a prompt
//! pipeline.
//!
//! # Overview
//!
//! 1. **Grids** - [`grid`]: a validated, rectangular matrix of single-character
//!    cells ([`Grid`]).
//! 2. **Divider detection** - [`divider`]: finds full rows or columns holding a
//!    single repeated value ([`detect_single`]) and reduces detections over a set
//!    of grids to the indices they share ([`detect_across_grids`]).
//! 3. **Pane splitting** - [`Grid::split_panes`] cuts a grid along detected
//!    divider lines.
//!
//! # Examples
//!
//! ```
//! use arcgrid_core::{Direction, Grid, detect_single};
//!
//! let grid: Grid = "
//!     0042000
//!     4402909
//!     4042099
//! "
//! .parse()?;
//!
//! let result = detect_single(&grid);
//! assert_eq!(result.direction(), Some(Direction::Column));
//! assert_eq!(result.indexes(), &[3]);
//!
//! let panes = grid.split_panes(&result);
//! assert_eq!(panes.len(), 2);
//! assert_eq!(panes[0].to_string(), "004\n440\n404");
//! # Ok::<(), arcgrid_core::GridError>(())
//! ```

pub mod divider;
pub mod error;
pub mod grid;

pub use self::{
    divider::{Direction, DividerResult, detect_across_grids, detect_rows, detect_single},
    error::{DividerError, DividerRecordError, GridError},
    grid::Grid,
};
