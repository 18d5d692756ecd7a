//! Puzzle formats for ARC-style tasks.
//!
//! - [`text`]: the bracketed `<INPUT_n>:` / `<OUTPUT_n>:` puzzle text handed to
//!   prompt pipelines, parsed into [`Grid`](arcgrid_core::Grid)s.
//! - [`task`]: ARC JSON task files with numeric cells.
//! - [`render`]: renders tasks back into puzzle text, and divider results into
//!   prompt hints.
//!
//! # Examples
//!
//! ```
//! use arcgrid_core::detect_across_grids;
//! use arcgrid_puzzle::{render, text};
//!
//! let puzzle = "
//! <INPUT_1>:
//! 0020
//! 4424
//! <OUTPUT_1>:
//! 04
//!
//! <INPUT_2>:
//! 4420
//! 0021
//! <OUTPUT_2>:
//! 40
//! ";
//! let grids = text::parse_input_grids(puzzle)?;
//! let dividers = detect_across_grids(&grids)?;
//! assert_eq!(
//!     render::divider_hint(&dividers).as_deref(),
//!     Some("NOTE: grid is separated by col at indexes 2")
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    error::{ParseError, TaskError},
    task::{CellMatrix, Example, Task},
    text::{Section, SectionKind, TrainingPair},
};

mod error;
pub mod render;
pub mod task;
pub mod text;
