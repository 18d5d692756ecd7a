//! Errors of puzzle text parsing and ARC task loading.

use arcgrid_core::GridError;

use crate::SectionKind;

/// Errors raised while parsing puzzle text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The text contained no `<INPUT_n>:` section.
    #[display("no input sections found")]
    NoInputSections,
    /// A section's body is not a rectangular grid.
    #[display("invalid grid in <{kind}_{number}>: {source}")]
    InvalidGrid {
        /// Kind of the offending section.
        kind: SectionKind,
        /// Number written in the section marker.
        number: usize,
        /// Underlying grid error.
        source: GridError,
    },
    /// An input section is not followed by its output section.
    #[display("<INPUT_{number}> has no matching <OUTPUT_{number}>")]
    MissingOutput {
        /// Number written in the input marker.
        number: usize,
    },
    /// An output section does not follow an input section with the same number.
    #[display("<OUTPUT_{number}> does not follow a matching <INPUT_{number}>")]
    UnexpectedOutput {
        /// Number written in the output marker.
        number: usize,
    },
}

/// Errors raised while loading or converting ARC JSON tasks.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum TaskError {
    /// The task file is not valid JSON of the expected shape.
    #[display("invalid task JSON: {_0}")]
    Json(#[from] serde_json::Error),
    /// A cell value cannot be rendered as a single digit.
    #[display("cell ({row}, {col}) holds {value}, expected 0-9")]
    #[from(skip)]
    InvalidCell {
        /// 0-based row index.
        row: usize,
        /// 0-based column index.
        col: usize,
        /// The rejected value.
        value: u8,
    },
    /// The cell matrix is not a rectangular grid.
    #[display("invalid grid: {_0}")]
    Grid(#[from] GridError),
    /// An example that must carry an output does not.
    #[display("{section} example {index} has no output")]
    #[from(skip)]
    MissingOutput {
        /// `train` or `test`.
        section: &'static str,
        /// 0-based example index.
        index: usize,
    },
}
