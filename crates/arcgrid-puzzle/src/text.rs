//! Bracketed puzzle text.
//!
//! Puzzle text lists grids under section markers, one grid row per line:
//!
//! ```text
//! <INPUT_1>:
//! 00042000920000
//! 44042909020000
//! <OUTPUT_1>:
//! 0004
//! 4494
//!
//! <INPUT_2>:
//! ...
//! ```
//!
//! A section's body runs from the end of its marker to the next marker (or the
//! end of the text). The trailing colon after a marker is optional.

use std::sync::LazyLock;

use arcgrid_core::Grid;
use regex::Regex;

use crate::ParseError;

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(INPUT|OUTPUT)_(\d{1,9})>:?").unwrap());

/// Whether a section holds a puzzle input or an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SectionKind {
    /// An `<INPUT_n>` section.
    #[display("INPUT")]
    Input,
    /// An `<OUTPUT_n>` section.
    #[display("OUTPUT")]
    Output,
}

/// One marked section of puzzle text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Input or output.
    pub kind: SectionKind,
    /// The number written in the marker.
    pub number: usize,
    /// The section body.
    pub grid: Grid,
}

/// An input grid together with its expected output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingPair {
    /// The number written in the markers.
    pub number: usize,
    /// The input grid.
    pub input: Grid,
    /// The expected output grid.
    pub output: Grid,
}

/// Parses every marked section, in order of appearance.
///
/// Text before the first marker is ignored.
///
/// # Errors
///
/// Returns [`ParseError::InvalidGrid`] if a section body is empty or ragged.
pub fn parse_sections(text: &str) -> Result<Vec<Section>, ParseError> {
    let markers: Vec<_> = MARKER_RE.captures_iter(text).collect();
    let mut sections = Vec::with_capacity(markers.len());
    for (i, caps) in markers.iter().enumerate() {
        let kind = match &caps[1] {
            "INPUT" => SectionKind::Input,
            _ => SectionKind::Output,
        };
        // at most nine digits, always fits
        let number: usize = caps[2].parse().unwrap_or_default();
        let start = caps.get(0).map_or(0, |m| m.end());
        let end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());
        let grid = text[start..end]
            .parse::<Grid>()
            .map_err(|source| ParseError::InvalidGrid {
                kind,
                number,
                source,
            })?;
        sections.push(Section { kind, number, grid });
    }
    log::debug!("parsed {} puzzle sections", sections.len());
    Ok(sections)
}

/// Parses the input grids of puzzle text, in order of appearance.
///
/// Output sections are skipped, so this accepts both training text and
/// input-only test text.
///
/// # Errors
///
/// - [`ParseError::NoInputSections`] if the text has no input section.
/// - [`ParseError::InvalidGrid`] if any section body is not a grid.
///
/// # Examples
///
/// ```
/// use arcgrid_puzzle::text::parse_input_grids;
///
/// let grids = parse_input_grids("<INPUT_1>:\n012\n345\n<OUTPUT_1>:\n0\n")?;
/// assert_eq!(grids.len(), 1);
/// assert_eq!(grids[0].to_string(), "012\n345");
/// # Ok::<(), arcgrid_puzzle::ParseError>(())
/// ```
pub fn parse_input_grids(text: &str) -> Result<Vec<Grid>, ParseError> {
    let inputs: Vec<Grid> = parse_sections(text)?
        .into_iter()
        .filter(|section| section.kind == SectionKind::Input)
        .map(|section| section.grid)
        .collect();
    if inputs.is_empty() {
        return Err(ParseError::NoInputSections);
    }
    Ok(inputs)
}

/// Parses training text into input/output pairs.
///
/// Every input section must be directly followed by the output section with
/// the same number.
///
/// # Errors
///
/// - [`ParseError::NoInputSections`] if the text has no input section.
/// - [`ParseError::MissingOutput`] if an input has no matching output.
/// - [`ParseError::UnexpectedOutput`] if an output does not follow its input.
/// - [`ParseError::InvalidGrid`] if any section body is not a grid.
pub fn parse_pairs(text: &str) -> Result<Vec<TrainingPair>, ParseError> {
    let mut sections = parse_sections(text)?.into_iter().peekable();
    if sections.peek().is_none() {
        return Err(ParseError::NoInputSections);
    }

    let mut pairs = vec![];
    while let Some(input) = sections.next() {
        let number = input.number;
        if input.kind != SectionKind::Input {
            return Err(ParseError::UnexpectedOutput { number });
        }
        let output = sections
            .next_if(|next| next.kind == SectionKind::Output && next.number == number)
            .ok_or(ParseError::MissingOutput { number })?;
        pairs.push(TrainingPair {
            number,
            input: input.grid,
            output: output.grid,
        });
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use arcgrid_core::GridError;

    use super::*;

    const TRAINING: &str = "\
<INPUT_1>:
00042000920000
44042909020000
40442099021101
04442090021111
<OUTPUT_1>:
0004
4494
4944
1444

<INPUT_2>:
44442909020001
44002990021000
40442000920101
00002009021010
<OUTPUT_2>:
4444
4400
4144
1090
";

    #[test]
    fn test_parse_sections_in_order() {
        let sections = parse_sections(TRAINING).unwrap();
        let markers: Vec<_> = sections.iter().map(|s| (s.kind, s.number)).collect();
        assert_eq!(
            markers,
            [
                (SectionKind::Input, 1),
                (SectionKind::Output, 1),
                (SectionKind::Input, 2),
                (SectionKind::Output, 2),
            ]
        );
        assert_eq!(sections[0].grid.width(), 14);
        assert_eq!(sections[1].grid.to_string(), "0004\n4494\n4944\n1444");
    }

    #[test]
    fn test_parse_input_grids_skips_outputs() {
        let grids = parse_input_grids(TRAINING).unwrap();
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[1].get(0, 0), Some('4'));
        assert_eq!(grids[1].height(), 4);
    }

    #[test]
    fn test_parse_input_grids_accepts_input_only_text() {
        let text = "<INPUT_1>:\n12\n34\n\n<INPUT_2>:\n5\n";
        let grids = parse_input_grids(text).unwrap();
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[1].to_string(), "5");
    }

    #[test]
    fn test_parse_tolerates_crlf_and_missing_colon() {
        let text = "<INPUT_1>\r\n12\r\n34\r\n<OUTPUT_1>:\r\n1\r\n";
        let pairs = parse_pairs(text).unwrap();
        assert_eq!(pairs[0].input.to_string(), "12\n34");
        assert_eq!(pairs[0].output.to_string(), "1");
    }

    #[test]
    fn test_no_input_sections() {
        assert_eq!(parse_input_grids("just text"), Err(ParseError::NoInputSections));
        assert_eq!(
            parse_input_grids("<OUTPUT_1>:\n12\n"),
            Err(ParseError::NoInputSections)
        );
        assert_eq!(parse_pairs(""), Err(ParseError::NoInputSections));
    }

    #[test]
    fn test_invalid_grid_reports_section() {
        let text = "<INPUT_1>:\n123\n45\n<OUTPUT_1>:\n1\n";
        assert_eq!(
            parse_input_grids(text),
            Err(ParseError::InvalidGrid {
                kind: SectionKind::Input,
                number: 1,
                source: GridError::Ragged {
                    row: 1,
                    expected: 3,
                    found: 2
                },
            })
        );
        assert_eq!(
            parse_sections("<INPUT_1>:\n<OUTPUT_1>:\n1\n"),
            Err(ParseError::InvalidGrid {
                kind: SectionKind::Input,
                number: 1,
                source: GridError::Empty,
            })
        );
    }

    mod pairs {
        use super::*;

        #[test]
        fn test_pairs_inputs_with_outputs() {
            let pairs = parse_pairs(TRAINING).unwrap();
            assert_eq!(pairs.len(), 2);
            assert_eq!(pairs[0].number, 1);
            assert_eq!(pairs[1].output.to_string(), "4444\n4400\n4144\n1090");
        }

        #[test]
        fn test_missing_output() {
            let text = "<INPUT_1>:\n1\n<INPUT_2>:\n2\n<OUTPUT_2>:\n3\n";
            assert_eq!(parse_pairs(text), Err(ParseError::MissingOutput { number: 1 }));
        }

        #[test]
        fn test_mismatched_output_number() {
            let text = "<INPUT_1>:\n1\n<OUTPUT_2>:\n3\n";
            assert_eq!(parse_pairs(text), Err(ParseError::MissingOutput { number: 1 }));
        }

        #[test]
        fn test_leading_output() {
            let text = "<OUTPUT_1>:\n3\n<INPUT_1>:\n1\n";
            assert_eq!(
                parse_pairs(text),
                Err(ParseError::UnexpectedOutput { number: 1 })
            );
        }
    }
}
