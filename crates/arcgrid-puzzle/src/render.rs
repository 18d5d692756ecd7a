//! Rendering tasks into puzzle text and divider results into prompt hints.

use arcgrid_core::DividerResult;

use crate::{Example, Task, TaskError};

/// Renders the training examples as puzzle text.
///
/// Each example becomes an `<INPUT_n>:` section followed by an `<OUTPUT_n>:`
/// section and a blank line, numbered from 1.
///
/// # Errors
///
/// Returns an error if a training example has no output or a grid is invalid.
///
/// # Examples
///
/// ```
/// use arcgrid_puzzle::{Task, render};
///
/// let task = Task::from_json(r#"{"train": [{"input": [[1, 2]], "output": [[3]]}]}"#)?;
/// assert_eq!(
///     render::training_text(&task)?,
///     "<INPUT_1>:\n12\n<OUTPUT_1>:\n3\n\n"
/// );
/// # Ok::<(), arcgrid_puzzle::TaskError>(())
/// ```
pub fn training_text(task: &Task) -> Result<String, TaskError> {
    pairs_text(&task.train, "train")
}

/// Renders the test examples with their outputs, in the same layout as
/// [`training_text`].
///
/// # Errors
///
/// Returns an error if a test example has no output or a grid is invalid.
pub fn solution_text(task: &Task) -> Result<String, TaskError> {
    pairs_text(&task.test, "test")
}

/// Renders only the test inputs.
///
/// # Errors
///
/// Returns an error if a grid is invalid.
pub fn test_text(task: &Task) -> Result<String, TaskError> {
    task.test
        .iter()
        .enumerate()
        .map(|(i, example)| -> Result<String, TaskError> {
            let input = example.input_grid()?;
            Ok(format!("<INPUT_{}>:\n{input}\n\n", i + 1))
        })
        .collect()
}

fn pairs_text(examples: &[Example], section: &'static str) -> Result<String, TaskError> {
    examples
        .iter()
        .enumerate()
        .map(|(index, example)| -> Result<String, TaskError> {
            let number = index + 1;
            let input = example.input_grid()?;
            let output = example
                .output_grid()?
                .ok_or(TaskError::MissingOutput { section, index })?;
            Ok(format!(
                "<INPUT_{number}>:\n{input}\n<OUTPUT_{number}>:\n{output}\n\n"
            ))
        })
        .collect()
}

/// Renders the prompt note describing where a puzzle's dividers are.
///
/// Returns `None` when no divider was found.
///
/// # Examples
///
/// ```
/// use arcgrid_core::{Direction, DividerResult};
/// use arcgrid_puzzle::render::divider_hint;
///
/// let result = DividerResult::new(Direction::Row, vec![3, 7]);
/// assert_eq!(
///     divider_hint(&result).as_deref(),
///     Some("NOTE: grid is separated by row at indexes 3,7")
/// );
/// assert_eq!(divider_hint(&DividerResult::none()), None);
/// ```
#[must_use]
pub fn divider_hint(result: &DividerResult) -> Option<String> {
    let direction = result.direction()?;
    let indexes = result
        .indexes()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    Some(format!(
        "NOTE: grid is separated by {direction} at indexes {indexes}"
    ))
}
