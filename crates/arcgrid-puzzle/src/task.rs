//! ARC JSON task files.
//!
//! A task holds training and test examples whose grids are matrices of small
//! integers (colors 0-9):
//!
//! ```json
//! {
//!   "train": [{ "input": [[0, 2], [4, 2]], "output": [[0], [4]] }],
//!   "test": [{ "input": [[1, 2], [3, 2]], "output": [[1], [3]] }]
//! }
//! ```

use arcgrid_core::Grid;
use serde::{Deserialize, Serialize};

use crate::TaskError;

/// A row-major matrix of numeric cells, as stored in task files.
pub type CellMatrix = Vec<Vec<u8>>;

/// One input/output example of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// The input grid.
    pub input: CellMatrix,
    /// The expected output grid. Hidden test examples omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<CellMatrix>,
}

impl Example {
    /// Converts the input matrix into a character grid.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell is outside 0-9 or the matrix is not rectangular.
    pub fn input_grid(&self) -> Result<Grid, TaskError> {
        to_grid(&self.input)
    }

    /// Converts the output matrix into a character grid, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell is outside 0-9 or the matrix is not rectangular.
    pub fn output_grid(&self) -> Result<Option<Grid>, TaskError> {
        self.output.as_deref().map(to_grid).transpose()
    }
}

/// An ARC task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Training examples.
    #[serde(default)]
    pub train: Vec<Example>,
    /// Test examples.
    #[serde(default)]
    pub test: Vec<Example>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TaskFile {
    Task(Task),
    Examples(Vec<Example>),
}

impl Task {
    /// Parses a task from JSON.
    ///
    /// Besides the `{"train": [...], "test": [...]}` object, a bare array of
    /// examples is accepted and read as training examples.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Json`] if the text is not a task.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgrid_puzzle::Task;
    ///
    /// let task = Task::from_json(r#"{"train": [{"input": [[1, 2]], "output": [[3]]}]}"#)?;
    /// assert_eq!(task.train.len(), 1);
    /// assert!(task.test.is_empty());
    /// assert_eq!(task.train[0].input_grid()?.to_string(), "12");
    /// # Ok::<(), arcgrid_puzzle::TaskError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, TaskError> {
        let task = match serde_json::from_str(json)? {
            TaskFile::Task(task) => task,
            TaskFile::Examples(train) => Task {
                train,
                test: vec![],
            },
        };
        log::debug!(
            "loaded task with {} training and {} test examples",
            task.train.len(),
            task.test.len()
        );
        Ok(task)
    }

    /// Returns the input grids of all training examples.
    ///
    /// # Errors
    ///
    /// Returns an error if any input cannot be converted into a grid.
    pub fn train_inputs(&self) -> Result<Vec<Grid>, TaskError> {
        self.train.iter().map(Example::input_grid).collect()
    }

    /// Returns `true` if every test example carries an output.
    #[must_use]
    pub fn has_test_outputs(&self) -> bool {
        self.test.iter().all(|example| example.output.is_some())
    }
}

fn to_grid(cells: &[Vec<u8>]) -> Result<Grid, TaskError> {
    let rows = cells
        .iter()
        .enumerate()
        .map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(|(col, &value)| {
                    char::from_digit(u32::from(value), 10)
                        .ok_or(TaskError::InvalidCell { row, col, value })
                })
                .collect::<Result<Vec<char>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Grid::try_from(rows)?)
}

#[cfg(test)]
mod tests {
    use arcgrid_core::GridError;

    use super::*;

    #[test]
    fn test_from_json_object() {
        let task = Task::from_json(
            r#"{
                "train": [
                    {"input": [[0, 2, 1], [4, 2, 0]], "output": [[0], [4]]},
                    {"input": [[3, 2, 3], [1, 2, 1]], "output": [[3], [1]]}
                ],
                "test": [{"input": [[5, 2, 5]]}]
            }"#,
        )
        .unwrap();
        assert_eq!(task.train.len(), 2);
        assert_eq!(task.test[0].output, None);
        assert!(!task.has_test_outputs());

        let inputs = task.train_inputs().unwrap();
        assert_eq!(inputs[0].to_string(), "021\n420");
        assert_eq!(inputs[1].get(1, 2), Some('1'));
    }

    #[test]
    fn test_from_json_bare_array() {
        let task = Task::from_json(r#"[{"input": [[1]], "output": [[2]]}]"#).unwrap();
        assert_eq!(task.train.len(), 1);
        assert!(task.test.is_empty());
        assert!(task.has_test_outputs());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Task::from_json("{\"train\": 3}"), Err(TaskError::Json(_))));
        assert!(matches!(Task::from_json("not json"), Err(TaskError::Json(_))));
    }

    #[test]
    fn test_rejects_multi_digit_cells() {
        let example = Example {
            input: vec![vec![1, 2], vec![3, 10]],
            output: None,
        };
        assert!(matches!(
            example.input_grid(),
            Err(TaskError::InvalidCell {
                row: 1,
                col: 1,
                value: 10
            })
        ));
    }

    #[test]
    fn test_rejects_ragged_matrix() {
        let example = Example {
            input: vec![vec![1, 2], vec![3]],
            output: Some(vec![]),
        };
        assert!(matches!(
            example.input_grid(),
            Err(TaskError::Grid(GridError::Ragged { row: 1, .. }))
        ));
        assert!(matches!(
            example.output_grid(),
            Err(TaskError::Grid(GridError::Empty))
        ));
    }
}
