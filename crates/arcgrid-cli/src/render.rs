//! The `render` subcommand.

use std::{fs, path::Path};

use arcgrid_puzzle::{Task, render};

use crate::{CliError, read_file};

/// Name of the training puzzle text file.
pub const TRAINING_FILE: &str = "training.txt";
/// Name of the test-input puzzle text file.
pub const TEST_FILE: &str = "test.txt";
/// Name of the test input/output puzzle text file.
pub const SOLUTION_FILE: &str = "solution.txt";

/// Renders the ARC task at `task_path` into puzzle text files under `out`.
///
/// `out` is created if needed. `solution.txt` is only written when every test
/// example carries an output.
///
/// # Errors
///
/// Returns an error if the task cannot be read or rendered, or a file cannot
/// be written.
pub fn run(task_path: &Path, out: &Path) -> Result<(), CliError> {
    let task = Task::from_json(&read_file(task_path)?)?;

    fs::create_dir_all(out).map_err(|source| CliError::Write {
        path: out.to_owned(),
        source,
    })?;
    write_file(&out.join(TRAINING_FILE), &render::training_text(&task)?)?;
    write_file(&out.join(TEST_FILE), &render::test_text(&task)?)?;
    if task.has_test_outputs() {
        write_file(&out.join(SOLUTION_FILE), &render::solution_text(&task)?)?;
    } else {
        log::warn!(
            "{}: test outputs missing, skipping {SOLUTION_FILE}",
            task_path.display()
        );
    }

    log::info!(
        "rendered {} ({} training, {} test examples) into {}",
        task_path.display(),
        task.train.len(),
        task.test.len(),
        out.display()
    );
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_owned(),
        source,
    })
}
