//! The `detect` subcommand.

use std::path::{Path, PathBuf};

use arcgrid_core::{DividerResult, Grid, detect_across_grids};
use arcgrid_puzzle::{Task, render, text};
use rayon::prelude::*;
use serde::Serialize;

use crate::{CliError, read_file};

/// JSON line printed per file with `--json`.
#[derive(Debug, Serialize)]
struct DetectRecord<'a> {
    file: &'a Path,
    #[serde(flatten)]
    result: &'a DividerResult,
}

/// Detects dividers in every file and prints one line per file, in argument
/// order.
///
/// Returns `false` if any file failed; failures are logged and do not stop
/// the remaining files.
pub fn run(files: &[PathBuf], json: bool) -> bool {
    let outcomes: Vec<_> = files
        .par_iter()
        .map(|path| (path, detect_file(path)))
        .collect();

    let mut all_ok = true;
    for (path, outcome) in outcomes {
        match outcome.and_then(|result| report_line(path, &result, json)) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                log::error!("{}: {err}", path.display());
                all_ok = false;
            }
        }
    }
    all_ok
}

/// Reads a puzzle file and detects the dividers shared by its input grids.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, has no input grids,
/// or its grids disagree on the divider direction.
pub fn detect_file(path: &Path) -> Result<DividerResult, CliError> {
    let contents = read_file(path)?;
    let grids = input_grids(path, &contents)?;
    log::debug!("{}: {} input grids", path.display(), grids.len());
    Ok(detect_across_grids(&grids)?)
}

/// Extracts the input grids of a puzzle file.
///
/// `.json` files are ARC tasks and contribute their training inputs; other
/// files are puzzle text.
///
/// # Errors
///
/// Returns an error if the contents cannot be parsed.
pub fn input_grids(path: &Path, contents: &str) -> Result<Vec<Grid>, CliError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(Task::from_json(contents)?.train_inputs()?)
    } else {
        Ok(text::parse_input_grids(contents)?)
    }
}

fn report_line(path: &Path, result: &DividerResult, json: bool) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string(&DetectRecord { file: path, result })?);
    }
    let hint = render::divider_hint(result).unwrap_or_else(|| "no divider".to_owned());
    Ok(format!("{}: {hint}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use arcgrid_core::{Direction, DividerError};

    use super::*;

    const TRAINING: &str = "\
<INPUT_1>:
0042000
4402919
<OUTPUT_1>:
04

<INPUT_2>:
4442019
0002900
<OUTPUT_2>:
40
";

    #[test]
    fn test_detect_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("training.txt");
        fs::write(&path, TRAINING).unwrap();

        let result = detect_file(&path).unwrap();
        assert_eq!(result, DividerResult::new(Direction::Column, vec![3]));
        assert_eq!(
            report_line(&path, &result, false).unwrap(),
            format!(
                "{}: NOTE: grid is separated by col at indexes 3",
                path.display()
            )
        );
        assert!(run(&[path], false));
    }

    #[test]
    fn test_detect_json_task() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.JSON");
        fs::write(
            &path,
            r#"{"train": [
                {"input": [[1, 2], [5, 5], [3, 4]], "output": [[1]]},
                {"input": [[6, 7], [5, 5], [8, 9]], "output": [[6]]}
            ]}"#,
        )
        .unwrap();

        let result = detect_file(&path).unwrap();
        assert_eq!(result, DividerResult::new(Direction::Row, vec![1]));
    }

    #[test]
    fn test_json_report_line() {
        let result = DividerResult::new(Direction::Column, vec![4]);
        assert_eq!(
            report_line(Path::new("a.txt"), &result, true).unwrap(),
            r#"{"file":"a.txt","direction":"col","indexes":[4],"divider":true}"#
        );
        assert_eq!(
            report_line(Path::new("a.txt"), &DividerResult::none(), false).unwrap(),
            "a.txt: no divider"
        );
    }

    #[test]
    fn test_task_without_training_examples() {
        let grids = input_grids(Path::new("t.json"), r#"{"test": []}"#).unwrap();
        assert!(matches!(
            detect_across_grids(&grids),
            Err(DividerError::EmptyInput)
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(matches!(detect_file(&missing), Err(CliError::Read { .. })));
        assert!(!run(&[missing], false));
    }
}
