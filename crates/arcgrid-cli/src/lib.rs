//! Command-line front end for arcgrid.
//!
//! The `arcgrid` binary has two subcommands:
//!
//! - `detect`: finds the dividers shared by the input grids of each puzzle
//!   file and prints them as prompt hints or JSON records.
//! - `render`: turns an ARC JSON task into the `training.txt`, `test.txt` and
//!   `solution.txt` puzzle text files read by prompt pipelines.

use std::{fs, path::Path};

pub use self::{
    args::{Args, Command},
    error::CliError,
};

mod args;
pub mod detect;
mod error;
pub mod render;

/// Runs the command described by `args`.
///
/// Returns `Ok(false)` when the command ran but at least one file failed.
///
/// # Errors
///
/// Returns an error if the command cannot run at all.
pub fn run(args: &Args) -> Result<bool, CliError> {
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match &args.command {
        Command::Detect { files, json } => Ok(detect::run(files, *json)),
        Command::Render { task, out } => {
            render::run(task, out)?;
            Ok(true)
        }
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    const PUZZLE: &str = "\
<INPUT_1>:
152
354
<OUTPUT_1>:
1
";

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("arcgrid").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_detect_succeeds_on_valid_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzle.txt");
        fs::write(&path, PUZZLE).unwrap();
        let path = path.to_str().unwrap();

        assert!(matches!(run(&parse(&["detect", path])), Ok(true)));
        assert!(matches!(run(&parse(&["detect", "--json", path])), Ok(true)));
    }

    #[test]
    fn test_detect_reports_failed_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("puzzle.txt");
        fs::write(&good, PUZZLE).unwrap();
        let bad = dir.path().join("empty.txt");
        fs::write(&bad, "no sections here").unwrap();

        let args = parse(&["detect", good.to_str().unwrap(), bad.to_str().unwrap()]);
        assert!(matches!(run(&args), Ok(false)));
    }

    #[test]
    fn test_render_writes_into_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let task = dir.path().join("task.json");
        fs::write(&task, r#"{"train": [{"input": [[1, 5]], "output": [[1]]}]}"#).unwrap();
        let out = dir.path().join("out");

        let args = parse(&[
            "render",
            task.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ]);
        assert!(matches!(run(&args), Ok(true)));
        assert!(out.join(render::TRAINING_FILE).is_file());
        assert!(out.join(render::TEST_FILE).is_file());
    }

    #[test]
    fn test_render_missing_task_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let task = dir.path().join("missing.json");
        let args = parse(&["render", task.to_str().unwrap()]);
        assert!(matches!(run(&args), Err(CliError::Read { .. })));
    }
}
