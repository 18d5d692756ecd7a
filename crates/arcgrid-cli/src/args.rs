//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Detect grid dividers in ARC puzzles and render puzzle text.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Worker threads used to process files in parallel.
    #[arg(long, global = true, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of `arcgrid`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Detect the dividers shared by the input grids of each puzzle file.
    ///
    /// Files ending in `.json` are read as ARC tasks (training inputs are
    /// used); anything else is read as `<INPUT_n>:` puzzle text.
    Detect {
        /// Puzzle files to analyze.
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Print one JSON record per file instead of prompt hints.
        #[arg(long)]
        json: bool,
    },
    /// Render an ARC JSON task into puzzle text files.
    Render {
        /// Task file to render.
        #[arg(value_name = "TASK")]
        task: PathBuf,

        /// Directory receiving `training.txt`, `test.txt` and `solution.txt`.
        #[arg(long, value_name = "DIR", default_value = "working")]
        out: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_detect() {
        let args =
            Args::try_parse_from(["arcgrid", "detect", "a.txt", "b.json", "--json", "--threads", "2"])
                .unwrap();
        assert_eq!(args.threads, Some(2));
        let Command::Detect { files, json } = args.command else {
            panic!("expected detect");
        };
        assert_eq!(files, [PathBuf::from("a.txt"), PathBuf::from("b.json")]);
        assert!(json);
    }

    #[test]
    fn test_detect_requires_files() {
        assert!(Args::try_parse_from(["arcgrid", "detect"]).is_err());
    }

    #[test]
    fn test_render_defaults_to_working_dir() {
        let args = Args::try_parse_from(["arcgrid", "render", "task.json"]).unwrap();
        let Command::Render { task, out } = args.command else {
            panic!("expected render");
        };
        assert_eq!(task, PathBuf::from("task.json"));
        assert_eq!(out, PathBuf::from("working"));
    }
}
