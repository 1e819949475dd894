//! `filename-linter` - checks file names passed by pre-commit

use clap::Parser;
use naming_guardian::cli::{run_file_names, FileNameCli};
use std::process;

fn main() {
    process::exit(run_file_names(FileNameCli::parse()));
}
