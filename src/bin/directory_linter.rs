//! `directory-linter` - checks directory names, walking the current directory when no paths are given

use clap::Parser;
use naming_guardian::cli::{run_directories, DirectoryCli};
use std::process;

fn main() {
    process::exit(run_directories(DirectoryCli::parse()));
}
