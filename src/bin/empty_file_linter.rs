//! `empty-file-linter` - reports zero-byte files

use clap::Parser;
use naming_guardian::cli::{run_empty_files, EmptyFileCli};
use std::process;

fn main() {
    process::exit(run_empty_files(EmptyFileCli::parse()));
}
