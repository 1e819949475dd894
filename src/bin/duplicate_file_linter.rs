//! `duplicate-file-linter` - reports files with byte-identical content

use clap::Parser;
use naming_guardian::cli::{run_duplicate_files, DuplicateFileCli};
use std::process;

fn main() {
    process::exit(run_duplicate_files(DuplicateFileCli::parse()));
}
