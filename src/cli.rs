//! Command-line front end shared by the four linter binaries
//!
//! CDD Principle: Application Layer - CLI coordinates user interactions with domain services
//! - Translates arguments into a configured checker and a report formatter
//! - Handles external concerns like logging setup, stderr output and process exit codes
//! - Each binary is a thin `main` over one `run_*` function here

use crate::analyzer::{
    run_checker, Checker, DirectoryChecker, DuplicateFileChecker, EmptyFileChecker, FileNameChecker,
};
use crate::config::LinterConfig;
use crate::domain::violations::{LintResult, ValidationReport};
use crate::patterns::ExclusionFilter;
use crate::report::{OutputFormat, ReportFormatter};
use clap::{ArgAction, Args, Parser, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Arguments every linter accepts
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Paths to check (walks the current directory when omitted)
    pub paths: Vec<PathBuf>,

    /// Additional exclude pattern (regular expression, repeatable)
    #[arg(long, action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Configuration file path (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Copy, Clone, ValueEnum, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

impl CommonArgs {
    fn load_config(&self) -> LinterConfig {
        LinterConfig::load_or_default(self.config.as_deref())
    }

    /// Defaults, then `--exclude` patterns, then configured patterns
    fn exclusion_filter(&self, config: &LinterConfig) -> LintResult<ExclusionFilter> {
        ExclusionFilter::new(self.exclude.iter().chain(config.exclude_patterns.iter()))
    }

    fn formatter(&self) -> ReportFormatter {
        ReportFormatter::new(self.format.into())
    }
}

/// Check file names against naming conventions
#[derive(Parser, Debug)]
#[command(name = "filename-linter", version)]
#[command(about = "Check file names against naming conventions")]
pub struct FileNameCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Allow non-ASCII letters in file names
    #[arg(long)]
    pub allow_unicode: bool,

    /// Accepted for hook compatibility; files are never renamed
    #[arg(long)]
    pub fix: bool,
}

/// Check directory names against naming conventions
#[derive(Parser, Debug)]
#[command(name = "directory-linter", version)]
#[command(about = "Check directory names against naming conventions")]
pub struct DirectoryCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Allow non-ASCII letters in directory names
    #[arg(long)]
    pub allow_unicode: bool,
}

/// Report empty files
#[derive(Parser, Debug)]
#[command(name = "empty-file-linter", version)]
#[command(about = "Report files with no content")]
pub struct EmptyFileCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Allow every file to be empty
    #[arg(long)]
    pub allow_empty: bool,
}

/// Report files with identical content
#[derive(Parser, Debug)]
#[command(name = "duplicate-file-linter", version)]
#[command(about = "Report files whose content duplicates another file")]
pub struct DuplicateFileCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Allow duplicate files
    #[arg(long)]
    pub allow_duplicates: bool,
}

/// Initialize the stderr subscriber. `RUST_LOG` takes over unless `--verbose` is set.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when running in-process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Run the file-name linter and return its exit code
pub fn run_file_names(cli: FileNameCli) -> i32 {
    init_logging(cli.common.verbose);
    exit_code(execute_file_names(&cli))
}

/// Run the directory linter and return its exit code
pub fn run_directories(cli: DirectoryCli) -> i32 {
    init_logging(cli.common.verbose);
    exit_code(execute_directories(&cli))
}

/// Run the empty-file linter and return its exit code
pub fn run_empty_files(cli: EmptyFileCli) -> i32 {
    init_logging(cli.common.verbose);
    exit_code(execute_empty_files(&cli))
}

/// Run the duplicate-file linter and return its exit code
pub fn run_duplicate_files(cli: DuplicateFileCli) -> i32 {
    init_logging(cli.common.verbose);
    exit_code(execute_duplicate_files(&cli))
}

pub fn execute_file_names(cli: &FileNameCli) -> anyhow::Result<i32> {
    let common = &cli.common;
    if common.paths.is_empty() {
        tracing::info!("No files to check");
        return Ok(0);
    }
    if cli.fix {
        tracing::debug!("--fix has no effect; files are never renamed");
    }

    let config = common.load_config();
    let filter = common.exclusion_filter(&config)?;
    let checker = FileNameChecker::from_config(&config, filter, cli.allow_unicode)?;
    finish(common, &checker)
}

pub fn execute_directories(cli: &DirectoryCli) -> anyhow::Result<i32> {
    let common = &cli.common;
    let config = common.load_config();
    let filter = common.exclusion_filter(&config)?;
    let checker = DirectoryChecker::from_config(&config, filter, cli.allow_unicode)?;
    finish(common, &checker)
}

pub fn execute_empty_files(cli: &EmptyFileCli) -> anyhow::Result<i32> {
    let common = &cli.common;
    let config = common.load_config();
    let filter = common.exclusion_filter(&config)?;
    let checker = EmptyFileChecker::from_config(&config, filter, cli.allow_empty);
    finish(common, &checker)
}

pub fn execute_duplicate_files(cli: &DuplicateFileCli) -> anyhow::Result<i32> {
    let common = &cli.common;
    let config = common.load_config();
    let filter = common.exclusion_filter(&config)?;
    let checker = DuplicateFileChecker::from_config(&config, filter, cli.allow_duplicates);
    finish(common, &checker)
}

/// Check, write violations to stderr and map the report to an exit code
fn finish<C: Checker>(common: &CommonArgs, checker: &C) -> anyhow::Result<i32> {
    let report = check(common, checker);
    common.formatter().write_report(&report, io::stderr().lock())?;
    Ok(report.exit_code())
}

fn check<C: Checker>(common: &CommonArgs, checker: &C) -> ValidationReport {
    run_checker(checker, &common.paths, Path::new("."))
}

fn exit_code(result: anyhow::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}
