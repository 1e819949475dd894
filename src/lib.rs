//! Naming Guardian - pre-commit hooks for naming conventions and repository hygiene
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure naming rules and pattern matching separated from filesystem access
//! - Checkers orchestrate exclusion, evaluation and aggregation into reports
//! - The four binaries are thin wrappers over the `cli` module

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod domain;
pub mod patterns;
pub mod report;

// Re-export main types for convenient access
pub use domain::name::{ExtensionClass, Name, Subject};
pub use domain::violations::{LintError, LintResult, ValidationReport, ValidationSummary, Violation};

pub use config::{FileRules, LinterConfig, NameRules};

pub use analyzer::rules::RuleEngine;
pub use analyzer::{
    run_checker, Checker, DirectoryChecker, DuplicateFileChecker, EmptyFileChecker, FileNameChecker,
};

pub use patterns::{Convention, ExclusionFilter};

pub use report::{OutputFormat, ReportFormatter};
