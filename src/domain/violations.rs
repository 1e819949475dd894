//! Core domain models for naming and hygiene violations
//!
//! Architecture: Rich Domain Models - Violations are values with behavior, not just data
//! - Violations know how to render themselves the way pre-commit expects
//! - ValidationReport acts as an aggregate root managing collections of violations
//! - Findings are never errors; errors are reserved for runs that cannot start

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A naming or hygiene violation detected during a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Identifier of the rule that produced this violation
    pub rule_id: String,
    /// Path the violation was found on, as it was given or discovered
    pub path: PathBuf,
    /// Human-readable description of the violation
    pub message: String,
}

impl Violation {
    /// Create a new violation
    pub fn new(rule_id: impl Into<String>, path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Format violation for display (`<path>: <message>`)
    pub fn format_display(&self) -> String {
        format!("{}: {}", self.path.display(), self.message)
    }
}

/// Summary statistics for a validation report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    /// Number of paths that were actually evaluated
    pub paths_checked: usize,
    /// Number of violations found
    pub violation_count: usize,
    /// Total execution time in milliseconds, left out of rendered reports
    #[serde(skip)]
    pub execution_time_ms: u64,
}

/// Complete validation report for one checker run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// All violations in the order they were found
    pub violations: Vec<Violation>,
    /// Summary statistics
    pub summary: ValidationSummary,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation to the report
    pub fn add_violation(&mut self, violation: Violation) {
        self.summary.violation_count += 1;
        self.violations.push(violation);
    }

    /// Add several violations, keeping their order
    pub fn extend<I: IntoIterator<Item = Violation>>(&mut self, violations: I) {
        for violation in violations {
            self.add_violation(violation);
        }
    }

    /// Whether the report contains any violations
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Exit code a pre-commit hook should return for this report
    pub fn exit_code(&self) -> i32 {
        if self.has_violations() {
            1
        } else {
            0
        }
    }

    /// Record that one more path was evaluated
    pub fn record_checked(&mut self) {
        self.summary.paths_checked += 1;
    }

    /// Set the execution time
    pub fn set_execution_time(&mut self, duration_ms: u64) {
        self.summary.execution_time_ms = duration_ms;
    }

    /// Display lines for every violation, in report order
    pub fn display_lines(&self) -> Vec<String> {
        self.violations.iter().map(Violation::format_display).collect()
    }
}

/// Error types that can stop a run before any finding is reported
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File could not be read or accessed
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Pattern compilation failed
    #[error("Pattern error: {message}")]
    Pattern { message: String },
}

impl LintError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create a pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern { message: message.into() }
    }
}

/// Result type for linter operations
pub type LintResult<T> = Result<T, LintError>;
