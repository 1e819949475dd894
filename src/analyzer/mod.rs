//! Checker orchestration for naming-guardian
//!
//! CDD Principle: Domain Services - each checker orchestrates one validation workflow
//! - Coordinates exclusion, per-path evaluation and result aggregation
//! - Paths that do not apply (missing, wrong kind, excluded) are skipped, never errors
//! - Every run is independent; one file's failure never aborts the rest

pub mod content;
pub mod rules;

use crate::analyzer::content::{is_empty_file, ContentIndex, ALLOWED_EMPTY_FILES};
use crate::analyzer::rules::RuleEngine;
use crate::config::LinterConfig;
use crate::domain::name::{Name, Subject};
use crate::domain::violations::{LintResult, ValidationReport, Violation};
use crate::patterns::{name_set, ExclusionFilter};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub use content::{content_digest, DuplicateSet};
pub use rules::{ConfiguredRules, DefaultRules, Finding, NamingPolicy, RuleEvaluator};

/// A checker that turns a list of paths into a validation report
pub trait Checker {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Check the given paths. Inapplicable paths are skipped.
    fn check_paths(&self, paths: &[PathBuf]) -> ValidationReport;

    /// Paths this checker evaluates when none are given, found under `root`
    fn discover(&self, root: &Path) -> Vec<PathBuf>;
}

/// Check explicit paths, or everything discovered under `root` when there are none
pub fn run_checker<C: Checker + ?Sized>(checker: &C, paths: &[PathBuf], root: &Path) -> ValidationReport {
    let start_time = Instant::now();

    let mut report = if paths.is_empty() {
        let discovered = checker.discover(root);
        tracing::debug!(
            "{}: discovered {} paths under {}",
            checker.name(),
            discovered.len(),
            root.display()
        );
        checker.check_paths(&discovered)
    } else {
        checker.check_paths(paths)
    };

    report.set_execution_time(start_time.elapsed().as_millis() as u64);
    tracing::debug!(
        "{}: {} paths checked, {} violations in {}ms",
        checker.name(),
        report.summary.paths_checked,
        report.summary.violation_count,
        report.summary.execution_time_ms
    );
    report
}

fn to_violations(path: &Path, findings: Vec<rules::Finding>) -> impl Iterator<Item = Violation> + '_ {
    findings.into_iter().map(move |f| Violation::new(f.rule_id, path, f.message))
}

/// Checks file names against naming conventions
#[derive(Debug)]
pub struct FileNameChecker {
    engine: RuleEngine,
    filter: ExclusionFilter,
}

impl FileNameChecker {
    pub fn new(engine: RuleEngine, filter: ExclusionFilter) -> Self {
        Self { engine, filter }
    }

    /// Build the checker for a run from its configuration
    pub fn from_config(
        config: &LinterConfig,
        filter: ExclusionFilter,
        allow_unicode: bool,
    ) -> LintResult<Self> {
        Ok(Self::new(RuleEngine::for_files(config, allow_unicode)?, filter))
    }

    /// Violations for a single file path, without touching the filesystem
    pub fn check_file(&self, path: &Path) -> Vec<Violation> {
        if self.filter.is_excluded(path) {
            return Vec::new();
        }
        let Some(file_name) = Name::file_name_of(path) else {
            return Vec::new();
        };

        let name = Name::file(file_name);
        let findings = self.engine.evaluate(&name, Subject::for_file(&name));
        to_violations(path, findings).collect()
    }
}

impl Checker for FileNameChecker {
    fn name(&self) -> &'static str {
        "file-names"
    }

    fn check_paths(&self, paths: &[PathBuf]) -> ValidationReport {
        let mut report = ValidationReport::new();

        for path in paths {
            if !path.is_file() || self.filter.is_excluded(path) {
                tracing::debug!("Skipping {}", path.display());
                continue;
            }
            report.record_checked();
            report.extend(self.check_file(path));
        }

        report
    }

    fn discover(&self, root: &Path) -> Vec<PathBuf> {
        self.filter.find_files(root)
    }
}

/// Checks directory names against naming conventions
#[derive(Debug)]
pub struct DirectoryChecker {
    engine: RuleEngine,
    filter: ExclusionFilter,
}

impl DirectoryChecker {
    pub fn new(engine: RuleEngine, filter: ExclusionFilter) -> Self {
        Self { engine, filter }
    }

    pub fn from_config(
        config: &LinterConfig,
        filter: ExclusionFilter,
        allow_unicode: bool,
    ) -> LintResult<Self> {
        Ok(Self::new(RuleEngine::for_directories(config, allow_unicode)?, filter))
    }

    /// Violations for a single directory path, without touching the filesystem
    pub fn check_directory(&self, path: &Path) -> Vec<Violation> {
        if self.filter.is_excluded_dir(path) {
            return Vec::new();
        }
        let Some(dir_name) = Name::file_name_of(path) else {
            return Vec::new();
        };

        let findings = self.engine.evaluate(&Name::directory(dir_name), Subject::Directory);
        to_violations(path, findings).collect()
    }
}

impl Checker for DirectoryChecker {
    fn name(&self) -> &'static str {
        "directories"
    }

    fn check_paths(&self, paths: &[PathBuf]) -> ValidationReport {
        let mut report = ValidationReport::new();

        for path in paths {
            if !path.is_dir() || self.filter.is_excluded_dir(path) {
                tracing::debug!("Skipping {}", path.display());
                continue;
            }
            report.record_checked();
            report.extend(self.check_directory(path));
        }

        report
    }

    fn discover(&self, root: &Path) -> Vec<PathBuf> {
        self.filter.find_directories(root)
    }
}

/// Reports zero-byte files that are not allowed to be empty
#[derive(Debug)]
pub struct EmptyFileChecker {
    filter: ExclusionFilter,
    allow_empty: bool,
    allowed_empty: HashSet<String>,
}

impl EmptyFileChecker {
    pub fn new(filter: ExclusionFilter, allow_empty: bool) -> Self {
        Self { filter, allow_empty, allowed_empty: name_set(ALLOWED_EMPTY_FILES) }
    }

    pub fn from_config(config: &LinterConfig, filter: ExclusionFilter, allow_empty: bool) -> Self {
        Self::new(filter, config.allow_empty(allow_empty))
    }

    /// Replace the names allowed to be empty
    pub fn with_allowed_empty(mut self, names: HashSet<String>) -> Self {
        self.allowed_empty = names;
        self
    }

    fn is_allowed_empty(&self, path: &Path) -> bool {
        Name::file_name_of(path).is_some_and(|name| self.allowed_empty.contains(&name))
    }
}

impl Checker for EmptyFileChecker {
    fn name(&self) -> &'static str {
        "empty-files"
    }

    fn check_paths(&self, paths: &[PathBuf]) -> ValidationReport {
        let mut report = ValidationReport::new();

        for path in paths {
            if !path.is_file() || self.filter.is_excluded(path) {
                tracing::debug!("Skipping {}", path.display());
                continue;
            }
            report.record_checked();

            let empty = match is_empty_file(path) {
                Ok(empty) => empty,
                Err(e) => {
                    tracing::debug!("Cannot stat {}: {}", path.display(), e);
                    continue;
                }
            };

            if empty && !self.allow_empty && !self.is_allowed_empty(path) {
                report.add_violation(Violation::new(
                    "empty-file",
                    path,
                    "File is empty (use --allow-empty to allow)",
                ));
            }
        }

        report
    }

    fn discover(&self, root: &Path) -> Vec<PathBuf> {
        self.filter.find_files(root)
    }
}

/// Reports files whose content is byte-identical to another file
#[derive(Debug)]
pub struct DuplicateFileChecker {
    filter: ExclusionFilter,
    allow_duplicates: bool,
}

impl DuplicateFileChecker {
    pub fn new(filter: ExclusionFilter, allow_duplicates: bool) -> Self {
        Self { filter, allow_duplicates }
    }

    pub fn from_config(config: &LinterConfig, filter: ExclusionFilter, allow_duplicates: bool) -> Self {
        Self::new(filter, config.allow_duplicates(allow_duplicates))
    }
}

impl Checker for DuplicateFileChecker {
    fn name(&self) -> &'static str {
        "duplicate-files"
    }

    fn check_paths(&self, paths: &[PathBuf]) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.allow_duplicates {
            return report;
        }

        let mut index = ContentIndex::new();
        for path in paths {
            if !path.is_file() || self.filter.is_excluded(path) {
                tracing::debug!("Skipping {}", path.display());
                continue;
            }
            if index.index_file(path) {
                report.record_checked();
            }
        }

        for set in index.duplicate_sets() {
            report.add_violation(Violation::new(
                "duplicate-original",
                &set.original,
                "Duplicate file found (original)",
            ));
            for duplicate in &set.duplicates {
                report.add_violation(Violation::new(
                    "duplicate",
                    duplicate,
                    format!("Duplicate of {}", set.original.display()),
                ));
            }
        }

        report
    }

    fn discover(&self, root: &Path) -> Vec<PathBuf> {
        self.filter.find_files(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn lines(report: &ValidationReport, root: &Path) -> Vec<String> {
        report
            .violations
            .iter()
            .map(|v| {
                let path = v.path.strip_prefix(root).unwrap_or(&v.path);
                let message = v.message.replace(&format!("{}/", root.display()), "");
                format!("{}: {}", path.display(), message)
            })
            .collect()
    }

    #[test]
    fn test_file_name_checker_skips_missing_and_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("Legacy Stuff")).unwrap();
        fs::write(root.join("Bad Name.md"), "x").unwrap();
        fs::write(root.join("Legacy Stuff/Other File.md"), "x").unwrap();

        let filter = ExclusionFilter::new(["Legacy Stuff"]).unwrap();
        let checker = FileNameChecker::new(RuleEngine::default_for_files(false), filter);
        let report = checker.check_paths(&[
            root.join("Bad Name.md"),
            root.join("Legacy Stuff/Other File.md"),
            root.join("does-not-exist.md"),
            root.join("Legacy Stuff"),
        ]);

        assert_eq!(report.summary.paths_checked, 1);
        assert!(report.violations.iter().all(|v| v.path == root.join("Bad Name.md")));
        assert!(report.violations.iter().any(|v| v.rule_id == "spaces"));
    }

    #[test]
    fn test_directory_checker_walks_tree() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src/UserService")).unwrap();
        fs::create_dir_all(root.join("node_modules/BadPackage")).unwrap();
        fs::create_dir_all(root.join(".github/workflows")).unwrap();

        let checker = DirectoryChecker::new(
            RuleEngine::default_for_directories(false),
            ExclusionFilter::with_defaults(),
        );
        let report = run_checker(&checker, &[], root);

        assert_eq!(
            lines(&report, root),
            vec![
                "src/UserService: Directory should use kebab-case (use hyphens(-) between words, e.g., user-service/)",
                "src/UserService: Directory name should be lowercase",
            ]
        );
        // .github, .github/workflows and src are evaluated; node_modules is never entered
        assert_eq!(report.summary.paths_checked, 4);
    }

    #[test]
    fn test_directory_checker_ignores_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("NotADir.md"), "x").unwrap();

        let checker = DirectoryChecker::new(
            RuleEngine::default_for_directories(false),
            ExclusionFilter::with_defaults(),
        );
        let report = checker.check_paths(&[temp_dir.path().join("NotADir.md")]);

        assert!(!report.has_violations());
        assert_eq!(report.summary.paths_checked, 0);
    }

    #[test]
    fn test_empty_file_checker() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("pkg")).unwrap();
        fs::write(root.join("pkg/__init__.py"), "").unwrap();
        fs::write(root.join("pkg/empty.py"), "").unwrap();
        fs::write(root.join("pkg/main.py"), "print()").unwrap();

        let checker = EmptyFileChecker::new(ExclusionFilter::with_defaults(), false);
        let report = run_checker(&checker, &[], root);
        assert_eq!(lines(&report, root), vec!["pkg/empty.py: File is empty (use --allow-empty to allow)"]);

        let allowed = EmptyFileChecker::new(ExclusionFilter::with_defaults(), true);
        assert!(!run_checker(&allowed, &[], root).has_violations());

        let custom = EmptyFileChecker::new(ExclusionFilter::with_defaults(), false)
            .with_allowed_empty(name_set(&["empty.py"]));
        assert_eq!(
            lines(&custom.check_paths(&[root.join("pkg/__init__.py")]), root),
            vec!["pkg/__init__.py: File is empty (use --allow-empty to allow)"]
        );
    }

    #[test]
    fn test_empty_file_config_overrides_flag() {
        let temp_dir = TempDir::new().unwrap();
        let empty = temp_dir.path().join("notes.md");
        fs::write(&empty, "").unwrap();

        let config = LinterConfig::load_from_str("empty-files:\n  allow-empty: true\n").unwrap();
        let checker = EmptyFileChecker::from_config(&config, ExclusionFilter::with_defaults(), false);

        assert!(!checker.check_paths(&[empty]).has_violations());
    }

    #[test]
    fn test_duplicate_file_checker() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("b.txt"), "identical content").unwrap();
        fs::write(root.join("a.txt"), "identical content").unwrap();
        fs::write(root.join("c.txt"), "something else").unwrap();

        let checker = DuplicateFileChecker::new(ExclusionFilter::with_defaults(), false);
        let report = checker.check_paths(&[root.join("b.txt"), root.join("c.txt"), root.join("a.txt")]);

        assert_eq!(
            lines(&report, root),
            vec!["a.txt: Duplicate file found (original)", "b.txt: Duplicate of a.txt"]
        );
        assert_eq!(report.exit_code(), 1);

        let reversed = checker.check_paths(&[root.join("a.txt"), root.join("c.txt"), root.join("b.txt")]);
        assert_eq!(report.violations, reversed.violations);
    }

    #[test]
    fn test_duplicates_allowed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.txt"), "same").unwrap();
        fs::write(root.join("b.txt"), "same").unwrap();

        let config = LinterConfig::load_from_str("duplicate-files:\n  allow-duplicates: true\n").unwrap();
        let checker = DuplicateFileChecker::from_config(&config, ExclusionFilter::with_defaults(), false);

        assert!(!run_checker(&checker, &[], root).has_violations());
    }

    #[test]
    fn test_runs_are_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("Docs/guides")).unwrap();
        fs::write(root.join("Docs/guides/setup.md"), "same").unwrap();
        fs::write(root.join("Docs/setup.md"), "same").unwrap();
        fs::write(root.join("Docs/empty.md"), "").unwrap();

        let checkers: Vec<Box<dyn Checker>> = vec![
            Box::new(DirectoryChecker::new(
                RuleEngine::default_for_directories(false),
                ExclusionFilter::with_defaults(),
            )),
            Box::new(EmptyFileChecker::new(ExclusionFilter::with_defaults(), false)),
            Box::new(DuplicateFileChecker::new(ExclusionFilter::with_defaults(), false)),
        ];

        for checker in &checkers {
            let first = run_checker(checker.as_ref(), &[], root);
            let second = run_checker(checker.as_ref(), &[], root);
            assert!(first.has_violations(), "{}", checker.name());
            assert_eq!(first.violations, second.violations);
            assert_eq!(first.exit_code(), second.exit_code());
        }
    }
}
