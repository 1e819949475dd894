//! Path exclusion using regular expressions
//!
//! Architectural Principle: Service Layer - ExclusionFilter owns every decision about which paths are visited
//! - Patterns are precompiled once, when the filter is built
//! - A path is excluded when any pattern is found anywhere in it
//! - Tree walks prune excluded directories before descending into them

use crate::domain::violations::{LintError, LintResult};
use regex::Regex;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Exclusions that are always active: version control, byte-cache, test-cache and dependency directories
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] =
    &[r"\.git/", r"__pycache__", r"\.pytest_cache", r"node_modules"];

const VCS_DIRECTORY: &str = ".git";

/// Ordered set of compiled exclusion patterns
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    patterns: Vec<Regex>,
}

impl ExclusionFilter {
    /// Create a filter from the defaults followed by `extra` patterns, in order
    pub fn new<I, S>(extra: I) -> LintResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self { patterns: Vec::new() };

        for pattern in DEFAULT_EXCLUDE_PATTERNS {
            filter.add_pattern(pattern)?;
        }
        for pattern in extra {
            filter.add_pattern(pattern.as_ref())?;
        }

        Ok(filter)
    }

    /// Create a filter holding only the default exclusions
    pub fn with_defaults() -> Self {
        Self {
            patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .filter_map(|pattern| Regex::new(pattern).ok())
                .collect(),
        }
    }

    /// Append a pattern; defaults are never replaced
    pub fn add_pattern(&mut self, pattern: &str) -> LintResult<()> {
        let regex = Regex::new(pattern)
            .map_err(|e| LintError::pattern(format!("Invalid exclude pattern '{pattern}': {e}")))?;
        self.patterns.push(regex);
        Ok(())
    }

    /// Source text of every active pattern, in evaluation order
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(Regex::as_str).collect()
    }

    /// Check if a path matches any exclusion pattern
    pub fn is_excluded<P: AsRef<Path>>(&self, path: P) -> bool {
        let path_str = path.as_ref().to_string_lossy();
        self.patterns.iter().any(|pattern| pattern.is_match(&path_str))
    }

    /// Check a directory. The `.git` directory itself is also tried with a
    /// trailing separator so that the default `\.git/` pattern prunes it;
    /// other names such as `release.git` are matched as given.
    pub fn is_excluded_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        if self.is_excluded(path) {
            return true;
        }

        if path.file_name() != Some(OsStr::new(VCS_DIRECTORY)) {
            return false;
        }
        let with_separator = format!("{}/", path.to_string_lossy());
        self.patterns.iter().any(|pattern| pattern.is_match(&with_separator))
    }

    /// All non-excluded regular files below `root`, depth first, sorted by name
    pub fn find_files<P: AsRef<Path>>(&self, root: P) -> Vec<PathBuf> {
        self.walk(root.as_ref())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| display_path(root.as_ref(), entry.path()))
            .filter(|path| !self.is_excluded(path))
            .collect()
    }

    /// All non-excluded directories below `root` (the root itself is not included)
    pub fn find_directories<P: AsRef<Path>>(&self, root: P) -> Vec<PathBuf> {
        self.walk(root.as_ref())
            .filter(|entry| entry.depth() > 0 && entry.file_type().is_dir())
            .map(|entry| display_path(root.as_ref(), entry.path()))
            .collect()
    }

    /// Sorted depth-first walk that never descends into an excluded directory
    fn walk<'a>(&'a self, root: &Path) -> impl Iterator<Item = DirEntry> + 'a {
        let root = root.to_path_buf();
        let prune_root = root.clone();

        WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !self.is_excluded_dir(display_path(&prune_root, entry.path()))
            })
            .filter_map(move |entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                    None
                }
            })
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Path as it is reported: walks rooted at `.` drop the leading `./`
fn display_path(root: &Path, path: &Path) -> PathBuf {
    if root == Path::new(".") {
        path.strip_prefix(".").map(Path::to_path_buf).unwrap_or_else(|_| path.to_path_buf())
    } else {
        path.to_path_buf()
    }
}
