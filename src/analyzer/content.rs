//! File content inspection: digests for duplicate detection, and emptiness
//!
//! Files are streamed through SHA-256 in fixed-size chunks so memory use does
//! not grow with file size.

use crate::domain::violations::LintResult;
use sha2::{Digest, Sha256};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::prelude::*;
use std::path::{Path, PathBuf};

/// Files that are allowed to be committed empty
pub const ALLOWED_EMPTY_FILES: &[&str] = &[
    "__init__.py",
    ".gitkeep",
    ".gitignore",
    ".env.example",
    "requirements.txt",
    "CHANGELOG.md",
    "TODO.md",
];

const CHUNK_SIZE: usize = 8192;

/// Compute the hex SHA-256 digest of a file's content
pub fn content_digest<P: AsRef<Path>>(path: P) -> LintResult<String> {
    let mut file = File::open(path.as_ref())?;
    let mut hasher = Sha256::new();
    let mut buffer = [0; CHUNK_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Whether `path` is a regular file of zero bytes
pub fn is_empty_file<P: AsRef<Path>>(path: P) -> LintResult<bool> {
    let metadata = fs::metadata(path.as_ref())?;
    Ok(metadata.is_file() && metadata.len() == 0)
}

/// A group of files with identical content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSet {
    /// Smallest path of the group, compared as a string
    pub original: PathBuf,
    /// Every other path of the group, sorted
    pub duplicates: Vec<PathBuf>,
}

/// Paths grouped by content digest, built while scanning a file list
#[derive(Debug, Default)]
pub struct ContentIndex {
    groups: HashMap<String, Vec<PathBuf>>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` under `digest`
    pub fn insert(&mut self, digest: String, path: PathBuf) {
        self.groups.entry(digest).or_default().push(path);
    }

    /// Hash `path` and record it; unreadable files are left out of the index.
    /// Returns whether the file was indexed.
    pub fn index_file(&mut self, path: &Path) -> bool {
        match content_digest(path) {
            Ok(digest) => {
                self.insert(digest, path.to_path_buf());
                true
            }
            Err(e) => {
                tracing::debug!("Skipping {} for duplicate detection: {}", path.display(), e);
                false
            }
        }
    }

    /// Every digest shared by more than one path, ordered by original path.
    /// The result does not depend on the order files were inserted in.
    ///
    /// Paths are ordered by their string form, so `a-b/x.txt` comes before
    /// `a/x.txt` (`-` sorts before the separator).
    pub fn duplicate_sets(&self) -> Vec<DuplicateSet> {
        let mut sets: Vec<DuplicateSet> = self
            .groups
            .values()
            .filter(|paths| paths.len() > 1)
            .map(|paths| {
                let mut sorted = paths.clone();
                sorted.sort_by(|a, b| compare_as_strings(a, b));
                let original = sorted.remove(0);
                DuplicateSet { original, duplicates: sorted }
            })
            .collect();

        sets.sort_by(|a, b| compare_as_strings(&a.original, &b.original));
        sets
    }
}

/// `Path`'s own ordering goes component by component; reports order by the raw string
fn compare_as_strings(a: &Path, b: &Path) -> Ordering {
    a.as_os_str().cmp(b.as_os_str())
}
