//! Naming-convention pattern matching
//!
//! Architectural Principle: Pure Functions - every matcher classifies a string and nothing else
//! - Convention regexes are compiled once per process
//! - Unicode support is a closed set of Turkish letters, not Unicode categories
//! - Path exclusion and traversal live in the path_filter submodule

pub mod path_filter;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

pub use path_filter::{ExclusionFilter, DEFAULT_EXCLUDE_PATTERNS};

/// Lowercase letters accepted in addition to ASCII when unicode is allowed
pub const UNICODE_LOWERCASE: &str = "çğıöşüâêîôû";

/// Uppercase letters accepted in addition to ASCII when unicode is allowed
pub const UNICODE_UPPERCASE: &str = "ÇĞIİÖŞÜÂÊÎÔÛ";

lazy_static! {
    static ref KEBAB_ASCII: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
    static ref KEBAB_UNICODE: Regex = Regex::new(&format!(
        "^[a-z0-9{UNICODE_LOWERCASE}]+(-[a-z0-9{UNICODE_LOWERCASE}]+)*$"
    ))
    .unwrap();
    static ref SNAKE: Regex = Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)*$").unwrap();
    static ref PASCAL: Regex = Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap();
    static ref CAMEL: Regex = Regex::new(r"^[a-z][a-zA-Z0-9]*$").unwrap();
    static ref SCREAMING_SNAKE: Regex = Regex::new(r"^[A-Z0-9]+(_[A-Z0-9]+)*$").unwrap();
    static ref ALNUM_ASCII: Regex = Regex::new(r"^[a-zA-Z0-9]+$").unwrap();
    static ref ALNUM_UNICODE: Regex = Regex::new(&format!(
        "^[a-zA-Z0-9{UNICODE_LOWERCASE}{UNICODE_UPPERCASE}]+$"
    ))
    .unwrap();
    static ref NAME_CHARS_ASCII: Regex = Regex::new(r"^[a-zA-Z0-9._-]+$").unwrap();
    static ref NAME_CHARS_UNICODE: Regex = Regex::new(&format!(
        "^[a-zA-Z0-9{UNICODE_LOWERCASE}{UNICODE_UPPERCASE}._-]+$"
    ))
    .unwrap();
}

/// Generic file stems that say nothing about their content
pub const GENERIC_FILE_NAMES: &[&str] = &[
    "doc", "document", "file", "temp", "tmp", "test", "example", "sample", "data", "info", "item",
    "thing", "stuff", "misc", "doc1", "doc2", "file1", "file2", "test1", "test2",
];

/// Generic directory names that say nothing about their content
pub const GENERIC_DIRECTORY_NAMES: &[&str] = &[
    "dir", "directory", "folder", "temp", "tmp", "test", "example", "sample", "data", "info",
    "item", "thing", "stuff", "misc", "dir1", "dir2", "folder1", "folder2", "test1", "test2",
];

/// The casing conventions a name can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Convention {
    #[serde(rename = "kebab-case")]
    KebabCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnakeCase,
}

impl Convention {
    /// Whether `stem` follows this convention
    pub fn matches(self, stem: &str, allow_unicode: bool) -> bool {
        match self {
            Self::KebabCase => is_kebab_case(stem, allow_unicode),
            Self::SnakeCase => is_snake_case(stem),
            Self::PascalCase => is_pascal_case(stem),
            Self::CamelCase => is_camel_case(stem),
            Self::ScreamingSnakeCase => is_screaming_snake_case(stem),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::KebabCase => "kebab-case",
            Self::SnakeCase => "snake_case",
            Self::PascalCase => "PascalCase",
            Self::CamelCase => "camelCase",
            Self::ScreamingSnakeCase => "SCREAMING_SNAKE_CASE",
        }
    }

    /// Short hint appended to convention messages; `noun` names what is
    /// being checked ("filename", "directory name")
    pub fn hint(self, noun: &str) -> String {
        match self {
            Self::KebabCase => format!("use hyphens(-) in the {noun}"),
            Self::SnakeCase => format!("use underscores(_) in the {noun}"),
            Self::PascalCase => "capitalise every word, no separators".to_string(),
            Self::CamelCase => "start lowercase, capitalise later words, no separators".to_string(),
            Self::ScreamingSnakeCase => "uppercase words joined by underscores(_)".to_string(),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check if a stem follows kebab-case.
///
/// A stem with no hyphen qualifies when it has no uppercase letter and is
/// alphanumeric once dots are removed, so `readme` and `v1.2` pass.
pub fn is_kebab_case(stem: &str, allow_unicode: bool) -> bool {
    if stem.contains('_') {
        return false;
    }

    if !stem.contains('-') {
        return !has_uppercase(stem) && is_alphanumeric(&stem.replace('.', ""), allow_unicode);
    }

    if allow_unicode {
        KEBAB_UNICODE.is_match(stem)
    } else {
        KEBAB_ASCII.is_match(stem)
    }
}

/// Check if a stem follows snake_case (ASCII only)
pub fn is_snake_case(stem: &str) -> bool {
    SNAKE.is_match(stem)
}

pub fn is_pascal_case(stem: &str) -> bool {
    PASCAL.is_match(stem)
}

pub fn is_camel_case(stem: &str) -> bool {
    CAMEL.is_match(stem)
}

pub fn is_screaming_snake_case(stem: &str) -> bool {
    SCREAMING_SNAKE.is_match(stem)
}

/// Check if text is made only of letters and digits from the allowed alphabet
pub fn is_alphanumeric(text: &str, allow_unicode: bool) -> bool {
    if allow_unicode {
        ALNUM_UNICODE.is_match(text)
    } else {
        ALNUM_ASCII.is_match(text)
    }
}

/// Check if a name uses anything besides alphanumerics, dots, hyphens and underscores
pub fn has_disallowed_characters(name: &str, allow_unicode: bool) -> bool {
    if allow_unicode {
        !NAME_CHARS_UNICODE.is_match(name)
    } else {
        !NAME_CHARS_ASCII.is_match(name)
    }
}

pub fn has_spaces(name: &str) -> bool {
    name.contains(' ')
}

pub fn has_uppercase(name: &str) -> bool {
    name.chars().any(char::is_uppercase)
}

/// Check if a stem is descriptive, i.e. not one of `generic_names` ignoring case
pub fn is_descriptive(stem: &str, generic_names: &HashSet<String>) -> bool {
    !generic_names.contains(&stem.to_lowercase())
}

/// Build an owned name set from a constant list
pub fn name_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}
