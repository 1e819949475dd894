//! Names under inspection and the subjects they belong to
//!
//! Architecture: Value Objects - a Name is derived from a path once and never mutated
//! - Files split into stem and lowercased extension on the last dot
//! - Directory names are never split
//! - Subject carries the wording used in violation messages

use std::path::Path;

/// Extensions of interpreter-script files, which follow snake_case
pub const SCRIPT_EXTENSIONS: &[&str] = &[".py", ".pyx", ".pyi"];

/// Extensions of declarative configuration files, which may use either separator
pub const DECLARATIVE_EXTENSIONS: &[&str] =
    &[".yml", ".yaml", ".json", ".toml", ".ini", ".cfg", ".conf"];

/// A file or directory name decomposed for rule evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    full: String,
    stem: String,
    extension: String,
}

impl Name {
    /// Decompose a file name into stem and extension.
    ///
    /// Only the last dot splits. A leading dot (`.gitignore`) or a trailing dot
    /// (`notes.`) does not, matching how hidden files are usually treated.
    pub fn file(name: impl Into<String>) -> Self {
        let full = name.into();
        let (stem, extension) = match full.rfind('.') {
            Some(index) if index > 0 && index + 1 < full.len() => {
                (full[..index].to_string(), full[index..].to_lowercase())
            }
            _ => (full.clone(), String::new()),
        };

        Self { full, stem, extension }
    }

    /// A directory name; the stem is the whole name
    pub fn directory(name: impl Into<String>) -> Self {
        let full = name.into();
        Self { stem: full.clone(), full, extension: String::new() }
    }

    /// Final path component of `path`, if it has one
    pub fn file_name_of(path: &Path) -> Option<String> {
        path.file_name().map(|name| name.to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Lowercased extension including the dot, empty when there is none
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Extension class of this name when it is treated as a file
    pub fn extension_class(&self) -> ExtensionClass {
        ExtensionClass::of(&self.extension)
    }
}

/// Classification of a file by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionClass {
    /// Interpreter scripts (`.py`, `.pyx`, `.pyi`)
    Script,
    /// Declarative configuration (`.yaml`, `.json`, `.toml`, ...)
    Declarative,
    /// Everything else
    General,
}

impl ExtensionClass {
    pub fn of(extension: &str) -> Self {
        if SCRIPT_EXTENSIONS.contains(&extension) {
            Self::Script
        } else if DECLARATIVE_EXTENSIONS.contains(&extension) {
            Self::Declarative
        } else {
            Self::General
        }
    }
}

/// What a name is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    File(ExtensionClass),
    Directory,
}

impl Subject {
    /// Subject for a name found on a file
    pub fn for_file(name: &Name) -> Self {
        Self::File(name.extension_class())
    }

    /// Capitalised noun used at the start of most messages
    pub fn label(self) -> &'static str {
        match self {
            Self::File(_) => "Filename",
            Self::Directory => "Directory name",
        }
    }

    /// Noun used in convention messages ("Python files should use ...")
    pub fn group(self) -> &'static str {
        match self {
            Self::File(ExtensionClass::Script) => "Python files",
            Self::File(ExtensionClass::Declarative) => "Config files",
            Self::File(ExtensionClass::General) => "Files",
            Self::Directory => "Directory",
        }
    }

    /// Noun used in separator messages ("Hyphens not allowed in config filename")
    pub fn context(self) -> &'static str {
        match self {
            Self::File(ExtensionClass::Script) => "Python filename",
            Self::File(ExtensionClass::Declarative) => "config filename",
            Self::File(ExtensionClass::General) => "filename",
            Self::Directory => "directory name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user-guide.md", "user-guide", ".md")]
    #[case("archive.tar.GZ", "archive.tar", ".gz")]
    #[case(".gitignore", ".gitignore", "")]
    #[case(".env.example", ".env", ".example")]
    #[case("Makefile", "Makefile", "")]
    #[case("notes.", "notes.", "")]
    #[case("", "", "")]
    fn test_file_name_decomposition(
        #[case] input: &str,
        #[case] stem: &str,
        #[case] extension: &str,
    ) {
        let name = Name::file(input);
        assert_eq!(name.as_str(), input);
        assert_eq!(name.stem(), stem);
        assert_eq!(name.extension(), extension);
    }

    #[test]
    fn test_directory_names_are_not_split() {
        let name = Name::directory("release.v2");
        assert_eq!(name.stem(), "release.v2");
        assert_eq!(name.extension(), "");
    }

    #[rstest]
    #[case("user_service.py", ExtensionClass::Script)]
    #[case("stubs.PYI", ExtensionClass::Script)]
    #[case("docker-compose.yml", ExtensionClass::Declarative)]
    #[case("app_settings.conf", ExtensionClass::Declarative)]
    #[case("user-guide.md", ExtensionClass::General)]
    #[case("Dockerfile", ExtensionClass::General)]
    fn test_extension_class(#[case] input: &str, #[case] expected: ExtensionClass) {
        assert_eq!(Name::file(input).extension_class(), expected);
    }

    #[test]
    fn test_subject_wording() {
        let script = Subject::for_file(&Name::file("main.py"));
        assert_eq!(script.group(), "Python files");
        assert_eq!(script.context(), "Python filename");
        assert_eq!(Subject::Directory.label(), "Directory name");
    }
}
