//! Configuration loading and management for naming-guardian
//!
//! Architecture: Anti-Corruption Layer - Configuration translates the external YAML format
//! - Raw YAML sections are converted to typed rule settings with documented defaults
//! - A missing or malformed file degrades to the empty configuration, never to an error
//! - Section values override command-line flags where both exist

use crate::domain::name::ExtensionClass;
use crate::domain::violations::{LintError, LintResult};
use crate::patterns::Convention;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure, one section per checker
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinterConfig {
    /// Rules for the file-name checker
    pub files: Option<FileRules>,
    /// Rules for the directory-name checker
    pub directories: Option<NameRules>,
    /// Settings for the empty-file checker
    pub empty_files: Option<EmptyFileSettings>,
    /// Settings for the duplicate-file checker
    pub duplicate_files: Option<DuplicateFileSettings>,
    /// Exclusion regexes shared by every checker
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
    /// Whether the document had any content at all
    #[serde(skip)]
    loaded: bool,
}

/// Naming rules applied to one kind of name
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct NameRules {
    pub allow_spaces: bool,
    pub use_capital: bool,
    pub min_length: usize,
    pub max_length: usize,
    /// Regexes matched at the start of the stem
    pub reject_patterns: Vec<String>,
    pub use_hyphen: bool,
    pub use_underscore: bool,
    /// Overrides the `--allow-unicode` flag when present
    pub allow_unicode: Option<bool>,
    /// Explicit convention, replacing the one implied by the separators
    pub convention: Option<Convention>,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            allow_spaces: false,
            use_capital: false,
            min_length: 1,
            max_length: 100,
            reject_patterns: Vec::new(),
            use_hyphen: true,
            use_underscore: false,
            allow_unicode: None,
            convention: None,
        }
    }
}

/// File rules: the general block plus per-extension-class overrides
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FileRules {
    #[serde(flatten)]
    pub general: NameRules,
    /// Overrides for `.py`, `.pyx`, `.pyi` files
    pub python_files: Option<SeparatorOverride>,
    /// Overrides for `.yml`, `.yaml`, `.json`, `.toml`, `.ini`, `.cfg`, `.conf` files
    pub config_files: Option<SeparatorOverride>,
}

/// Separator toggles layered over an extension class's defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SeparatorOverride {
    pub use_hyphen: Option<bool>,
    pub use_underscore: Option<bool>,
    pub convention: Option<Convention>,
}

/// Separator policy in force for one subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorPolicy {
    pub use_hyphen: bool,
    pub use_underscore: bool,
    pub convention: Option<Convention>,
}

impl SeparatorPolicy {
    /// Convention the name must follow, if any.
    ///
    /// With both separators enabled (or both disabled) and no explicit
    /// convention there is nothing to enforce.
    pub fn expected_convention(&self) -> Option<Convention> {
        self.convention.or(match (self.use_hyphen, self.use_underscore) {
            (true, false) => Some(Convention::KebabCase),
            (false, true) => Some(Convention::SnakeCase),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EmptyFileSettings {
    pub allow_empty: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DuplicateFileSettings {
    pub allow_duplicates: Option<bool>,
}

impl LinterConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LintResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            LintError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::load_from_str(&contents).map_err(|e| {
            LintError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> LintResult<Self> {
        let document: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| LintError::config(format!("Failed to parse config: {e}")))?;

        let loaded = match &document {
            serde_yaml::Value::Mapping(mapping) => !mapping.is_empty(),
            serde_yaml::Value::Null => false,
            _ => {
                return Err(LintError::config("Configuration must be a mapping of sections"));
            }
        };

        if !loaded {
            return Ok(Self::default());
        }

        let mut config: Self = serde_yaml::from_value(document)
            .map_err(|e| LintError::config(format!("Invalid configuration: {e}")))?;
        config.loaded = true;
        Ok(config)
    }

    /// Load `path` if given, degrading to the empty configuration on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                tracing::debug!("Using default rules: {}", e);
                Self::default()
            }
        }
    }

    /// Whether a non-empty configuration was loaded, which switches the naming
    /// checkers from the default rule set to the configured one
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// File rules, with defaults for an absent section
    pub fn file_rules(&self) -> FileRules {
        self.files.clone().unwrap_or_default()
    }

    /// Directory rules, with defaults for an absent section
    pub fn directory_rules(&self) -> NameRules {
        self.directories.clone().unwrap_or_default()
    }

    /// Effective unicode policy for file names
    pub fn files_allow_unicode(&self, flag: bool) -> bool {
        self.files.as_ref().and_then(|f| f.general.allow_unicode).unwrap_or(flag)
    }

    /// Effective unicode policy for directory names
    pub fn directories_allow_unicode(&self, flag: bool) -> bool {
        self.directories.as_ref().and_then(|d| d.allow_unicode).unwrap_or(flag)
    }

    /// Effective allow-empty setting
    pub fn allow_empty(&self, flag: bool) -> bool {
        self.empty_files.as_ref().and_then(|s| s.allow_empty).unwrap_or(flag)
    }

    /// Effective allow-duplicates setting
    pub fn allow_duplicates(&self, flag: bool) -> bool {
        self.duplicate_files.as_ref().and_then(|s| s.allow_duplicates).unwrap_or(flag)
    }
}

impl FileRules {
    /// Separator policy for a file subject.
    ///
    /// General files use the section's own toggles. Python files default to
    /// underscores only, config files to both separators; their override
    /// blocks replace individual toggles.
    pub fn separator_policy(&self, class: ExtensionClass) -> SeparatorPolicy {
        let general = SeparatorPolicy {
            use_hyphen: self.general.use_hyphen,
            use_underscore: self.general.use_underscore,
            convention: self.general.convention,
        };

        let (defaults, overrides) = match class {
            ExtensionClass::General => return general,
            ExtensionClass::Script => (
                SeparatorPolicy { use_hyphen: false, use_underscore: true, convention: None },
                self.python_files.as_ref(),
            ),
            ExtensionClass::Declarative => (
                SeparatorPolicy { use_hyphen: true, use_underscore: true, convention: None },
                self.config_files.as_ref(),
            ),
        };

        match overrides {
            Some(o) => SeparatorPolicy {
                use_hyphen: o.use_hyphen.unwrap_or(defaults.use_hyphen),
                use_underscore: o.use_underscore.unwrap_or(defaults.use_underscore),
                convention: o.convention.or(defaults.convention),
            },
            None => defaults,
        }
    }
}

impl NameRules {
    /// Separator policy for a directory or a general file
    pub fn separator_policy(&self) -> SeparatorPolicy {
        SeparatorPolicy {
            use_hyphen: self.use_hyphen,
            use_underscore: self.use_underscore,
            convention: self.convention,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FULL_CONFIG: &str = r#"
exclude-patterns:
  - "^legacy/"
files:
  allow-spaces: false
  use-capital: true
  min-length: 3
  max-length: 40
  reject-patterns:
    - "^tmp"
    - "copy"
  allow-unicode: true
  python-files:
    use-underscore: true
  config-files:
    use-hyphen: false
directories:
  use-hyphen: false
  use-underscore: true
empty-files:
  allow-empty: true
duplicate-files:
  allow-duplicates: false
"#;

    #[test]
    fn test_load_full_config() {
        let config = LinterConfig::load_from_str(FULL_CONFIG).unwrap();

        assert!(config.is_loaded());
        assert_eq!(config.exclude_patterns, vec!["^legacy/".to_string()]);

        let files = config.file_rules();
        assert!(files.general.use_capital);
        assert_eq!(files.general.min_length, 3);
        assert_eq!(files.general.max_length, 40);
        assert_eq!(files.general.reject_patterns, vec!["^tmp", "copy"]);
        // Unset keys keep their documented defaults
        assert!(files.general.use_hyphen);
        assert!(!files.general.use_underscore);

        let dirs = config.directory_rules();
        assert!(!dirs.use_hyphen);
        assert!(dirs.use_underscore);
        assert_eq!(dirs.max_length, 100);

        assert!(config.files_allow_unicode(false));
        assert!(!config.directories_allow_unicode(false));
        assert!(config.allow_empty(false));
        assert!(!config.allow_duplicates(true));
    }

    #[test]
    fn test_flags_apply_without_sections() {
        let config = LinterConfig::load_from_str("exclude-patterns: [dist]").unwrap();

        assert!(config.is_loaded());
        assert!(config.files_allow_unicode(true));
        assert!(config.allow_empty(true));
        assert!(!config.allow_duplicates(false));
        assert_eq!(config.file_rules(), FileRules::default());
    }

    #[test]
    fn test_empty_documents_are_not_loaded() {
        assert!(!LinterConfig::load_from_str("").unwrap().is_loaded());
        assert!(!LinterConfig::load_from_str("{}").unwrap().is_loaded());
        assert!(!LinterConfig::load_from_str("# only a comment\n").unwrap().is_loaded());
    }

    #[test]
    fn test_malformed_documents_are_errors() {
        assert!(LinterConfig::load_from_str("files: [unclosed").is_err());
        assert!(LinterConfig::load_from_str("- just\n- a list\n").is_err());
        assert!(LinterConfig::load_from_str("files:\n  min-length: many\n").is_err());
    }

    #[test]
    fn test_load_or_default_degrades_silently() {
        let temp_dir = TempDir::new().unwrap();
        let broken = temp_dir.path().join("broken.yaml");
        fs::write(&broken, "files: [unclosed").unwrap();

        assert_eq!(LinterConfig::load_or_default(Some(broken.as_path())), LinterConfig::default());
        assert_eq!(
            LinterConfig::load_or_default(Some(temp_dir.path().join("missing.yaml").as_path())),
            LinterConfig::default()
        );
        assert_eq!(LinterConfig::load_or_default(None), LinterConfig::default());

        let valid = temp_dir.path().join("valid.yaml");
        fs::write(&valid, FULL_CONFIG).unwrap();
        assert!(LinterConfig::load_or_default(Some(valid.as_path())).is_loaded());
    }

    #[test]
    fn test_separator_policy_per_class() {
        let config = LinterConfig::load_from_str(FULL_CONFIG).unwrap();
        let files = config.file_rules();

        let general = files.separator_policy(ExtensionClass::General);
        assert_eq!(general.expected_convention(), Some(Convention::KebabCase));

        let script = files.separator_policy(ExtensionClass::Script);
        assert!(!script.use_hyphen);
        assert_eq!(script.expected_convention(), Some(Convention::SnakeCase));

        let declarative = files.separator_policy(ExtensionClass::Declarative);
        assert!(!declarative.use_hyphen);
        assert!(declarative.use_underscore);
        assert_eq!(declarative.expected_convention(), Some(Convention::SnakeCase));

        let defaults = FileRules::default().separator_policy(ExtensionClass::Declarative);
        assert_eq!(defaults.expected_convention(), None);

        let dirs = config.directory_rules().separator_policy();
        assert_eq!(dirs.expected_convention(), Some(Convention::SnakeCase));
    }

    #[test]
    fn test_explicit_convention_wins() {
        let config = LinterConfig::load_from_str(
            "directories:\n  use-capital: true\n  convention: PascalCase\n",
        )
        .unwrap();
        let policy = config.directory_rules().separator_policy();

        assert_eq!(policy.expected_convention(), Some(Convention::PascalCase));
    }
}
