//! Naming rule evaluation shared by the file and directory checkers
//!
//! Two evaluators implement the same capability: the built-in default rules,
//! and the rules described by a loaded configuration. The choice is made once,
//! when a RuleEngine is built.

use crate::config::{FileRules, LinterConfig, NameRules, SeparatorPolicy};
use crate::domain::name::{ExtensionClass, Name, Subject};
use crate::domain::violations::{LintError, LintResult};
use crate::patterns::{
    has_disallowed_characters, has_spaces, has_uppercase, is_descriptive, is_kebab_case,
    is_snake_case, name_set, Convention, GENERIC_DIRECTORY_NAMES, GENERIC_FILE_NAMES,
};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

/// Conventional file names that keep their customary spelling
pub const CONVENTIONAL_FILE_NAMES: &[&str] = &[
    "README.md",
    "LICENSE",
    "CHANGELOG.md",
    "Dockerfile",
    "Makefile",
    "CONTRIBUTING.md",
    "CODE_OF_CONDUCT.md",
    "SECURITY.md",
    "AUTHORS",
    "COPYING",
    "INSTALL",
    "NEWS",
    "TODO",
    "VERSION",
    "MANIFEST.in",
    "requirements.txt",
    "setup.py",
    "setup.cfg",
    "pyproject.toml",
    "tox.ini",
    "pytest.ini",
    ".gitignore",
    ".gitattributes",
    ".dockerignore",
    ".env.example",
    ".env.template",
    "__init__.py",
];

/// Tool and cache directories that are never judged by their name
pub const RESERVED_DIRECTORY_NAMES: &[&str] =
    &["__pycache__", "node_modules", ".git", ".pytest_cache"];

const DIRECTORY_KEBAB_MESSAGE: &str =
    "Directory should use kebab-case (use hyphens(-) between words, e.g., user-service/)";

/// One broken rule, before it is attached to a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub rule_id: &'static str,
    pub message: String,
}

impl Finding {
    fn new(rule_id: &'static str, message: impl Into<String>) -> Self {
        Self { rule_id, message: message.into() }
    }
}

/// Evaluates a name against a rule set
pub trait RuleEvaluator: fmt::Debug {
    /// Every rule the name breaks, in rule order. Pure and deterministic.
    fn evaluate(&self, name: &Name, subject: Subject) -> Vec<Finding>;
}

/// Name lists the rule engine consults; constant defaults, replaceable per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPolicy {
    /// Stems rejected as not descriptive (compared lowercased)
    pub generic_names: HashSet<String>,
    /// Exact names that are never evaluated
    pub skipped_names: HashSet<String>,
    /// Exact names allowed to contain uppercase letters
    pub uppercase_allowed: HashSet<String>,
}

impl NamingPolicy {
    pub fn for_files() -> Self {
        Self {
            generic_names: name_set(GENERIC_FILE_NAMES),
            skipped_names: name_set(CONVENTIONAL_FILE_NAMES),
            uppercase_allowed: name_set(CONVENTIONAL_FILE_NAMES),
        }
    }

    pub fn for_directories() -> Self {
        Self {
            generic_names: name_set(GENERIC_DIRECTORY_NAMES),
            skipped_names: name_set(RESERVED_DIRECTORY_NAMES),
            uppercase_allowed: HashSet::new(),
        }
    }

    /// Hidden names and explicitly skipped names are not evaluated
    pub fn should_skip(&self, name: &Name) -> bool {
        name.as_str().starts_with('.') || self.skipped_names.contains(name.as_str())
    }
}

/// Built-in rules used when no configuration is loaded
#[derive(Debug, Clone)]
pub struct DefaultRules {
    policy: NamingPolicy,
    allow_unicode: bool,
}

impl DefaultRules {
    pub fn new(policy: NamingPolicy, allow_unicode: bool) -> Self {
        Self { policy, allow_unicode }
    }

    fn character_message(&self, subject: Subject) -> &'static str {
        match subject {
            Subject::File(_) => "Filename contains disallowed special characters",
            Subject::Directory if self.allow_unicode => {
                "Directory name contains disallowed special characters"
            }
            Subject::Directory => {
                "Directory name contains non-English characters (set allow-unicode: true to allow)"
            }
        }
    }

    fn convention_message(&self, name: &Name, subject: Subject) -> Option<&'static str> {
        let stem = name.stem();
        match subject {
            Subject::File(ExtensionClass::Script) => (!is_snake_case(stem)).then_some(
                "Python files should use snake_case (use underscores(_) between words, e.g., user_service.py)",
            ),
            Subject::File(ExtensionClass::Declarative) => {
                (!is_snake_case(stem) && !is_kebab_case(stem, self.allow_unicode))
                    .then_some("Config files should use snake_case or kebab-case")
            }
            Subject::File(ExtensionClass::General) => (!is_kebab_case(stem, self.allow_unicode))
                .then_some(
                    "Files should use kebab-case (use hyphens(-) between words, e.g., user-guide.md)",
                ),
            Subject::Directory => {
                (!is_kebab_case(stem, self.allow_unicode)).then_some(DIRECTORY_KEBAB_MESSAGE)
            }
        }
    }
}

impl RuleEvaluator for DefaultRules {
    fn evaluate(&self, name: &Name, subject: Subject) -> Vec<Finding> {
        let label = subject.label();
        let full = name.as_str();
        let mut findings = Vec::new();

        if has_spaces(full) {
            findings.push(Finding::new("spaces", format!("{label} contains spaces")));
        }

        if has_disallowed_characters(full, self.allow_unicode) {
            findings.push(Finding::new("special-characters", self.character_message(subject)));
        }

        if !is_descriptive(name.stem(), &self.policy.generic_names) {
            findings.push(Finding::new("generic-name", format!("{label} is not descriptive enough")));
        }

        if let Some(message) = self.convention_message(name, subject) {
            findings.push(Finding::new("convention", message));
        }

        if has_uppercase(full) && !self.policy.uppercase_allowed.contains(full) {
            findings.push(Finding::new("uppercase", format!("{label} should be lowercase")));
        }

        findings
    }
}

/// A reject pattern, anchored at the start of the stem
#[derive(Debug, Clone)]
struct RejectPattern {
    source: String,
    regex: Regex,
}

/// Rules driven by a loaded configuration section
#[derive(Debug, Clone)]
pub struct ConfiguredRules {
    rules: NameRules,
    file_rules: Option<FileRules>,
    reject_patterns: Vec<RejectPattern>,
    allow_unicode: bool,
}

impl ConfiguredRules {
    /// Rules for file names, including the per-extension-class overrides
    pub fn for_files(rules: &FileRules, allow_unicode: bool) -> LintResult<Self> {
        Ok(Self {
            rules: rules.general.clone(),
            file_rules: Some(rules.clone()),
            reject_patterns: compile_reject_patterns(&rules.general.reject_patterns)?,
            allow_unicode,
        })
    }

    pub fn for_directories(rules: &NameRules, allow_unicode: bool) -> LintResult<Self> {
        Ok(Self {
            rules: rules.clone(),
            file_rules: None,
            reject_patterns: compile_reject_patterns(&rules.reject_patterns)?,
            allow_unicode,
        })
    }

    fn separator_policy(&self, subject: Subject) -> SeparatorPolicy {
        match (&self.file_rules, subject) {
            (Some(files), Subject::File(class)) => files.separator_policy(class),
            _ => self.rules.separator_policy(),
        }
    }

    fn separator_findings(&self, name: &Name, subject: Subject, findings: &mut Vec<Finding>) {
        let policy = self.separator_policy(subject);
        let stem = name.stem();
        let context = subject.context();

        if !policy.use_underscore && stem.contains('_') {
            let message = match subject {
                Subject::Directory => format!(
                    "Underscores not allowed in {context} (use hyphens(-) instead, e.g., user-service/)"
                ),
                Subject::File(_) => format!("Underscores not allowed in {context}"),
            };
            findings.push(Finding::new("underscore", message));
        }

        if !policy.use_hyphen && stem.contains('-') {
            findings.push(Finding::new("hyphen", format!("Hyphens not allowed in {context}")));
        }

        if let Some(convention) = policy.expected_convention() {
            if !convention.matches(stem, self.allow_unicode) {
                let message = configured_convention_message(subject, convention);
                findings.push(Finding::new("convention", message));
            }
        }
    }
}

impl RuleEvaluator for ConfiguredRules {
    fn evaluate(&self, name: &Name, subject: Subject) -> Vec<Finding> {
        let label = subject.label();
        let full = name.as_str();
        let stem = name.stem();
        let rules = &self.rules;
        let mut findings = Vec::new();

        if !rules.allow_spaces && has_spaces(full) {
            findings.push(Finding::new("spaces", format!("{label} contains spaces")));
        }

        if !rules.use_capital && has_uppercase(full) {
            findings.push(Finding::new("uppercase", format!("{label} should be lowercase")));
        }

        let length = stem.chars().count();
        if length < rules.min_length || length > rules.max_length {
            findings.push(Finding::new(
                "length",
                format!(
                    "{label} length should be between {} and {}",
                    rules.min_length, rules.max_length
                ),
            ));
        }

        for pattern in &self.reject_patterns {
            if pattern.regex.is_match(stem) {
                findings.push(Finding::new(
                    "reject-pattern",
                    format!("{label} matches rejected pattern: {}", pattern.source),
                ));
            }
        }

        // Spaces have their own toggle and are not judged again here
        let characters = if rules.allow_spaces { full.replace(' ', "") } else { full.to_string() };
        if has_disallowed_characters(&characters, self.allow_unicode) {
            let message = if self.allow_unicode {
                format!("{label} contains disallowed special characters")
            } else {
                format!("{label} contains non-English characters (set allow-unicode: true to allow)")
            };
            findings.push(Finding::new("special-characters", message));
        }

        self.separator_findings(name, subject, &mut findings);

        findings
    }
}

fn configured_convention_message(subject: Subject, convention: Convention) -> String {
    match (subject, convention) {
        (Subject::File(ExtensionClass::Script), Convention::SnakeCase) => {
            "Python files should use snake_case".to_string()
        }
        (Subject::Directory, Convention::KebabCase) => DIRECTORY_KEBAB_MESSAGE.to_string(),
        (Subject::Directory, _) => {
            format!("Directory should use {} ({})", convention, convention.hint("directory name"))
        }
        (Subject::File(_), _) => {
            format!("{} should use {} ({})", subject.group(), convention, convention.hint("filename"))
        }
    }
}

fn compile_reject_patterns(patterns: &[String]) -> LintResult<Vec<RejectPattern>> {
    patterns
        .iter()
        .map(|source| {
            Regex::new(&format!("^(?:{source})"))
                .map(|regex| RejectPattern { source: source.clone(), regex })
                .map_err(|e| LintError::pattern(format!("Invalid reject pattern '{source}': {e}")))
        })
        .collect()
}

/// A naming policy plus the evaluator chosen for this run
#[derive(Debug)]
pub struct RuleEngine {
    policy: NamingPolicy,
    evaluator: Box<dyn RuleEvaluator>,
}

impl RuleEngine {
    pub fn new(policy: NamingPolicy, evaluator: Box<dyn RuleEvaluator>) -> Self {
        Self { policy, evaluator }
    }

    /// Default rules for file names
    pub fn default_for_files(allow_unicode: bool) -> Self {
        let policy = NamingPolicy::for_files();
        Self::new(policy.clone(), Box::new(DefaultRules::new(policy, allow_unicode)))
    }

    /// Default rules for directory names
    pub fn default_for_directories(allow_unicode: bool) -> Self {
        let policy = NamingPolicy::for_directories();
        Self::new(policy.clone(), Box::new(DefaultRules::new(policy, allow_unicode)))
    }

    /// File-name engine for this run: configured rules when a configuration
    /// is loaded, default rules otherwise
    pub fn for_files(config: &LinterConfig, allow_unicode_flag: bool) -> LintResult<Self> {
        let allow_unicode = config.files_allow_unicode(allow_unicode_flag);
        if !config.is_loaded() {
            return Ok(Self::default_for_files(allow_unicode));
        }

        tracing::debug!("Using configured file-name rules");
        let evaluator = ConfiguredRules::for_files(&config.file_rules(), allow_unicode)?;
        Ok(Self::new(NamingPolicy::for_files(), Box::new(evaluator)))
    }

    /// Directory-name engine for this run
    pub fn for_directories(config: &LinterConfig, allow_unicode_flag: bool) -> LintResult<Self> {
        let allow_unicode = config.directories_allow_unicode(allow_unicode_flag);
        if !config.is_loaded() {
            return Ok(Self::default_for_directories(allow_unicode));
        }

        tracing::debug!("Using configured directory-name rules");
        let evaluator = ConfiguredRules::for_directories(&config.directory_rules(), allow_unicode)?;
        Ok(Self::new(NamingPolicy::for_directories(), Box::new(evaluator)))
    }

    pub fn policy(&self) -> &NamingPolicy {
        &self.policy
    }

    /// Evaluate a name, skipping hidden and allow-listed names
    pub fn evaluate(&self, name: &Name, subject: Subject) -> Vec<Finding> {
        if self.policy.should_skip(name) {
            return Vec::new();
        }
        self.evaluator.evaluate(name, subject)
    }
}
