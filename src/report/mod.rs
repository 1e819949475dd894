//! Report generation for pre-commit output
//!
//! CDD Principle: Anti-Corruption Layer - Formatters translate domain objects to external formats
//! - ValidationReport (domain) is converted to the line format pre-commit shows to users
//! - A JSON rendering serves tooling that wants structured results
//! - A clean report renders to nothing, so successful hooks stay silent

use crate::domain::violations::{LintResult, ValidationReport};
use std::io::Write;

/// Supported output formats for validation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `<path>: <message>` line per violation
    Human,
    /// A single JSON document
    Json,
}

/// Renders validation reports in one output format
#[derive(Debug, Clone, Copy)]
pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a report. A report without violations renders as the empty string.
    pub fn format_report(&self, report: &ValidationReport) -> LintResult<String> {
        if !report.has_violations() {
            return Ok(String::new());
        }

        match self.format {
            OutputFormat::Human => Ok(self.format_human(report)),
            OutputFormat::Json => self.format_json(report),
        }
    }

    /// Write a formatted report to a writer
    pub fn write_report<W: Write>(&self, report: &ValidationReport, mut writer: W) -> LintResult<()> {
        let formatted = self.format_report(report)?;
        if formatted.is_empty() {
            return Ok(());
        }

        writer.write_all(formatted.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn format_human(&self, report: &ValidationReport) -> String {
        let mut output = String::new();
        for line in report.display_lines() {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Timing is not rendered, so repeated runs produce identical documents
    fn format_json(&self, report: &ValidationReport) -> LintResult<String> {
        let mut output = serde_json::to_string_pretty(report)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::violations::Violation;

    fn create_test_report() -> ValidationReport {
        let mut report = ValidationReport::new();
        report.record_checked();
        report.record_checked();
        report.add_violation(Violation::new("duplicate-original", "a.txt", "Duplicate file found (original)"));
        report.add_violation(Violation::new("duplicate", "b.txt", "Duplicate of a.txt"));
        report
    }

    #[test]
    fn test_human_format() {
        let output = ReportFormatter::new(OutputFormat::Human)
            .format_report(&create_test_report())
            .unwrap();

        assert_eq!(output, "a.txt: Duplicate file found (original)\nb.txt: Duplicate of a.txt\n");
    }

    #[test]
    fn test_json_format() {
        let output = ReportFormatter::new(OutputFormat::Json)
            .format_report(&create_test_report())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["violations"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["violations"][1]["path"], "b.txt");
        assert_eq!(parsed["violations"][1]["rule_id"], "duplicate");
        assert_eq!(parsed["summary"]["paths_checked"], 2);
        assert_eq!(parsed["summary"]["violation_count"], 2);
    }

    #[test]
    fn test_clean_report_writes_nothing() {
        let report = ValidationReport::new();

        for format in [OutputFormat::Human, OutputFormat::Json] {
            let mut buffer = Vec::new();
            ReportFormatter::new(format).write_report(&report, &mut buffer).unwrap();
            assert!(buffer.is_empty());
        }
    }

    #[test]
    fn test_json_leaves_out_timing() {
        let mut report = create_test_report();
        report.set_execution_time(1200);

        let output = ReportFormatter::new(OutputFormat::Json).format_report(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(parsed["summary"].get("execution_time_ms").is_none());
    }
}
