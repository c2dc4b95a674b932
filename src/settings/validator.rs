// src/settings/validator.rs
use crate::config::AppConfig;
use crate::error::SettingsError;
use crate::settings::criteria::{normalise_criteria, strip_tags, FIRST_CRITERION_FIELD};
use crate::settings::schema::{FormSubmission, MAX_FILES_LIMIT, NAME_MAX_CHARS, PERCENT_LIMIT};
use std::collections::BTreeMap;

/// Validate a settings submission field by field
pub fn validate_submission(submission: &FormSubmission, config: &AppConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    let name = clean_name(&submission.name, config.format_string_strip_tags);
    validate_name(&name, &mut result);
    validate_choices(submission, &mut result);
    validate_dates(submission, &mut result);
    validate_criteria(submission, &mut result);

    result
}

/// Name as it is stored: trimmed, and without markup when `strip` is set
pub fn clean_name(name: &str, strip: bool) -> String {
    if strip {
        strip_tags(name).trim().to_string()
    } else {
        name.trim().to_string()
    }
}

/// The cleaned name is required and limited in length
fn validate_name(name: &str, result: &mut ValidationResult) {
    if name.is_empty() {
        result.add_error("name", "Required");
    } else if name.chars().count() > NAME_MAX_CHARS {
        result.add_error(
            "name",
            format!("Maximum of {} characters", NAME_MAX_CHARS),
        );
    }
}

/// Select fields must hold one of the offered options
fn validate_choices(submission: &FormSubmission, result: &mut ValidationResult) {
    if submission.maxfiles > MAX_FILES_LIMIT {
        result.add_error(
            "maxfiles",
            format!(
                "Invalid maxfiles: {}. Should be between 0 and {}",
                submission.maxfiles, MAX_FILES_LIMIT
            ),
        );
    }

    if submission.paweighting > PERCENT_LIMIT {
        result.add_error(
            "paweighting",
            format!(
                "Invalid paweighting: {}%. Should be between 0 and 100",
                submission.paweighting
            ),
        );
    }

    if submission.noncompletionpenalty > PERCENT_LIMIT {
        result.add_error(
            "noncompletionpenalty",
            format!(
                "Invalid noncompletionpenalty: {}%. Should be between 0 and 100",
                submission.noncompletionpenalty
            ),
        );
    }
}

fn validate_dates(submission: &FormSubmission, result: &mut ValidationResult) {
    if let (Some(from), Some(due)) = (submission.fromdate, submission.duedate) {
        if due < from {
            result.add_warning(format!(
                "Due date {} is earlier than the start date {}",
                due.format("%Y-%m-%d %H:%M"),
                from.format("%Y-%m-%d %H:%M")
            ));
        }
    }
}

/// At least one criterion must survive normalization; bad rows are dropped, not reported
fn validate_criteria(submission: &FormSubmission, result: &mut ValidationResult) {
    let criteria = normalise_criteria(&submission.critdesc, &submission.critscale);
    if criteria.is_empty() {
        result.add_error(FIRST_CRITERION_FIELD, SettingsError::EmptyCriteriaSet.to_string());
    }
}

/// Result of settings validation: field errors and non-blocking warnings
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationResult {
    /// Error message per form field
    pub errors: BTreeMap<String, String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Record an error against a field, keeping the first message per field
    pub fn add_error<F: Into<String>, S: Into<String>>(&mut self, field: F, message: S) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn add_warning<S: Into<String>>(&mut self, message: S) {
        self.warnings.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Message recorded for a field, if any
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Convert into a library result, failing when any field has an error
    pub fn into_result(self) -> Result<(), SettingsError> {
        if !self.has_errors() {
            return Ok(());
        }

        if self.errors.len() == 1 && self.errors.contains_key(FIRST_CRITERION_FIELD) {
            return Err(SettingsError::EmptyCriteriaSet);
        }

        let fields: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        Err(SettingsError::Invalid(fields.join(", ")))
    }

    /// Get a summary of validation issues
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        if self.has_errors() {
            summary.push_str(&format!("Errors ({}):\n", self.errors.len()));
            for (i, (field, message)) in self.errors.iter().enumerate() {
                summary.push_str(&format!("  {}. {}: {}\n", i + 1, field, message));
            }
        }

        if self.has_warnings() {
            if !summary.is_empty() {
                summary.push('\n');
            }
            summary.push_str(&format!("Warnings ({}):\n", self.warnings.len()));
            for (i, warning) in self.warnings.iter().enumerate() {
                summary.push_str(&format!("  {}. {}\n", i + 1, warning));
            }
        }

        if summary.is_empty() {
            summary.push_str("Settings validation passed without issues.");
        }

        summary
    }
}
