// src/settings/import_export.rs
use crate::settings::form::SettingsForm;
use crate::settings::schema::{FormSubmission, PeerworkSettings};
use crate::settings::validator::ValidationResult;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Read a form submission from a JSON file
pub fn read_submission(file_path: &Path) -> Result<FormSubmission> {
    info!("Reading settings submission from file: {}", file_path.display());

    let file = File::open(file_path)
        .context(format!("Failed to open file: {}", file_path.display()))?;

    let mut reader = BufReader::new(file);
    let mut json_str = String::new();
    reader.read_to_string(&mut json_str)
        .context(format!("Failed to read file: {}", file_path.display()))?;

    let submission: FormSubmission = serde_json::from_str(&json_str)
        .context("Failed to parse settings submission JSON")?;

    Ok(submission)
}

/// Validate a submission file and, when accepted, turn it into a record.
///
/// The validation result is returned alongside so warnings can be shown.
pub fn import_submission(
    form: &SettingsForm,
    file_path: &Path,
) -> Result<(PeerworkSettings, ValidationResult)> {
    let submission = read_submission(file_path)?;

    let validation = form.validation(&submission);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    validation.clone().into_result()
        .context(format!("Rejected settings submission: {}", file_path.display()))?;

    let record = form.data_postprocessing(submission);
    info!(
        "Settings '{}' accepted with {} criteria",
        record.name,
        record.assessmentcriteria.len()
    );
    Ok((record, validation))
}
