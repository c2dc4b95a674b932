// src/settings/form.rs
use crate::config::AppConfig;
use crate::settings::criteria::{
    criteria_to_rows, initial_row_count, normalise_criteria, repeat_step,
};
use crate::settings::schema::{Criterion, FormDefaults, FormSubmission, PeerworkSettings};
use crate::settings::validator::{clean_name, validate_submission, ValidationResult};
use tracing::{debug, info};

/// Custom completion rule fields added by this activity
pub const COMPLETION_RULES: [&str; 1] = ["completiongradedpeers"];

/// Row counts offered by the criteria editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub initial_rows: usize,
    pub repeat_step: usize,
}

impl FormLayout {
    /// Row count after one "add more criteria" request
    pub fn rows_after_add(&self, current: usize) -> usize {
        current + self.repeat_step
    }
}

/// Settings form of one activity, new or existing
pub struct SettingsForm {
    /// Criteria already stored for the activity, in sort order
    criteria: Vec<Criterion>,
    stored: Option<PeerworkSettings>,
    config: AppConfig,
}

impl SettingsForm {
    /// Form for a new activity
    pub fn new(config: AppConfig) -> Self {
        Self {
            criteria: Vec::new(),
            stored: None,
            config,
        }
    }

    /// Form editing a stored activity
    pub fn for_existing(settings: PeerworkSettings, config: AppConfig) -> Self {
        let mut criteria = settings.assessmentcriteria.clone();
        criteria.sort_by_key(|c| c.sortorder);
        Self {
            criteria,
            stored: Some(settings),
            config,
        }
    }

    pub fn layout(&self) -> FormLayout {
        FormLayout {
            initial_rows: initial_row_count(self.criteria.len()),
            repeat_step: repeat_step(self.config.addmorecriteriastep),
        }
    }

    pub fn completion_rules(&self) -> &'static [&'static str] {
        &COMPLETION_RULES
    }

    /// Whether any custom completion rule is enabled
    pub fn completion_rule_enabled(&self, submission: &FormSubmission) -> bool {
        submission.completiongradedpeers == Some(true)
    }

    /// Values the form is pre-filled with
    pub fn data_preprocessing(&self) -> FormDefaults {
        let base = match &self.stored {
            Some(stored) => stored.clone(),
            None => {
                let mut fresh = PeerworkSettings::default();
                self.config.defaults.apply(&mut fresh);
                fresh
            }
        };
        let (critdesc, critscale) = criteria_to_rows(&self.criteria);
        let layout = self.layout();

        FormDefaults {
            name: base.name,
            intro: base.intro,
            showdescription: base.showdescription,
            fromdate: base.fromdate,
            duedate: base.duedate,
            allowlatesubmissions: base.allowlatesubmissions,
            maxfiles: base.maxfiles,
            notifylatesubmissions: base.notifylatesubmissions,
            treat0asgrade: base.treat0asgrade,
            selfgrading: base.selfgrading,
            paweighting: base.paweighting,
            noncompletionpenalty: base.noncompletionpenalty,
            justification: base.justification,
            completiongradedpeers: base.completiongradedpeers,
            critdesc,
            critscale,
            assessmentcriteria_count: layout.initial_rows,
            assessmentcriteria_step: layout.repeat_step,
        }
    }

    /// Check a submission; nothing is stored or modified
    pub fn validation(&self, submission: &FormSubmission) -> ValidationResult {
        let result = validate_submission(submission, &self.config);
        debug!(
            "Validated settings '{}': {} errors, {} warnings",
            submission.name,
            result.errors.len(),
            result.warnings.len()
        );
        result
    }

    /// Build the record to persist from an accepted submission.
    ///
    /// The raw criteria rows are consumed and replaced by the normalized list.
    pub fn data_postprocessing(&self, submission: FormSubmission) -> PeerworkSettings {
        let completiongradedpeers = if submission.completionunlocked {
            Some(submission.completiongradedpeers.unwrap_or(false))
        } else {
            submission.completiongradedpeers
        };

        let assessmentcriteria = normalise_criteria(&submission.critdesc, &submission.critscale);
        info!(
            "Normalised {} of {} criterion rows for '{}'",
            assessmentcriteria.len(),
            submission.critdesc.len(),
            submission.name
        );

        let name = clean_name(&submission.name, self.config.format_string_strip_tags);

        PeerworkSettings {
            name,
            intro: submission.intro,
            showdescription: submission.showdescription,
            fromdate: submission.fromdate,
            duedate: submission.duedate,
            allowlatesubmissions: submission.allowlatesubmissions,
            maxfiles: submission.maxfiles,
            notifylatesubmissions: submission.notifylatesubmissions,
            treat0asgrade: submission.treat0asgrade,
            selfgrading: submission.selfgrading,
            paweighting: submission.paweighting,
            noncompletionpenalty: submission.noncompletionpenalty,
            justification: submission.justification,
            completiongradedpeers,
            assessmentcriteria,
        }
    }
}
