// src/settings/schema.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Text-format tag used by the HTML editor
pub const FORMAT_HTML: i32 = 1;

/// Upper bound of the "maximum files" choice list
pub const MAX_FILES_LIMIT: u8 = 5;

/// Upper bound of the percentage choice lists
pub const PERCENT_LIMIT: u8 = 100;

/// Maximum length of the activity name
pub const NAME_MAX_CHARS: usize = 255;

/// Rich text as produced by the editor: raw markup plus its format tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    pub text: String,
    pub format: i32,
}

impl RichText {
    pub fn new(text: impl Into<String>, format: i32) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }
}

impl Default for RichText {
    fn default() -> Self {
        Self::new("", FORMAT_HTML)
    }
}

/// One scored dimension of a peer assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    /// Description as entered, markup included
    pub description: String,
    /// Format tag of the description
    pub descriptionformat: i32,
    /// Scale reference, always stored negative
    pub grade: i64,
    /// Position among retained criteria
    pub sortorder: u32,
    /// Relative weight, fixed at 1
    pub weight: u32,
}

impl Criterion {
    /// Scale as the editor shows it (positive)
    pub fn scale(&self) -> i64 {
        self.grade.saturating_neg()
    }
}

/// Who gets to see the justification peers write for their scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    #[default]
    Disabled,
    Hidden,
    VisibleAnon,
    VisibleUser,
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Justification::Disabled => write!(f, "disabled"),
            Justification::Hidden => write!(f, "hidden from students"),
            Justification::VisibleAnon => write!(f, "visible anonymously"),
            Justification::VisibleUser => write!(f, "visible with author"),
        }
    }
}

/// Persisted settings of a peer-assessment activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerworkSettings {
    /// Activity name
    pub name: String,
    /// Activity description
    #[serde(default)]
    pub intro: RichText,
    /// Show the description on the course page
    #[serde(default)]
    pub showdescription: bool,
    /// Submissions open from this date; `None` when disabled
    pub fromdate: Option<DateTime<Utc>>,
    /// Submissions are due at this date; `None` when disabled
    pub duedate: Option<DateTime<Utc>>,
    pub allowlatesubmissions: bool,
    /// Number of files a group may upload, zero disables uploads
    pub maxfiles: u8,
    pub notifylatesubmissions: bool,
    /// Count a zero score as a grade when calculating averages
    pub treat0asgrade: bool,
    /// Students also grade themselves
    pub selfgrading: bool,
    /// Share of the grade driven by peer assessment, in percent
    pub paweighting: u8,
    /// Penalty for students who did not assess their peers, in percent
    pub noncompletionpenalty: u8,
    pub justification: Justification,
    /// Completion requires having graded all peers
    #[serde(default)]
    pub completiongradedpeers: Option<bool>,
    pub assessmentcriteria: Vec<Criterion>,
}

/// Raw settings form submission, before normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub name: String,
    #[serde(default)]
    pub intro: RichText,
    #[serde(default)]
    pub showdescription: bool,
    #[serde(default)]
    pub fromdate: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duedate: Option<DateTime<Utc>>,
    #[serde(default)]
    pub allowlatesubmissions: bool,
    #[serde(default)]
    pub maxfiles: u8,
    #[serde(default)]
    pub notifylatesubmissions: bool,
    #[serde(default)]
    pub treat0asgrade: bool,
    #[serde(default)]
    pub selfgrading: bool,
    #[serde(default)]
    pub paweighting: u8,
    #[serde(default)]
    pub noncompletionpenalty: u8,
    #[serde(default)]
    pub justification: Justification,
    /// Completion settings may only change while unlocked
    #[serde(default)]
    pub completionunlocked: bool,
    #[serde(default)]
    pub completiongradedpeers: Option<bool>,
    /// Criterion descriptions keyed by row index
    #[serde(default)]
    pub critdesc: BTreeMap<usize, RichText>,
    /// Scale selections keyed by row index
    #[serde(default)]
    pub critscale: BTreeMap<usize, i64>,
}

/// Values used to pre-fill the settings form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    pub name: String,
    pub intro: RichText,
    pub showdescription: bool,
    pub fromdate: Option<DateTime<Utc>>,
    pub duedate: Option<DateTime<Utc>>,
    pub allowlatesubmissions: bool,
    pub maxfiles: u8,
    pub notifylatesubmissions: bool,
    pub treat0asgrade: bool,
    pub selfgrading: bool,
    pub paweighting: u8,
    pub noncompletionpenalty: u8,
    pub justification: Justification,
    pub completiongradedpeers: Option<bool>,
    pub critdesc: BTreeMap<usize, RichText>,
    /// Scale selections as shown in the UI (positive)
    pub critscale: BTreeMap<usize, i64>,
    /// Criterion rows the editor starts with
    pub assessmentcriteria_count: usize,
    /// Rows added per "add more criteria" request
    pub assessmentcriteria_step: usize,
}

/// Settings for a freshly created activity
impl Default for PeerworkSettings {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            name: String::new(),
            intro: RichText::default(),
            showdescription: false,
            fromdate: Some(now),
            duedate: Some(now + Duration::days(1)),
            allowlatesubmissions: false,
            maxfiles: 1,
            notifylatesubmissions: false,
            treat0asgrade: false,
            selfgrading: false,
            paweighting: 0,
            noncompletionpenalty: 0,
            justification: Justification::Disabled,
            completiongradedpeers: None,
            assessmentcriteria: Vec::new(),
        }
    }
}
