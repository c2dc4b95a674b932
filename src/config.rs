// src/config.rs
use crate::error::Result;
use crate::settings::schema::{Justification, PeerworkSettings};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Prefix of environment variables that override configuration
pub const ENV_PREFIX: &str = "PEERWORK";

/// Configuration file looked up when none is given
pub const DEFAULT_CONFIG_FILE: &str = "peerwork.toml";

/// Site-level configuration of the settings form
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rows added per "add more criteria" request
    pub addmorecriteriastep: i64,
    /// Strip markup from the activity name
    pub format_string_strip_tags: bool,
    /// Values new activities start with
    pub defaults: AdminDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addmorecriteriastep: 1,
            format_string_strip_tags: true,
            defaults: AdminDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Layer built-in defaults, an optional TOML file and `PEERWORK_*` variables.
    ///
    /// Nested keys use a double underscore, e.g. `PEERWORK_DEFAULTS__MAXFILES=3`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        debug!("Loading configuration from {} and environment", file);

        let fallback = AppConfig::default();
        let settings = Config::builder()
            .set_default("addmorecriteriastep", fallback.addmorecriteriastep)?
            .set_default("format_string_strip_tags", fallback.format_string_strip_tags)?
            .add_source(File::with_name(&file).required(path.is_some()))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

/// Admin-chosen defaults applied to new activities
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminDefaults {
    pub allowlatesubmissions: bool,
    pub maxfiles: u8,
    pub notifylatesubmissions: bool,
    pub treat0asgrade: bool,
    pub selfgrading: bool,
    pub paweighting: u8,
    pub noncompletionpenalty: u8,
    pub justification: Justification,
}

impl Default for AdminDefaults {
    fn default() -> Self {
        let base = PeerworkSettings::default();
        Self {
            allowlatesubmissions: base.allowlatesubmissions,
            maxfiles: base.maxfiles,
            notifylatesubmissions: base.notifylatesubmissions,
            treat0asgrade: base.treat0asgrade,
            selfgrading: base.selfgrading,
            paweighting: base.paweighting,
            noncompletionpenalty: base.noncompletionpenalty,
            justification: base.justification,
        }
    }
}

impl AdminDefaults {
    /// Overwrite the admin-controlled fields of `settings`
    pub fn apply(&self, settings: &mut PeerworkSettings) {
        settings.allowlatesubmissions = self.allowlatesubmissions;
        settings.maxfiles = self.maxfiles;
        settings.notifylatesubmissions = self.notifylatesubmissions;
        settings.treat0asgrade = self.treat0asgrade;
        settings.selfgrading = self.selfgrading;
        settings.paweighting = self.paweighting;
        settings.noncompletionpenalty = self.noncompletionpenalty;
        settings.justification = self.justification;
    }
}
