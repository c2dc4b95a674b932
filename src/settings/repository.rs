// src/settings/repository.rs
use crate::error::{Result, SettingsError};
use crate::settings::schema::{Criterion, PeerworkSettings};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings record kept as a JSON file
pub struct SettingsRepository {
    path: PathBuf,
}

impl SettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a record has been saved yet
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the stored record
    pub fn load(&self) -> Result<PeerworkSettings> {
        info!("Loading settings from {}", self.path.display());

        let json = fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Stored criteria in sort order, empty when nothing is stored
    pub fn get_criteria(&self) -> Result<Vec<Criterion>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let mut criteria = self.load()?.assessmentcriteria;
        criteria.sort_by_key(|c| c.sortorder);
        Ok(criteria)
    }

    /// Replace the stored record
    pub fn save(&self, settings: &PeerworkSettings) -> Result<()> {
        info!(
            "Saving settings '{}' with {} criteria to {}",
            settings.name,
            settings.assessmentcriteria.len(),
            self.path.display()
        );

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
