use crate::domain::entities::ClosetFilters;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// JSON file holding the closet's filter state between runs.
pub struct ClosetStateRepository {
    state_path: PathBuf,
}

impl ClosetStateRepository {
    pub fn new() -> Self {
        Self::with_path(crate::infrastructure::config_dir().join("closet.json"))
    }

    pub fn with_path(state_path: PathBuf) -> Self {
        Self { state_path }
    }

    pub fn load(&self) -> Result<ClosetFilters> {
        if !self.state_path.exists() {
            return Ok(ClosetFilters::default());
        }

        let content = fs::read_to_string(&self.state_path)
            .context("Failed to read closet state file")?;

        serde_json::from_str(&content).context("Failed to parse closet state file")
    }

    pub fn save(&self, filters: &ClosetFilters) -> Result<()> {
        if let Some(parent) = self.state_path.parent() {
            fs::create_dir_all(parent).context("Failed to create closet state directory")?;
        }

        let content = serde_json::to_string_pretty(filters)
            .context("Failed to serialize closet state")?;

        fs::write(&self.state_path, content).context("Failed to write closet state file")
    }
}

impl Default for ClosetStateRepository {
    fn default() -> Self {
        Self::new()
    }
}
