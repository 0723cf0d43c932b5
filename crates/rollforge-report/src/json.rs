//! JSON export for generated character sheets.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rollforge_core::engine::CharacterSheet;

/// A batch of generated sheets with a creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetReport {
    /// When the batch was generated.
    pub generated_at: DateTime<Utc>,
    /// The generated character sheets.
    pub characters: Vec<CharacterSheet>,
}

impl SheetReport {
    /// Wrap sheets with the current timestamp.
    pub fn new(characters: Vec<CharacterSheet>) -> Self {
        Self {
            generated_at: Utc::now(),
            characters,
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SheetReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
