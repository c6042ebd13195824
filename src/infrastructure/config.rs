// ============================================================
// SITE CONFIGURATION
// ============================================================
// Which CSV endpoint feeds which section, plus the slider interval.
// Loaded once at startup from a JSON file; an empty URL is reported
// by the owning section's pipeline, not here, so one misconfigured
// section cannot block the rest of the page.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::error::{AppError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionConfig {
    pub csv_url: String,
    pub section_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderConfig {
    pub csv_url: String,
    pub section_key: String,
    pub auto_advance_ms: u64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            csv_url: String::new(),
            section_key: String::new(),
            auto_advance_ms: 4500,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoticeConfig {
    pub section_key: String,
    pub status_csv_url: String,
    pub items_csv_url: String,
    pub refund_csv_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub slider: SliderConfig,
    pub notice: NoticeConfig,
    pub pricing: SectionConfig,
    pub rigging: SectionConfig,
    pub portfolio: SectionConfig,
    pub collaborators: SectionConfig,
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            AppError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}
