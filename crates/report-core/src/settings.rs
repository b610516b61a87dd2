//! Report settings supplied per generation request.

use chrono::{DateTime, Local};

#[cfg(feature = "serde")]
use crate::types::{ReportError, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Title/subtitle pair consumed read-only by the composer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportSettings {
    pub title: String,
    pub subtitle: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: "Field Inspection Report".to_string(),
            subtitle: SubtitleFormat::MonthYear.resolve(Local::now()),
        }
    }
}

impl ReportSettings {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Download filename: the title with spaces as underscores, plus the
    /// document extension.
    pub fn suggested_filename(&self) -> String {
        format!("{}.pdf", self.title.replace(' ', "_"))
    }

    /// Load settings from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let settings = serde_json::from_slice(&bytes)
            .map_err(|e| ReportError::Config(format!("Failed to parse settings: {}", e)))?;
        Ok(settings)
    }

    /// Save settings to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

/// How the subtitle is derived from the generation date.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubtitleFormat {
    /// "March 2024"
    #[default]
    MonthYear,
    /// "2024-03-14"
    DateOnly,
    /// "2024-03-14 09:30"
    DateTime,
    /// Free text, used verbatim.
    Custom(String),
}

impl SubtitleFormat {
    /// Resolve against an explicit timestamp so callers control determinism.
    pub fn resolve(&self, now: DateTime<Local>) -> String {
        match self {
            SubtitleFormat::MonthYear => now.format("%B %Y").to_string(),
            SubtitleFormat::DateOnly => now.format("%Y-%m-%d").to_string(),
            SubtitleFormat::DateTime => now.format("%Y-%m-%d %H:%M").to_string(),
            SubtitleFormat::Custom(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_date() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_subtitle_formats() {
        assert_eq!(SubtitleFormat::MonthYear.resolve(fixed_date()), "March 2024");
        assert_eq!(SubtitleFormat::DateOnly.resolve(fixed_date()), "2024-03-14");
        assert_eq!(
            SubtitleFormat::DateTime.resolve(fixed_date()),
            "2024-03-14 09:30"
        );
        assert_eq!(
            SubtitleFormat::Custom("Q1 Walkthrough".to_string()).resolve(fixed_date()),
            "Q1 Walkthrough"
        );
    }

    #[test]
    fn test_suggested_filename_replaces_spaces() {
        let settings = ReportSettings::new("Field Inspection Report", "March 2024");
        assert_eq!(
            settings.suggested_filename(),
            "Field_Inspection_Report.pdf"
        );
    }

    #[test]
    fn test_suggested_filename_without_spaces() {
        let settings = ReportSettings::new("Walkthrough", "");
        assert_eq!(settings.suggested_filename(), "Walkthrough.pdf");
    }
}
