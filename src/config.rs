//! Card constants and the persisted widget configuration document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date_format::format_timestamp;
use crate::error::{CardError, Result};
use crate::models::{AggregatedValueCardWidgetSettings, ColorSettings, DataKey, Font};

/// Letter spacing applied to every value text style.
pub const DEFAULT_LETTER_SPACING: &str = "0.25px";

/// Text shown in a slot whose key has no sample.
pub const NO_DATA_PLACEHOLDER: &str = "N/A";

/// Most decimal places a value is rendered with.
pub const MAX_DECIMALS: u32 = 20;

/// Subtitle placeholder replaced with the entity name.
pub const ENTITY_NAME_PLACEHOLDER: &str = "${entityName}";

// ---------------------------------------------------------------------------
// WidgetConfig
// ---------------------------------------------------------------------------

/// Stored configuration of one card: widget settings plus its data keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    #[serde(default)]
    pub settings: AggregatedValueCardWidgetSettings,
    #[serde(default)]
    pub data_keys: Vec<DataKey>,
}

impl WidgetConfig {
    pub fn new(settings: AggregatedValueCardWidgetSettings, data_keys: Vec<DataKey>) -> Self {
        Self {
            settings,
            data_keys,
        }
    }

    /// Parse and validate a config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(data_keys = config.data_keys.len(), "loaded widget config");
        Ok(config)
    }

    /// Read, parse and validate a config document from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the values serde cannot: font sizes, range bands and date patterns.
    pub fn validate(&self) -> Result<()> {
        let settings = &self.settings;
        check_font("subtitleFont", &settings.subtitle_font)?;
        check_font("dateFont", &settings.date_font)?;
        if let Some(pattern) = settings.date_format.format.as_deref() {
            if !settings.date_format.last_update_ago && format_timestamp(0, pattern).is_none() {
                return Err(CardError::InvalidConfig(format!(
                    "dateFormat: invalid pattern '{}'",
                    pattern
                )));
            }
        }
        for key in &self.data_keys {
            if key.name.is_empty() {
                return Err(CardError::InvalidConfig(
                    "data key with empty name".to_string(),
                ));
            }
            if let Some(decimals) = key.decimals.filter(|d| *d > MAX_DECIMALS) {
                return Err(CardError::InvalidConfig(format!(
                    "{}.decimals: at most {} allowed, got {}",
                    key.name, MAX_DECIMALS, decimals
                )));
            }
            check_font(&format!("{}.font", key.name), &key.settings.font)?;
            check_color(&format!("{}.color", key.name), &key.settings.color)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn check_font(field: &str, font: &Font) -> Result<()> {
    if font.size.is_finite() && font.size > 0.0 {
        Ok(())
    } else {
        Err(CardError::InvalidConfig(format!(
            "{}: font size must be positive, got {}",
            field, font.size
        )))
    }
}

fn check_color(field: &str, color: &ColorSettings) -> Result<()> {
    for range in color.range_list.iter().flatten() {
        if let (Some(from), Some(to)) = (range.from, range.to) {
            if from > to {
                return Err(CardError::InvalidConfig(format!(
                    "{}: range from {} exceeds to {}",
                    field, from, to
                )));
            }
        }
    }
    Ok(())
}
