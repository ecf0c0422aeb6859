use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::ColorProcessor;
use crate::config::NO_DATA_PLACEHOLDER;
use crate::defaults;
use crate::lookup::{as_number, format_value};
use crate::models::settings::{
    BackgroundSettings, ColorSettings, ComponentStyle, DateFormatSettings, Font,
};
use crate::models::widget::{DataEntry, DataKey};

// ---------------------------------------------------------------------------
// AggregatedValueCardWidgetSettings — widget-scope appearance
// ---------------------------------------------------------------------------

/// Widget-scope appearance. Fields missing from a stored document take the
/// values of [`defaults::aggregated_value_card_default_settings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregatedValueCardWidgetSettings {
    pub show_subtitle: bool,
    pub subtitle: String,
    pub subtitle_font: Font,
    pub subtitle_color: String,
    pub show_date: bool,
    pub date_format: DateFormatSettings,
    pub date_font: Font,
    pub date_color: String,
    pub show_chart: bool,
    pub chart_color: String,
    pub background: BackgroundSettings,
}

impl Default for AggregatedValueCardWidgetSettings {
    fn default() -> Self {
        defaults::aggregated_value_card_default_settings()
    }
}

// ---------------------------------------------------------------------------
// AggregatedValueCardKeyPosition — the five card slots
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AggregatedValueCardKeyPosition {
    #[default]
    Center,
    RightTop,
    RightBottom,
    LeftTop,
    LeftBottom,
}

impl AggregatedValueCardKeyPosition {
    /// Every slot, in the order the card resolves them.
    pub const ALL: [Self; 5] = [
        Self::Center,
        Self::RightTop,
        Self::RightBottom,
        Self::LeftTop,
        Self::LeftBottom,
    ];

    /// Name used in stored dashboard JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::RightTop => "rightTop",
            Self::RightBottom => "rightBottom",
            Self::LeftTop => "leftTop",
            Self::LeftBottom => "leftBottom",
        }
    }

    /// i18n key for the settings editor.
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::Center => "widgets.aggregated-value-card.position-center",
            Self::RightTop => "widgets.aggregated-value-card.position-right-top",
            Self::RightBottom => "widgets.aggregated-value-card.position-right-bottom",
            Self::LeftTop => "widgets.aggregated-value-card.position-left-top",
            Self::LeftBottom => "widgets.aggregated-value-card.position-left-bottom",
        }
    }
}

impl fmt::Display for AggregatedValueCardKeyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AggregatedValueCardKeySettings — per-key appearance
// ---------------------------------------------------------------------------

/// Per-key appearance embedded in a [`DataKey`].
///
/// `position` is kept optional so stored keys without one round-trip
/// unchanged; use [`effective_position`](Self::effective_position) to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregatedValueCardKeySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<AggregatedValueCardKeyPosition>,
    pub font: Font,
    pub color: ColorSettings,
    pub show_arrow: bool,
}

impl AggregatedValueCardKeySettings {
    /// The configured slot, or center when none is set.
    pub fn effective_position(&self) -> AggregatedValueCardKeyPosition {
        self.position.unwrap_or_default()
    }

    /// Default settings with no position stored, for keys saved without settings.
    pub fn unpositioned() -> Self {
        Self {
            position: None,
            ..Self::default()
        }
    }
}

impl Default for AggregatedValueCardKeySettings {
    fn default() -> Self {
        defaults::aggregated_value_card_default_key_settings()
    }
}

// ---------------------------------------------------------------------------
// AggregatedValueCardValue — one renderable slot for a render pass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AggregatedValueCardValue {
    pub key: DataKey,
    pub value: String,
    pub units: String,
    pub style: ComponentStyle,
    pub color: ColorProcessor,
    pub center: bool,
    pub show_arrow: bool,
    pub up_arrow: bool,
    pub down_arrow: bool,
}

impl AggregatedValueCardValue {
    /// Apply the latest sample for this slot's key.
    ///
    /// A missing sample shows the no-data placeholder and clears both arrows.
    pub fn update(&mut self, sample: Option<&DataEntry>) {
        let raw = sample.map(|(_, v)| v);
        self.value = match raw {
            Some(v) => format_value(v, self.key.decimals),
            None => NO_DATA_PLACEHOLDER.to_string(),
        };
        self.color.update(raw);
        let num = if self.show_arrow {
            raw.and_then(as_number)
        } else {
            None
        };
        self.up_arrow = num.is_some_and(|n| n > 0.0);
        self.down_arrow = num.is_some_and(|n| n < 0.0);
    }
}
