//! Color evaluation for value text.
//!
//! A [`ColorProcessor`] is bound to one [`ColorSettings`] rule and recomputes
//! its color each time a new value arrives.

use serde_json::Value;
use tracing::warn;

use crate::lookup::as_number;
use crate::models::{ColorRange, ColorSettings, ColorType};

/// A color rule bound to the value it was last updated with.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorProcessor {
    settings: ColorSettings,
    color: String,
}

impl ColorProcessor {
    /// Bind a color rule. The initial color is the rule's base color.
    ///
    /// `function` rules are not evaluated; they behave like constant rules.
    pub fn from_settings(settings: &ColorSettings) -> Self {
        if settings.color_type == ColorType::Function {
            warn!(
                color = %settings.color,
                "color functions are not evaluated, using the base color"
            );
        }
        Self {
            settings: settings.clone(),
            color: settings.color.clone(),
        }
    }

    /// Recompute the color for a new value.
    pub fn update(&mut self, value: Option<&Value>) {
        self.color = match self.settings.color_type {
            ColorType::Range => self.compute_from_range(value).to_string(),
            ColorType::Constant | ColorType::Function => self.settings.color.clone(),
        };
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn settings(&self) -> &ColorSettings {
        &self.settings
    }

    fn compute_from_range(&self, value: Option<&Value>) -> &str {
        let num = value.and_then(as_number);
        match (num, self.settings.range_list.as_deref()) {
            (Some(num), Some(ranges)) => ranges
                .iter()
                .find(|range| range_matches(range, num))
                .map(|range| range.color.as_str())
                .unwrap_or(self.settings.color.as_str()),
            _ => self.settings.color.as_str(),
        }
    }
}

fn range_matches(range: &ColorRange, num: f64) -> bool {
    if range.is_constant() {
        return range.from == Some(num);
    }
    range.from.map_or(true, |from| num >= from) && range.to.map_or(true, |to| num < to)
}
