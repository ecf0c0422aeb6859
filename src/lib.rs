//! Aggregated value card widget model.
//!
//! Settings shapes, defaults and value resolution for a dashboard card that
//! shows a metric's current value together with its delta against a previous
//! period. Rendering, data fetching and aggregation live elsewhere; this crate
//! turns stored settings plus the latest samples into display-ready values.
//!
//! # Quick start
//!
//! ```
//! use aggregated_value_card::{
//!     AggregatedValueCard, AggregatedValueCardKeyPosition, DatasourceData, WidgetConfig,
//! };
//! use aggregated_value_card::defaults::create_default_aggregated_value_latest_data_keys;
//! use serde_json::json;
//!
//! let keys = create_default_aggregated_value_latest_data_keys("temperature", "°C");
//! let config = WidgetConfig::new(Default::default(), keys.clone());
//! let mut card = AggregatedValueCard::new(config);
//!
//! card.on_data_updated(&[DatasourceData::new(keys[0].clone(), vec![(1000, json!(21.7))])]);
//! let center = card.value(AggregatedValueCardKeyPosition::Center).unwrap();
//! assert_eq!(center.value, "22");
//! ```

pub mod color;
pub mod config;
pub mod date_format;
pub mod defaults;
pub mod error;
pub mod lookup;
pub mod models;

pub use color::ColorProcessor;
pub use config::WidgetConfig;
pub use date_format::DateFormatProcessor;
pub use error::{CardError, Result};
pub use lookup::{compute_aggregated_card_value, format_value, ts_value_by_latest_data_key};
pub use models::*;

use std::fmt;

use tracing::debug;

use crate::config::ENTITY_NAME_PLACEHOLDER;

// ---------------------------------------------------------------------------
// AggregatedValueCard
// ---------------------------------------------------------------------------

/// Runtime state of one card instance.
///
/// Resolves a value per slot once, from the key name of the first configured
/// data key, and refreshes those values whenever new samples arrive.
pub struct AggregatedValueCard {
    config: WidgetConfig,
    values: Vec<(AggregatedValueCardKeyPosition, AggregatedValueCardValue)>,
    date_format: DateFormatProcessor,
    last_ts: Option<i64>,
}

impl AggregatedValueCard {
    pub fn new(config: WidgetConfig) -> Self {
        let values = match config.data_keys.first() {
            Some(first) => AggregatedValueCardKeyPosition::ALL
                .into_iter()
                .filter_map(|position| {
                    compute_aggregated_card_value(&config.data_keys, &first.name, position)
                        .map(|value| (position, value))
                })
                .collect(),
            None => Vec::new(),
        };
        debug!(slots = values.len(), "resolved card slots");
        let date_format = DateFormatProcessor::new(&config.settings.date_format);
        Self {
            config,
            values,
            date_format,
            last_ts: None,
        }
    }

    pub fn settings(&self) -> &AggregatedValueCardWidgetSettings {
        &self.config.settings
    }

    /// Resolved slots, center first.
    pub fn values(&self) -> impl Iterator<Item = &AggregatedValueCardValue> {
        self.values.iter().map(|(_, value)| value)
    }

    pub fn value(
        &self,
        position: AggregatedValueCardKeyPosition,
    ) -> Option<&AggregatedValueCardValue> {
        self.values
            .iter()
            .find(|(p, _)| *p == position)
            .map(|(_, value)| value)
    }

    /// Refresh every slot from the latest fetched samples.
    pub fn on_data_updated(&mut self, latest_data: &[DatasourceData]) {
        for (position, value) in &mut self.values {
            let sample = ts_value_by_latest_data_key(latest_data, &value.key);
            if *position == AggregatedValueCardKeyPosition::Center {
                self.last_ts = sample.as_ref().map(|(ts, _)| *ts);
            }
            value.update(sample.as_ref());
        }
    }

    /// Timestamp of the center slot's latest sample.
    pub fn last_ts(&self) -> Option<i64> {
        self.last_ts
    }

    /// The date line, if dates are shown and a sample has arrived.
    pub fn formatted_date(&self, now: i64) -> Option<String> {
        if !self.config.settings.show_date {
            return None;
        }
        self.last_ts.map(|ts| self.date_format.format(ts, now))
    }

    /// The subtitle with the entity name substituted, if subtitles are shown.
    pub fn subtitle(&self, entity_name: &str) -> Option<String> {
        let settings = &self.config.settings;
        settings
            .show_subtitle
            .then(|| settings.subtitle.replace(ENTITY_NAME_PLACEHOLDER, entity_name))
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for AggregatedValueCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<&str> = self.values.iter().map(|(p, _)| p.as_str()).collect();
        write!(
            f,
            "AggregatedValueCard(keys={}, slots=[{}], last_ts={:?})",
            self.config.data_keys.len(),
            slots.join(", "),
            self.last_ts
        )
    }
}
