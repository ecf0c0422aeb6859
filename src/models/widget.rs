use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::card::AggregatedValueCardKeySettings;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataKeyType {
    #[default]
    Timeseries,
    Attribute,
    Function,
    Alarm,
    EntityField,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationType {
    Min,
    Max,
    Avg,
    Sum,
    Count,
    #[default]
    None,
}

/// Interval the current value is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonInterval {
    PreviousInterval,
    Days,
    Weeks,
    Months,
    Years,
    CustomInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonResultType {
    PreviousValue,
    DeltaAbsolute,
    DeltaPercent,
}

// ---------------------------------------------------------------------------
// DataKey — one configured data series
// ---------------------------------------------------------------------------

/// A configured data series with this widget's per-key settings embedded.
///
/// Several keys may share a `name` and differ by `settings.position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataKey {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub key_type: DataKeyType,
    #[serde(default)]
    pub units: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    #[serde(default)]
    pub aggregation_type: AggregationType,
    #[serde(default)]
    pub comparison_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_for_comparison: Option<ComparisonInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_result_type: Option<ComparisonResultType>,
    #[serde(default = "AggregatedValueCardKeySettings::unpositioned")]
    pub settings: AggregatedValueCardKeySettings,
}

impl DataKey {
    /// A plain timeseries key with default card settings.
    pub fn timeseries(name: &str, units: &str) -> Self {
        Self {
            name: name.to_string(),
            label: name.to_string(),
            key_type: DataKeyType::Timeseries,
            units: units.to_string(),
            decimals: None,
            aggregation_type: AggregationType::None,
            comparison_enabled: false,
            time_for_comparison: None,
            comparison_result_type: None,
            settings: AggregatedValueCardKeySettings::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// DatasourceData — latest samples fetched for one key
// ---------------------------------------------------------------------------

/// A `(timestamp_millis, value)` sample.
pub type DataEntry = (i64, Value);

/// Samples for one data key, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceData {
    pub data_key: DataKey,
    #[serde(default)]
    pub data: Vec<DataEntry>,
}

impl DatasourceData {
    pub fn new(data_key: DataKey, data: Vec<DataEntry>) -> Self {
        Self { data_key, data }
    }
}
