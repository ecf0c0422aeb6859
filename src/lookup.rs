//! Slot resolution and latest-sample lookup.
//!
//! Both lookups are infallible: a slot with no configured key or a key with
//! no samples yields `None`, never an error.

use serde_json::Value;
use tracing::debug;

use crate::color::ColorProcessor;
use crate::config::{DEFAULT_LETTER_SPACING, MAX_DECIMALS};
use crate::models::{
    text_style, AggregatedValueCardKeyPosition, AggregatedValueCardValue, DataEntry, DataKey,
    DatasourceData,
};

/// Build the presentation shell for the key shown at `position`.
///
/// Picks the first key named `key_name` whose effective position (center when
/// unset) equals `position`. The returned value is empty and both arrows are
/// off; [`AggregatedValueCardValue::update`] fills them in.
pub fn compute_aggregated_card_value(
    data_keys: &[DataKey],
    key_name: &str,
    position: AggregatedValueCardKeyPosition,
) -> Option<AggregatedValueCardValue> {
    let Some(key) = data_keys
        .iter()
        .find(|k| k.name == key_name && k.settings.effective_position() == position)
    else {
        debug!(key = key_name, %position, "no data key configured for slot");
        return None;
    };

    let settings = &key.settings;
    Some(AggregatedValueCardValue {
        key: key.clone(),
        value: String::new(),
        units: key.units.clone(),
        style: text_style(Some(&settings.font), DEFAULT_LETTER_SPACING),
        color: ColorProcessor::from_settings(&settings.color),
        center: position == AggregatedValueCardKeyPosition::Center,
        show_arrow: settings.show_arrow,
        up_arrow: false,
        down_arrow: false,
    })
}

/// Latest `(timestamp, value)` sample fetched for `data_key`.
///
/// Entries are matched by full key equality, so keys sharing a name but
/// configured for different slots stay distinct. The first sample of the
/// matching entry is returned; the fetch layer orders samples newest first.
pub fn ts_value_by_latest_data_key(
    latest_data: &[DatasourceData],
    data_key: &DataKey,
) -> Option<DataEntry> {
    let sample = latest_data
        .iter()
        .find(|ds| ds.data_key == *data_key)
        .and_then(|ds| ds.data.first())
        .cloned();
    if sample.is_none() {
        debug!(key = %data_key.name, "no latest sample for data key");
    }
    sample
}

/// Render a sample value as display text.
///
/// Numbers and numeric strings are fixed to `decimals` places when given,
/// capped at [`MAX_DECIMALS`].
/// `null` renders as an empty string.
pub fn format_value(value: &Value, decimals: Option<u32>) -> String {
    match (value, decimals, as_number(value)) {
        (Value::Null, _, _) => String::new(),
        (_, Some(dec), Some(num)) => format!("{:.*}", dec.min(MAX_DECIMALS) as usize, num),
        (Value::String(s), _, _) => s.clone(),
        (other, _, _) => other.to_string(),
    }
}

/// Numeric reading of a sample value: a JSON number or a numeric string.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
