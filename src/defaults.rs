//! Default settings a new card starts from.
//!
//! Every builder returns a freshly allocated value; callers may mutate the
//! result without affecting later calls.

use crate::models::{
    constant_color, last_update_ago_date_format, range_color, AggregatedValueCardKeyPosition,
    AggregatedValueCardKeySettings, AggregatedValueCardWidgetSettings, AggregationType,
    BackgroundSettings, ColorRange, ComparisonInterval, ComparisonResultType, DataKey,
    DataKeyType, Font, DEFAULT_TEXT_COLOR,
};

/// Muted text color used for subtitles, dates and secondary values.
pub const MUTED_TEXT_COLOR: &str = "rgba(0, 0, 0, 0.38)";
/// Color of a falling delta.
pub const DELTA_DOWN_COLOR: &str = "#198038";
/// Color of a rising delta.
pub const DELTA_UP_COLOR: &str = "#D12730";

pub fn aggregated_value_card_default_settings() -> AggregatedValueCardWidgetSettings {
    AggregatedValueCardWidgetSettings {
        show_subtitle: true,
        subtitle: "${entityName}".to_string(),
        subtitle_font: Font::roboto(12.0, "400", "16px"),
        subtitle_color: MUTED_TEXT_COLOR.to_string(),
        show_date: true,
        date_format: last_update_ago_date_format(),
        date_font: Font::roboto(12.0, "400", "16px"),
        date_color: MUTED_TEXT_COLOR.to_string(),
        show_chart: true,
        chart_color: DEFAULT_TEXT_COLOR.to_string(),
        background: BackgroundSettings::default(),
    }
}

pub fn aggregated_value_card_default_key_settings() -> AggregatedValueCardKeySettings {
    AggregatedValueCardKeySettings {
        position: Some(AggregatedValueCardKeyPosition::Center),
        font: Font::roboto(14.0, "500", "1"),
        color: constant_color(DEFAULT_TEXT_COLOR),
        show_arrow: false,
    }
}

/// The three keys a new card shows for one metric: the current value in the
/// center, the percent delta top right and the absolute delta bottom right.
pub fn create_default_aggregated_value_latest_data_keys(
    key_name: &str,
    units: &str,
) -> Vec<DataKey> {
    let current = DataKey {
        decimals: Some(0),
        settings: AggregatedValueCardKeySettings {
            position: Some(AggregatedValueCardKeyPosition::Center),
            font: Font::roboto(52.0, "500", "1"),
            color: constant_color(DEFAULT_TEXT_COLOR),
            show_arrow: false,
        },
        ..DataKey::timeseries(key_name, units)
    };

    let delta_percent = DataKey {
        label: format!("Delta percent {}", key_name),
        units: "%".to_string(),
        decimals: Some(0),
        ..comparison_key(
            key_name,
            ComparisonResultType::DeltaPercent,
            AggregatedValueCardKeySettings {
                position: Some(AggregatedValueCardKeyPosition::RightTop),
                font: Font::roboto(14.0, "500", "1"),
                color: range_color(
                    DEFAULT_TEXT_COLOR,
                    vec![
                        ColorRange::new(None, Some(0.0), DELTA_DOWN_COLOR),
                        ColorRange::new(Some(0.0), Some(0.0), DEFAULT_TEXT_COLOR),
                        ColorRange::new(Some(0.0), None, DELTA_UP_COLOR),
                    ],
                ),
                show_arrow: true,
            },
        )
    };

    let delta_absolute = DataKey {
        label: format!("Delta absolute {}", key_name),
        units: units.to_string(),
        decimals: Some(1),
        ..comparison_key(
            key_name,
            ComparisonResultType::DeltaAbsolute,
            AggregatedValueCardKeySettings {
                position: Some(AggregatedValueCardKeyPosition::RightBottom),
                font: Font::roboto(11.0, "400", "1"),
                color: constant_color(MUTED_TEXT_COLOR),
                show_arrow: false,
            },
        )
    };

    vec![current, delta_percent, delta_absolute]
}

/// Averaged timeseries key compared against the previous interval.
fn comparison_key(
    key_name: &str,
    result_type: ComparisonResultType,
    settings: AggregatedValueCardKeySettings,
) -> DataKey {
    DataKey {
        name: key_name.to_string(),
        label: key_name.to_string(),
        key_type: DataKeyType::Timeseries,
        units: String::new(),
        decimals: None,
        aggregation_type: AggregationType::Avg,
        comparison_enabled: true,
        time_for_comparison: Some(ComparisonInterval::PreviousInterval),
        comparison_result_type: Some(result_type),
        settings,
    }
}
