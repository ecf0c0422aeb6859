//! Card runtime: slot resolution, sample updates, arrows, date and subtitle.

mod common;

use aggregated_value_card::defaults::aggregated_value_card_default_settings;
use aggregated_value_card::{
    compute_aggregated_card_value, format_value, AggregatedValueCard,
    AggregatedValueCardKeyPosition as Position, DataKey, DatasourceData, WidgetConfig,
};
use serde_json::json;

fn default_card() -> AggregatedValueCard {
    AggregatedValueCard::new(WidgetConfig::new(
        aggregated_value_card_default_settings(),
        common::temperature_keys(),
    ))
}

// ---------------------------------------------------------------------------
// format_value
// ---------------------------------------------------------------------------

#[test]
fn format_value_fixes_decimals() {
    assert_eq!(format_value(&json!(21.66), Some(1)), "21.7");
    assert_eq!(format_value(&json!(3), Some(2)), "3.00");
    assert_eq!(format_value(&json!("4.25"), Some(0)), "4");
}

#[test]
fn format_value_caps_decimals() {
    assert_eq!(format_value(&json!(1.5), Some(70_000)), format_value(&json!(1.5), Some(20)));
    assert_eq!(format_value(&json!(1.5), Some(u32::MAX)), "1.50000000000000000000");
}

#[test]
fn update_with_unvalidated_decimals_does_not_panic() {
    let mut key = DataKey::timeseries("t", "");
    key.decimals = Some(70_000);
    let keys = vec![key.clone()];
    let mut card = AggregatedValueCard::new(WidgetConfig::new(
        aggregated_value_card_default_settings(),
        keys,
    ));
    card.on_data_updated(&[DatasourceData::new(key, vec![(1, json!(1.5))])]);
    let center = card.value(Position::Center).unwrap();
    assert_eq!(center.value, "1.50000000000000000000");
}

#[test]
fn format_value_without_decimals_prints_as_given() {
    assert_eq!(format_value(&json!(21.66), None), "21.66");
    assert_eq!(format_value(&json!("on"), Some(1)), "on");
    assert_eq!(format_value(&json!(true), None), "true");
    assert_eq!(format_value(&json!(null), Some(1)), "");
}

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

#[test]
fn default_card_resolves_three_slots_center_first() {
    let card = default_card();
    let centers: Vec<bool> = card.values().map(|v| v.center).collect();
    assert_eq!(centers, vec![true, false, false]);
    assert!(card.value(Position::RightTop).is_some());
    assert!(card.value(Position::RightBottom).is_some());
    assert!(card.value(Position::LeftTop).is_none());
}

#[test]
fn card_without_keys_has_no_slots() {
    let card = AggregatedValueCard::new(WidgetConfig::default());
    assert_eq!(card.values().count(), 0);
    assert_eq!(card.to_string(), "AggregatedValueCard(keys=0, slots=[], last_ts=None)");
}

#[test]
fn card_uses_first_key_name() {
    let config = WidgetConfig::from_json(&common::sample_config_json()).unwrap();
    let card = AggregatedValueCard::new(config);
    assert!(card.value(Position::Center).is_some());
    assert!(card.value(Position::LeftBottom).is_some());
    assert_eq!(card.values().count(), 2);
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[test]
fn update_formats_values_and_sets_arrows() {
    let mut card = default_card();
    let keys = common::temperature_keys();
    let data = common::latest_data(
        &keys,
        &[(2000, json!(21.66)), (2000, json!(-12.4)), (2000, json!(-2.63))],
    );
    card.on_data_updated(&data);

    let center = card.value(Position::Center).unwrap();
    assert_eq!(center.value, "22");
    assert!(!center.up_arrow && !center.down_arrow);

    let percent = card.value(Position::RightTop).unwrap();
    assert_eq!(percent.value, "-12");
    assert!(percent.down_arrow);
    assert!(!percent.up_arrow);
    assert_eq!(percent.color.color(), "#198038");

    let absolute = card.value(Position::RightBottom).unwrap();
    assert_eq!(absolute.value, "-2.6");
    assert!(!absolute.down_arrow);
    assert_eq!(absolute.color.color(), "rgba(0, 0, 0, 0.38)");

    assert_eq!(card.last_ts(), Some(2000));
}

#[test]
fn positive_and_zero_deltas() {
    let mut card = default_card();
    let keys = common::temperature_keys();

    card.on_data_updated(&common::latest_data(&keys, &[(1, json!(1)), (1, json!(8))]));
    let percent = card.value(Position::RightTop).unwrap();
    assert!(percent.up_arrow && !percent.down_arrow);
    assert_eq!(percent.color.color(), "#D12730");

    card.on_data_updated(&common::latest_data(&keys, &[(2, json!(1)), (2, json!(0))]));
    let percent = card.value(Position::RightTop).unwrap();
    assert!(!percent.up_arrow && !percent.down_arrow);
    assert_eq!(percent.color.color(), "rgba(0, 0, 0, 0.87)");
}

#[test]
fn missing_samples_show_placeholder() {
    let mut card = default_card();
    let keys = common::temperature_keys();
    card.on_data_updated(&common::latest_data(&keys, &[(1, json!(5)), (1, json!(3))]));
    card.on_data_updated(&[]);

    for value in card.values() {
        assert_eq!(value.value, "N/A");
        assert!(!value.up_arrow && !value.down_arrow);
    }
    assert_eq!(card.last_ts(), None);
}

#[test]
fn update_on_shell_directly() {
    let keys = common::temperature_keys();
    let mut value = compute_aggregated_card_value(&keys, "temperature", Position::RightTop).unwrap();
    value.update(Some(&(10, json!("7.9"))));
    assert_eq!(value.value, "8");
    assert!(value.up_arrow);
    value.update(Some(&(11, json!("offline"))));
    assert_eq!(value.value, "offline");
    assert!(!value.up_arrow && !value.down_arrow);
}

// ---------------------------------------------------------------------------
// Date and subtitle
// ---------------------------------------------------------------------------

#[test]
fn date_line_follows_widget_format() {
    let mut card = default_card();
    assert!(card.formatted_date(0).is_none());

    let keys = common::temperature_keys();
    card.on_data_updated(&common::latest_data(&keys, &[(0, json!(1))]));
    assert_eq!(
        card.formatted_date(2 * 3_600_000).as_deref(),
        Some("Last update 2 hours ago")
    );
}

#[test]
fn hidden_date_yields_none() {
    let mut settings = aggregated_value_card_default_settings();
    settings.show_date = false;
    let keys = common::temperature_keys();
    let mut card = AggregatedValueCard::new(WidgetConfig::new(settings, keys.clone()));
    card.on_data_updated(&common::latest_data(&keys, &[(0, json!(1))]));
    assert!(card.formatted_date(1000).is_none());
}

#[test]
fn subtitle_substitutes_entity_name() {
    let config = WidgetConfig::from_json(&common::sample_config_json()).unwrap();
    let card = AggregatedValueCard::new(config);
    assert_eq!(card.subtitle("Boiler 3").as_deref(), Some("Boiler 3 sensor"));

    let mut settings = aggregated_value_card_default_settings();
    settings.show_subtitle = false;
    let card = AggregatedValueCard::new(WidgetConfig::new(settings, vec![]));
    assert!(card.subtitle("Boiler 3").is_none());
}
