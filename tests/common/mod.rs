//! Shared fixtures for the aggregated value card integration tests.

#![allow(dead_code)]

use aggregated_value_card::defaults::create_default_aggregated_value_latest_data_keys;
use aggregated_value_card::{DataEntry, DataKey, DatasourceData};
use serde_json::json;

/// The three default keys for a temperature metric.
pub fn temperature_keys() -> Vec<DataKey> {
    create_default_aggregated_value_latest_data_keys("temperature", "°C")
}

/// Latest data with one sample per key, in key order.
pub fn latest_data(keys: &[DataKey], samples: &[DataEntry]) -> Vec<DatasourceData> {
    keys.iter()
        .zip(samples)
        .map(|(key, sample)| DatasourceData::new(key.clone(), vec![sample.clone()]))
        .collect()
}

/// A stored card document as the dashboard would persist it.
pub fn sample_config_json() -> String {
    json!({
        "settings": {
            "showSubtitle": true,
            "subtitle": "${entityName} sensor",
            "showDate": true,
            "dateFormat": { "format": "%Y-%m-%d %H:%M", "lastUpdateAgo": false, "custom": true },
            "showChart": false,
            "chartColor": "#305680",
            "background": { "type": "color", "color": "#f5f5f5",
                            "overlay": { "enabled": true, "color": "rgba(0,0,0,0.1)", "blur": 5 } }
        },
        "dataKeys": [
            {
                "name": "humidity",
                "label": "Humidity",
                "type": "timeseries",
                "units": "%",
                "decimals": 1,
                "aggregationType": "NONE",
                "settings": {
                    "font": { "family": "Roboto", "size": 40, "sizeUnit": "px",
                              "style": "normal", "weight": "500", "lineHeight": "1" },
                    "color": { "type": "constant", "color": "#000" },
                    "showArrow": false
                }
            },
            {
                "name": "humidity",
                "label": "Delta humidity",
                "type": "timeseries",
                "units": "%",
                "decimals": 0,
                "aggregationType": "AVG",
                "comparisonEnabled": true,
                "timeForComparison": "previousInterval",
                "comparisonResultType": "DELTA_PERCENT",
                "settings": {
                    "position": "leftBottom",
                    "font": { "family": "Arial", "size": 12, "sizeUnit": "px",
                              "style": "italic", "weight": "400", "lineHeight": "1" },
                    "color": {
                        "type": "range",
                        "color": "#000",
                        "rangeList": [ { "to": 0, "color": "green" }, { "from": 0, "color": "red" } ]
                    },
                    "showArrow": true
                }
            }
        ]
    })
    .to_string()
}
