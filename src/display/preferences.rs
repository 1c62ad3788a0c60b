//! Preference display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::preferences::keys;
use crate::storage::PrimitiveValue;

#[derive(Tabled)]
struct PreferenceRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Known")]
    known: &'static str,
}

/// Format stored entries as a table
pub fn format_preference_table(entries: &[(String, PrimitiveValue)]) -> String {
    if entries.is_empty() {
        return "No preferences stored. Every key reads as its default.".to_string();
    }

    let rows: Vec<PreferenceRow> = entries
        .iter()
        .map(|(key, value)| PreferenceRow {
            key: key.clone(),
            kind: value.kind(),
            value: value.to_string(),
            known: if keys::ALL.contains(&key.as_str()) {
                "yes"
            } else {
                "no"
            },
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format a single raw value, or `(unset)`
pub fn format_raw_value(key: &str, value: Option<&PrimitiveValue>) -> String {
    match value {
        Some(v) => format!("{} = {} ({})", key, v, v.kind()),
        None => format!("{} is unset", key),
    }
}
