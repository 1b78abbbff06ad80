// Small helpers shared by the widget components.
use serde_json::Value;
use shared::{DropdownOption, WidgetData};

// True when the text has no non-zero digit ("0.00", "-0", "" all qualify).
pub fn contains_all_zeros(value: &str) -> bool {
    !value.chars().any(|c| ('1'..='9').contains(&c))
}

/// Parses a CSS pixel length such as `"12px"` or `" 4.5 "`.
/// Blank input is 0, anything else unparseable is `NaN`.
pub fn convert_px_to_number(value: &str) -> f64 {
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    if number.is_empty() {
        return 0.0;
    }
    number.parse().unwrap_or(f64::NAN)
}

/// Pairs the first dataset's points (labels) with the dimension's points
/// (values). Without a dimension the labels double as values; a dimension
/// shorter than the labels leaves `null` values.
pub fn generate_dropdown_values(data: &WidgetData) -> Vec<DropdownOption> {
    let Some(first) = data.datasets.first() else {
        return Vec::new();
    };
    let values = data
        .dimension
        .as_ref()
        .map(|d| d.data.as_slice())
        .unwrap_or(first.data.as_slice());

    first
        .data
        .iter()
        .enumerate()
        .map(|(idx, label)| DropdownOption {
            label: label.clone(),
            value: values.get(idx).cloned().unwrap_or(Value::Null),
        })
        .collect()
}
