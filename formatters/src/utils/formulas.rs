use shared::utils::round_half_up;

// Relative change in percent. A zero `old_value` yields ±inf or NaN; callers
// that display the result go through `percentage_formatter`, which handles both.
pub fn percentage_change(old_value: f64, new_value: f64) -> f64 {
    (new_value - old_value) / old_value.abs() * 100.0
}

// Share of `part` in `total` as a whole percentage; 0 when `total` is 0.
pub fn calculate_percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round_half_up(part / total * 100.0)
}
