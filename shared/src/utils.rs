// Numeric helpers shared by every formatter.

/// Rounds to the nearest integer, ties toward positive infinity
/// (`-2.5 -> -2`, `2.5 -> 3`). `f64::round` would send ties away from zero.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Plain string coercion of a number: shortest round-trip digits, `NaN`,
/// `Infinity`/`-Infinity`, no negative zero, and exponent notation outside
/// `[1e-6, 1e21)` (`1e+21`, `1e-7`).
pub fn number_to_display_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        };
    }
    value.to_string()
}
