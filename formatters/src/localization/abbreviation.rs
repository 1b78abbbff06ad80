// Magnitude ladders shared by the currency and number abbreviators.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnitude {
    pub divisor: f64,
    pub suffix: &'static str,
}

// Largest first. Currency uses a lowercase thousands suffix, plain numbers an uppercase one.
pub const CURRENCY_LADDER: [Magnitude; 4] = [
    Magnitude { divisor: 1e12, suffix: "T" },
    Magnitude { divisor: 1e9, suffix: "B" },
    Magnitude { divisor: 1e6, suffix: "M" },
    Magnitude { divisor: 1e3, suffix: "k" },
];

pub const NUMBER_LADDER: [Magnitude; 4] = [
    Magnitude { divisor: 1e12, suffix: "T" },
    Magnitude { divisor: 1e9, suffix: "B" },
    Magnitude { divisor: 1e6, suffix: "M" },
    Magnitude { divisor: 1e3, suffix: "K" },
];

/// Picks the largest divisor not exceeding `|value|`, or `None` below the
/// smallest rung (and for NaN/infinite input).
pub fn pick_magnitude(value: f64, ladder: &[Magnitude]) -> Option<Magnitude> {
    if !value.is_finite() {
        return None;
    }
    let abs = value.abs();
    ladder.iter().copied().find(|m| abs >= m.divisor)
}

// Largest integer an f64 holds without gaps (2^53 - 1).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// True when `abs / divisor` has at most two fraction digits with no residue,
/// i.e. `abs` is an exact multiple of `divisor / 100`.
///
/// Every rung is at least 1000, so the step is a whole number and only whole
/// amounts can qualify. The remainder is computed exactly; past 2^53 the
/// amount itself is no longer exact and never abbreviates.
pub fn divides_cleanly(abs: f64, divisor: f64) -> bool {
    let step = divisor / 100.0;
    abs.fract() == 0.0 && abs <= MAX_EXACT_INTEGER && abs % step == 0.0
}

/// The abbreviated digits of `abs` (up to two fraction digits, trailing
/// zeros trimmed), using `decimal` as the separator.
pub fn scaled_digits(abs: f64, divisor: f64, decimal: &str) -> String {
    let fixed = format!("{:.2}", abs / divisor);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.replace('.', decimal)
}
