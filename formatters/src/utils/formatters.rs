// Percentage display and the older, locale-free number helpers.
use shared::utils::{number_to_display_string, round_half_up};

/// Rounds to two decimals; `NaN` shows as `0%`, infinities as `+∞%`/`-∞%`,
/// positive values carry an explicit `+`.
pub fn percentage_formatter(value: f64) -> String {
    let mut percentage = round_to_two(value);

    if percentage.is_nan() {
        percentage = 0.0;
    }
    if percentage.is_infinite() {
        return if percentage > 0.0 { "+∞%" } else { "-∞%" }.to_string();
    }

    if percentage > 0.0 {
        return format!("+{}%", number_to_display_string(percentage));
    }
    // negative and zero
    format!("{}%", number_to_display_string(percentage))
}

pub fn round_to_two(value: f64) -> f64 {
    round_half_up((value + f64::EPSILON) * 100.0) / 100.0
}

// Thousands separators on the integer part only ("1234567.891" -> "1,234,567.891").
pub fn add_commas_to_number(value: f64) -> String {
    let text = number_to_display_string(value);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, rest) = match unsigned.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}{}", sign, grouped, rest)
}

const LEGACY_LADDER: [(f64, &str); 7] = [
    (1e18, "QQ"),
    (1e15, "Q"),
    (1e12, "T"),
    (1e9, "B"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
];

/// Older abbreviation without the evenness rule: always rounds to `digits`
/// fraction digits and trims trailing zeros. Anything below 1 renders as `"0"`.
pub fn abbreviate_number(num: f64, digits: usize) -> String {
    let Some((divisor, symbol)) = LEGACY_LADDER.iter().find(|(value, _)| num >= *value) else {
        return "0".to_string();
    };

    let fixed = format!("{:.*}", digits, num / divisor);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    format!("{}{}", trimmed, symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_formatter_special_values() {
        assert_eq!(percentage_formatter(f64::NAN), "0%");
        assert_eq!(percentage_formatter(f64::INFINITY), "+∞%");
        assert_eq!(percentage_formatter(f64::NEG_INFINITY), "-∞%");
    }

    #[test]
    fn test_percentage_formatter_signs() {
        assert_eq!(percentage_formatter(5.0), "+5%");
        assert_eq!(percentage_formatter(-5.0), "-5%");
        assert_eq!(percentage_formatter(0.0), "0%");
        assert_eq!(percentage_formatter(12.345), "+12.35%");
        assert_eq!(percentage_formatter(-0.001), "0%");
    }

    #[test]
    fn test_round_to_two() {
        assert_eq!(round_to_two(1.005), 1.01);
        assert_eq!(round_to_two(2.344), 2.34);
        assert_eq!(round_to_two(-2.345), -2.34);
    }

    #[test]
    fn test_add_commas_to_number() {
        assert_eq!(add_commas_to_number(1234567.0), "1,234,567");
        assert_eq!(add_commas_to_number(1234567.891), "1,234,567.891");
        assert_eq!(add_commas_to_number(-9876.5), "-9,876.5");
        assert_eq!(add_commas_to_number(999.0), "999");
        assert_eq!(add_commas_to_number(0.12345), "0.12345");
    }

    #[test]
    fn test_abbreviate_number() {
        assert_eq!(abbreviate_number(0.5, 1), "0");
        assert_eq!(abbreviate_number(999.0, 1), "999");
        assert_eq!(abbreviate_number(1234.0, 1), "1.2k");
        assert_eq!(abbreviate_number(1_500_000.0, 1), "1.5M");
        assert_eq!(abbreviate_number(2e9, 2), "2B");
        assert_eq!(abbreviate_number(1234.0, 0), "1k");
        assert_eq!(abbreviate_number(3e18, 1), "3QQ");
    }
}
