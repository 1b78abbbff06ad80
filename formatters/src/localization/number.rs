// Plain locale-aware numbers, optionally abbreviated with K/M/B/T.
use super::abbreviation::{divides_cleanly, pick_magnitude, scaled_digits, NUMBER_LADDER};
use super::Localizer;
use shared::Locale;

impl Localizer<'_> {
    pub fn format_number_by_locale(&self, num: f64, locale: Locale, should_abbreviate: bool) -> String {
        if should_abbreviate {
            if let Some(magnitude) = pick_magnitude(num, &NUMBER_LADDER) {
                let abs = num.abs();
                if divides_cleanly(abs, magnitude.divisor) {
                    let sign = if num < 0.0 { "-" } else { "" };
                    let digits =
                        scaled_digits(abs, magnitude.divisor, &self.intl().decimal_separator(locale));
                    return format!("{}{}{}", sign, digits, magnitude.suffix);
                }
                tracing::debug!(
                    num,
                    divisor = magnitude.divisor,
                    "Number does not abbreviate cleanly, rendering in full"
                );
            }
        }
        self.intl().format_number(num, locale)
    }
}

pub fn format_number_by_locale(num: f64, locale: Locale, should_abbreviate: bool) -> String {
    Localizer::default().format_number_by_locale(num, locale, should_abbreviate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(format_number_by_locale(1234.5678, Locale::EnUs, false), "1,234.568");
        assert_eq!(format_number_by_locale(1200.0, Locale::EnUs, false), "1,200");
        assert_eq!(format_number_by_locale(1200.0, Locale::Fr, false), "1\u{202f}200");
    }

    #[test]
    fn test_abbreviated_number_uses_uppercase_k() {
        assert_eq!(format_number_by_locale(1200.0, Locale::EnUs, true), "1.2K");
        assert_eq!(format_number_by_locale(1000.0, Locale::EnUs, true), "1K");
        assert_eq!(format_number_by_locale(2_500_000.0, Locale::De, true), "2,5M");
        assert_eq!(format_number_by_locale(3e9, Locale::EnUs, true), "3B");
        assert_eq!(format_number_by_locale(-4.5e12, Locale::EnUs, true), "-4.5T");
    }

    #[test]
    fn test_abbreviation_fallbacks() {
        assert_eq!(format_number_by_locale(999.0, Locale::EnUs, true), "999");
        assert_eq!(format_number_by_locale(1234.0, Locale::EnUs, true), "1,234");
        assert_eq!(format_number_by_locale(f64::NAN, Locale::EnUs, true), "NaN");
    }

    #[test]
    fn test_numbers_near_each_rung_render_in_full() {
        for rung in [1e3, 1e6, 1e9, 1e12] {
            for amount in [rung - 1.0, rung + 1.0, rung * 1.23 + 1.0] {
                assert_eq!(
                    format_number_by_locale(amount, Locale::EnUs, true),
                    format_number_by_locale(amount, Locale::EnUs, false),
                    "{} should not abbreviate",
                    amount
                );
            }
        }
        assert_eq!(format_number_by_locale(999_999_999_999.0, Locale::EnUs, true), "999,999,999,999");
        assert_eq!(format_number_by_locale(2.5e12 + 1.0, Locale::De, true), "2.500.000.000.001");
    }
}
