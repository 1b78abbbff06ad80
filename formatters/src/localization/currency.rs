// Currency rendering, optionally abbreviated ("$1.2k", "2,5M €").
use super::abbreviation::{divides_cleanly, pick_magnitude, scaled_digits, CURRENCY_LADDER};
use super::Localizer;
use crate::intl::{join_parts, FormatPart, NumberStyle, PartKind, SymbolPosition};
use shared::{Currency, Locale};

// Drops an all-zero fractional part together with its separator ("$1,200.00" -> "$1,200").
fn strip_zero_fraction(parts: &mut Vec<FormatPart>) {
    let Some(idx) = parts.iter().position(|p| p.kind == PartKind::Fraction) else {
        return;
    };
    if !parts[idx].value.chars().all(|c| c == '0') {
        return;
    }
    parts.remove(idx);
    if idx > 0 && parts[idx - 1].kind == PartKind::Decimal {
        parts.remove(idx - 1);
    }
}

impl Localizer<'_> {
    pub fn format_currency(
        &self,
        amount: f64,
        currency: Currency,
        locale: Locale,
        should_abbreviate: bool,
    ) -> String {
        if should_abbreviate {
            if let Some(abbreviated) = self.abbreviate_currency(amount, currency, locale) {
                return abbreviated;
            }
        }

        let mut parts = self
            .intl()
            .decompose_parts(amount, NumberStyle::Currency(currency), locale);
        strip_zero_fraction(&mut parts);
        join_parts(&parts)
    }

    fn abbreviate_currency(&self, amount: f64, currency: Currency, locale: Locale) -> Option<String> {
        let magnitude = pick_magnitude(amount, &CURRENCY_LADDER)?;
        let abs = amount.abs();
        if !divides_cleanly(abs, magnitude.divisor) {
            tracing::debug!(
                amount,
                divisor = magnitude.divisor,
                "Amount does not abbreviate cleanly, rendering in full"
            );
            return None;
        }

        let intl = self.intl();
        let parts = intl.decompose_parts(amount, NumberStyle::Currency(currency), locale);
        let sign = if parts.iter().any(|p| p.kind == PartKind::MinusSign) { "-" } else { "" };
        let symbol = parts
            .iter()
            .find(|p| p.kind == PartKind::Currency)
            .map(|p| p.value.as_str())?;
        let digits = scaled_digits(abs, magnitude.divisor, &intl.decimal_separator(locale));

        let text = match intl.currency_position(currency, locale) {
            SymbolPosition::Prefix => format!("{}{}{}{}", sign, symbol, digits, magnitude.suffix),
            SymbolPosition::Suffix => format!("{}{}{} {}", sign, digits, magnitude.suffix, symbol),
        };
        Some(text)
    }
}

/// Formats `amount` in `currency` using `locale` conventions.
///
/// With `should_abbreviate`, amounts of at least 1000 that divide evenly (to
/// two places) by their magnitude are shortened with a k/M/B/T suffix; any
/// other amount renders in full, without a `.00` tail.
pub fn format_currency(
    amount: f64,
    currency: Currency,
    locale: Locale,
    should_abbreviate: bool,
) -> String {
    Localizer::default().format_currency(amount, currency, locale, should_abbreviate)
}
