// Internationalization primitives.
//
// Call sites only talk to `IntlProvider`; `BuiltinIntl` implements it from the
// static tables in `locale_data`.
pub mod locale_data;

use chrono::{Datelike, NaiveDate};
use shared::{Currency, DateComponents, Locale, MonthStyle};

pub use locale_data::{locale_data, week_start, Grouping, NumberConventions, SymbolPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    MinusSign,
    Currency,
    Literal,
    Integer,
    Group,
    Decimal,
    Fraction,
    Nan,
    Infinity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPart {
    pub kind: PartKind,
    pub value: String,
}

impl FormatPart {
    fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    // Up to three fraction digits.
    Decimal,
    // Exactly the currency's minor-unit digits.
    Currency(Currency),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Medium,
    Components(DateComponents),
}

pub fn join_parts(parts: &[FormatPart]) -> String {
    parts.iter().map(|p| p.value.as_str()).collect()
}

// Common trait for the formatting engine
pub trait IntlProvider: Send + Sync {
    fn decompose_parts(&self, value: f64, style: NumberStyle, locale: Locale) -> Vec<FormatPart>;

    fn format_date(&self, date: NaiveDate, style: DateStyle, locale: Locale) -> String;

    fn format_number(&self, value: f64, locale: Locale) -> String {
        join_parts(&self.decompose_parts(value, NumberStyle::Decimal, locale))
    }

    fn format_currency(&self, amount: f64, currency: Currency, locale: Locale) -> String {
        join_parts(&self.decompose_parts(amount, NumberStyle::Currency(currency), locale))
    }

    // Which side of the digits the symbol lands on, read back from the parts.
    fn currency_position(&self, currency: Currency, locale: Locale) -> SymbolPosition {
        let parts = self.decompose_parts(1.0, NumberStyle::Currency(currency), locale);
        let currency_at = parts.iter().position(|p| p.kind == PartKind::Currency);
        let integer_at = parts.iter().position(|p| p.kind == PartKind::Integer);
        match (currency_at, integer_at) {
            (Some(c), Some(i)) if c > i => SymbolPosition::Suffix,
            _ => SymbolPosition::Prefix,
        }
    }

    fn decimal_separator(&self, locale: Locale) -> String {
        self.decompose_parts(1.5, NumberStyle::Decimal, locale)
            .into_iter()
            .find(|p| p.kind == PartKind::Decimal)
            .map(|p| p.value)
            .unwrap_or_else(|| ".".to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinIntl;

pub static BUILTIN: BuiltinIntl = BuiltinIntl;

// Splits the integer digits into display groups, left to right.
fn group_integer(digits: &str, conventions: &NumberConventions) -> Vec<String> {
    if digits.len() < 3 + conventions.min_grouping_digits {
        return vec![digits.to_string()];
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let width = match conventions.grouping {
        Grouping::Standard => 3,
        Grouping::Indian => 2,
    };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(width);
        groups.push(head[start..end].to_string());
        end = start;
    }
    groups.reverse();
    groups.push(tail.to_string());
    groups
}

fn number_body(
    abs: f64,
    max_fraction: usize,
    min_fraction: usize,
    conventions: &NumberConventions,
) -> Vec<FormatPart> {
    if abs.is_nan() {
        return vec![FormatPart::new(PartKind::Nan, "NaN")];
    }
    if abs.is_infinite() {
        return vec![FormatPart::new(PartKind::Infinity, "∞")];
    }

    let fixed = format!("{:.*}", max_fraction, abs);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut fraction = fraction.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut parts = Vec::new();
    for (i, group) in group_integer(integer, conventions).into_iter().enumerate() {
        if i > 0 {
            parts.push(FormatPart::new(PartKind::Group, conventions.group.to_string()));
        }
        parts.push(FormatPart::new(PartKind::Integer, group));
    }
    if !fraction.is_empty() {
        parts.push(FormatPart::new(PartKind::Decimal, conventions.decimal.to_string()));
        parts.push(FormatPart::new(PartKind::Fraction, fraction));
    }
    parts
}

fn is_rendered_zero(body: &[FormatPart]) -> bool {
    body.iter()
        .filter(|p| matches!(p.kind, PartKind::Integer | PartKind::Fraction))
        .all(|p| p.value.chars().all(|c| c == '0'))
}

fn render_pattern(pattern: &str, date: NaiveDate, month_name: &str) -> String {
    pattern
        .replace("{month}", month_name)
        .replace("{dd}", &format!("{:02}", date.day()))
        .replace("{d}", &date.day().to_string())
        .replace("{MM}", &format!("{:02}", date.month()))
        .replace("{M}", &date.month().to_string())
        .replace("{y}", &date.year().to_string())
}

impl IntlProvider for BuiltinIntl {
    fn decompose_parts(&self, value: f64, style: NumberStyle, locale: Locale) -> Vec<FormatPart> {
        let conventions = &locale_data(locale).number;
        let (max_fraction, min_fraction) = match style {
            NumberStyle::Decimal => (3, 0),
            NumberStyle::Currency(currency) => {
                (currency.fraction_digits(), currency.fraction_digits())
            }
        };

        let body = number_body(value.abs(), max_fraction, min_fraction, conventions);
        // No "-0": a negative value that rounds to zero prints unsigned.
        let negative = value < 0.0 && !is_rendered_zero(&body);

        let mut parts = Vec::with_capacity(body.len() + 3);
        if negative {
            parts.push(FormatPart::new(PartKind::MinusSign, "-"));
        }

        let currency = match style {
            NumberStyle::Decimal => {
                parts.extend(body);
                return parts;
            }
            NumberStyle::Currency(currency) => currency,
        };

        let symbol = locale_data::currency_symbol(currency, locale);
        match conventions.currency_position {
            SymbolPosition::Prefix => {
                parts.push(FormatPart::new(PartKind::Currency, symbol));
                // Alphabetic symbols ("kr") never touch the digits.
                let spacing = if conventions.currency_spacing.is_empty()
                    && symbol.chars().last().is_some_and(char::is_alphabetic)
                {
                    "\u{a0}"
                } else {
                    conventions.currency_spacing
                };
                if !spacing.is_empty() {
                    parts.push(FormatPart::new(PartKind::Literal, spacing));
                }
                parts.extend(body);
            }
            SymbolPosition::Suffix => {
                parts.extend(body);
                if !conventions.currency_spacing.is_empty() {
                    parts.push(FormatPart::new(PartKind::Literal, conventions.currency_spacing));
                }
                parts.push(FormatPart::new(PartKind::Currency, symbol));
            }
        }
        parts
    }

    fn format_date(&self, date: NaiveDate, style: DateStyle, locale: Locale) -> String {
        let conventions = &locale_data(locale).date;
        let (pattern, month_style) = match style {
            DateStyle::Medium => (conventions.medium, MonthStyle::Short),
            DateStyle::Components(components) => {
                let pattern = match (components.day, components.year) {
                    (true, true) => conventions.month_day_year,
                    (true, false) => conventions.month_day,
                    (false, true) => conventions.month_year,
                    (false, false) => "{month}",
                };
                (pattern, components.month)
            }
        };

        let month_index = date.month0() as usize;
        let month_name = match month_style {
            MonthStyle::Short => conventions.short_months[month_index],
            MonthStyle::Long => conventions.long_months[month_index],
        };
        render_pattern(pattern, date, month_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(BUILTIN.format_number(1234567.891, Locale::EnUs), "1,234,567.891");
        assert_eq!(BUILTIN.format_number(1234567.5, Locale::De), "1.234.567,5");
        assert_eq!(BUILTIN.format_number(999.0, Locale::EnUs), "999");
        assert_eq!(BUILTIN.format_number(-1200.0, Locale::EnUs), "-1,200");
    }

    #[test]
    fn test_format_number_rounds_to_three_fraction_digits() {
        assert_eq!(BUILTIN.format_number(1.23456, Locale::EnUs), "1.235");
        assert_eq!(BUILTIN.format_number(-0.0001, Locale::EnUs), "0");
    }

    #[test]
    fn test_spanish_leaves_four_digits_ungrouped() {
        assert_eq!(BUILTIN.format_number(1200.0, Locale::Es), "1200");
        assert_eq!(BUILTIN.format_number(12000.0, Locale::Es), "12.000");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(BUILTIN.format_number(1234567.0, Locale::Hi), "12,34,567");
        assert_eq!(BUILTIN.format_number(123456789.0, Locale::Hi), "12,34,56,789");
        assert_eq!(BUILTIN.format_number(1234.0, Locale::Hi), "1,234");
    }

    #[test]
    fn test_non_finite_numbers() {
        assert_eq!(BUILTIN.format_number(f64::NAN, Locale::EnUs), "NaN");
        assert_eq!(BUILTIN.format_number(f64::INFINITY, Locale::EnUs), "∞");
        assert_eq!(BUILTIN.format_number(f64::NEG_INFINITY, Locale::EnUs), "-∞");
    }

    #[test]
    fn test_format_currency_prefix_and_suffix() {
        assert_eq!(BUILTIN.format_currency(1200.0, Currency::Usd, Locale::EnUs), "$1,200.00");
        assert_eq!(
            BUILTIN.format_currency(5300.0, Currency::Eur, Locale::De),
            "5.300,00\u{a0}€"
        );
        assert_eq!(BUILTIN.format_currency(1234.0, Currency::Jpy, Locale::Ja), "￥1,234");
        assert_eq!(BUILTIN.format_currency(-1234.0, Currency::Gbp, Locale::EnGb), "-£1,234.00");
        assert_eq!(BUILTIN.format_currency(1200.0, Currency::Sek, Locale::EnUs), "kr\u{a0}1,200.00");
    }

    #[test]
    fn test_decompose_parts_kinds() {
        let parts = BUILTIN.decompose_parts(-1234.5, NumberStyle::Currency(Currency::Usd), Locale::EnUs);
        let kinds: Vec<PartKind> = parts.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PartKind::MinusSign,
                PartKind::Currency,
                PartKind::Integer,
                PartKind::Group,
                PartKind::Integer,
                PartKind::Decimal,
                PartKind::Fraction,
            ]
        );
        assert_eq!(join_parts(&parts), "-$1,234.50");
    }

    #[test]
    fn test_currency_position_detection() {
        assert_eq!(BUILTIN.currency_position(Currency::Usd, Locale::EnUs), SymbolPosition::Prefix);
        assert_eq!(BUILTIN.currency_position(Currency::Eur, Locale::De), SymbolPosition::Suffix);
        assert_eq!(BUILTIN.currency_position(Currency::Eur, Locale::Nl), SymbolPosition::Prefix);
    }

    #[test]
    fn test_decimal_separator_detection() {
        assert_eq!(BUILTIN.decimal_separator(Locale::EnUs), ".");
        assert_eq!(BUILTIN.decimal_separator(Locale::Fr), ",");
    }

    #[test]
    fn test_format_date_medium() {
        let d = date(2024, 1, 5);
        assert_eq!(BUILTIN.format_date(d, DateStyle::Medium, Locale::EnUs), "Jan 5, 2024");
        assert_eq!(BUILTIN.format_date(d, DateStyle::Medium, Locale::De), "5. Jan. 2024");
        assert_eq!(BUILTIN.format_date(d, DateStyle::Medium, Locale::Ja), "2024/01/05");
        assert_eq!(BUILTIN.format_date(d, DateStyle::Medium, Locale::ZhCn), "2024年1月5日");
    }

    #[test]
    fn test_format_date_components() {
        let d = date(2024, 3, 9);
        let long_with_year = DateStyle::Components(DateComponents {
            month: MonthStyle::Long,
            day: true,
            year: true,
        });
        let short_no_year = DateStyle::Components(DateComponents {
            month: MonthStyle::Short,
            day: true,
            year: false,
        });
        assert_eq!(BUILTIN.format_date(d, long_with_year, Locale::EnUs), "March 9, 2024");
        assert_eq!(BUILTIN.format_date(d, long_with_year, Locale::Fr), "9 mars 2024");
        assert_eq!(BUILTIN.format_date(d, short_no_year, Locale::EnGb), "9 Mar");
        assert_eq!(BUILTIN.format_date(d, short_no_year, Locale::Ko), "3월 9일");
    }
}
