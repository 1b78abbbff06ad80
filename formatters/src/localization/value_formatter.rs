// Factory for per-widget value formatters.
use super::Localizer;
use shared::utils::number_to_display_string;
use shared::{Currency, Locale, ValueFormatKind};

impl<'a> Localizer<'a> {
    pub fn value_formatter(
        self,
        kind: ValueFormatKind,
        locale: Locale,
        currency: Currency,
    ) -> impl Fn(f64) -> String + Send + Sync + 'a {
        move |value| match kind {
            ValueFormatKind::Localized => self.format_number_by_locale(value, locale, false),
            ValueFormatKind::Abbreviated => self.format_number_by_locale(value, locale, true),
            ValueFormatKind::Currency => self.format_currency(value, currency, locale, true),
            ValueFormatKind::None => number_to_display_string(value),
        }
    }
}

/// Returns a stateless formatter for raw widget values.
pub fn create_value_formatter(
    kind: ValueFormatKind,
    locale: Locale,
    currency: Currency,
) -> impl Fn(f64) -> String + Send + Sync + 'static {
    Localizer::default().value_formatter(kind, locale, currency)
}
