// Localization: locale-aware currency, number and date rendering, date-range
// arithmetic and the value-formatter factory.
//
// Every operation is a method on `Localizer`, which only holds the
// `IntlProvider` doing the low-level work. The free functions re-exported
// below run against the built-in provider.
pub mod abbreviation;
pub mod calendar;
pub mod currency;
pub mod date;
pub mod date_range;
pub mod labels;
pub mod number;
pub mod value_formatter;

use crate::intl::{IntlProvider, BUILTIN};

pub use currency::format_currency;
pub use date::{
    format_date, format_date_by_key, has_multiple_years, serialize_date, DateSerialization,
    INVALID_DATE,
};
#[allow(deprecated)]
pub use date::shorthand_dates;
pub use date_range::{get_date_range, get_today, today_at, DateRangeResolver};
pub use labels::date_range_label;
pub use number::format_number_by_locale;
pub use value_formatter::create_value_formatter;

#[derive(Clone, Copy)]
pub struct Localizer<'a> {
    intl: &'a dyn IntlProvider,
}

impl<'a> Localizer<'a> {
    pub fn new(intl: &'a dyn IntlProvider) -> Self {
        Localizer { intl }
    }

    pub fn intl(&self) -> &'a dyn IntlProvider {
        self.intl
    }
}

impl Default for Localizer<'static> {
    fn default() -> Self {
        Localizer::new(&BUILTIN)
    }
}

impl std::fmt::Debug for Localizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer").finish_non_exhaustive()
    }
}
