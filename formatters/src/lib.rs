// Formatters library root
// Locale-aware currency, number and date formatting for the dashboard widgets,
// plus the percentage helpers and named date ranges they rely on.

pub mod config;
pub mod error;
pub mod intl;
pub mod localization;
pub mod utils;

pub use config::FormatterSettings;
pub use error::FormatError;
pub use intl::{BuiltinIntl, IntlProvider};
pub use localization::{
    create_value_formatter, date_range_label, format_currency, format_date, format_date_by_key,
    format_number_by_locale, get_date_range, get_today, has_multiple_years, serialize_date,
    DateRangeResolver, DateSerialization, Localizer, INVALID_DATE,
};
pub use utils::{calculate_percentage, percentage_change, percentage_formatter};

// Re-exported so callers only need this crate for the common types.
pub use shared::{
    Currency, DateFormat, DateRange, DateRangeOption, DateValue, Locale, ValueFormatKind,
};
