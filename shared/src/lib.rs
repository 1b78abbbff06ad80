pub mod dates;
pub mod error;
pub mod formats;
pub mod locale;
pub mod models;
pub mod utils;

// The formatting crate works almost exclusively with these types, so they are
// re-exported at the crate root.
pub use dates::DateValue;
pub use error::ParseKindError;
pub use formats::{
    DateComponents, DateFormat, DateRange, DateRangeOption, MonthStyle, ValueFormatKind,
};
pub use locale::{Currency, Locale};
pub use models::{Dataset, Dimension, DropdownOption, WidgetData};
