// Formatter settings, usually loaded from a JSON file next to the dashboard config.
use crate::error::FormatError;
use crate::localization::{self, Localizer};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared::{Currency, DateFormat, DateRange, DateRangeOption, DateValue, Locale, ValueFormatKind};
use std::path::Path;

// Raw keys are kept as written so a typo in the file degrades to the
// defaults instead of failing the whole load. Use `validate` to be strict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatterSettings {
    pub locale: String,
    pub currency: String,
    pub date_format: String,
    pub value_format: String,
    pub enable_today: bool,
    pub local_timezone: bool,
}

impl Default for FormatterSettings {
    fn default() -> Self {
        FormatterSettings {
            locale: Locale::default().tag().to_string(),
            currency: Currency::default().code().to_string(),
            date_format: DateFormat::default().key().to_string(),
            value_format: ValueFormatKind::default().key().to_string(),
            enable_today: false,
            local_timezone: false,
        }
    }
}

impl FormatterSettings {
    pub fn from_json_str(json: &str) -> Result<Self, FormatError> {
        let settings: FormatterSettings = serde_json::from_str(json)?;
        Ok(settings)
    }

    // A missing or unreadable file surfaces as `IoError`; bad contents as an
    // error naming the file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let settings: FormatterSettings = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse formatter settings {}", path.display()))?;
        tracing::debug!(path = %path.display(), locale = %settings.locale, "Loaded formatter settings");
        Ok(settings)
    }

    // Fails on the first key that would otherwise fall back silently.
    pub fn validate(&self) -> Result<(), FormatError> {
        self.locale
            .parse::<Locale>()
            .map_err(|e| FormatError::ConfigError(e.to_string()))?;
        self.currency
            .parse::<Currency>()
            .map_err(|e| FormatError::ConfigError(e.to_string()))?;
        self.date_format
            .parse::<DateFormat>()
            .map_err(|e| FormatError::ConfigError(e.to_string()))?;
        self.value_format
            .parse::<ValueFormatKind>()
            .map_err(|e| FormatError::ConfigError(e.to_string()))?;
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        self.locale.parse().unwrap_or_else(|_| {
            tracing::warn!(locale = %self.locale, "Unsupported locale, falling back to en-US");
            Locale::default()
        })
    }

    pub fn currency(&self) -> Currency {
        self.currency.parse().unwrap_or_else(|_| {
            tracing::warn!(currency = %self.currency, "Unsupported currency, falling back to USD");
            Currency::default()
        })
    }

    pub fn date_format(&self) -> DateFormat {
        self.date_format.parse().unwrap_or_else(|_| {
            tracing::warn!(date_format = %self.date_format, "Unknown date format, using default");
            DateFormat::default()
        })
    }

    pub fn value_kind(&self) -> ValueFormatKind {
        self.value_format.parse().unwrap_or_else(|_| {
            tracing::warn!(value_format = %self.value_format, "Unknown value format, using none");
            ValueFormatKind::default()
        })
    }

    /// Value formatter for the configured kind, locale and currency.
    pub fn value_formatter(&self) -> impl Fn(f64) -> String + Send + Sync + 'static {
        localization::create_value_formatter(self.value_kind(), self.locale(), self.currency())
    }

    pub fn format_date(&self, date: impl Into<DateValue>) -> String {
        Localizer::default().format_date(date, self.date_format(), self.locale())
    }

    pub fn date_range(&self, option: DateRangeOption) -> Result<DateRange, FormatError> {
        localization::get_date_range(option, self.enable_today, self.local_timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn test_default_settings() {
        let settings = FormatterSettings::default();
        assert_eq!(settings.locale, "en-US");
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.date_format, "default");
        assert_eq!(settings.value_format, "none");
        assert!(!settings.enable_today);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_str_partial() {
        let settings = FormatterSettings::from_json_str(
            r#"{"locale": "de-DE", "currency": "EUR", "valueFormat": "currency"}"#,
        )
        .unwrap();
        assert_eq!(settings.locale(), Locale::De);
        assert_eq!(settings.currency(), Currency::Eur);
        assert_eq!(settings.value_kind(), ValueFormatKind::Currency);
        assert_eq!(settings.date_format(), DateFormat::Default);
        assert!(!settings.local_timezone);
    }

    #[test]
    fn test_from_json_str_rejects_malformed_json() {
        let err = FormatterSettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, FormatError::JsonError { .. }));
    }

    #[test]
    fn test_unknown_keys_fall_back() {
        init_tracing();
        let settings = FormatterSettings {
            locale: "tlh".to_string(),
            currency: "DOGE".to_string(),
            date_format: "fancy".to_string(),
            value_format: "weird".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.locale(), Locale::EnUs);
        assert_eq!(settings.currency(), Currency::Usd);
        assert_eq!(settings.date_format(), DateFormat::Default);
        assert_eq!(settings.value_kind(), ValueFormatKind::None);
    }

    #[test]
    fn test_validate_reports_bad_key() {
        let settings = FormatterSettings {
            currency: "DOGE".to_string(),
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, FormatError::ConfigError(ref msg) if msg.contains("DOGE")));
    }

    #[test]
    fn test_load_from_file() {
        init_tracing();
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"locale": "en-GB", "currency": "GBP", "dateFormat": "european", "valueFormat": "currency"}}"#
        )
        .unwrap();

        let settings = FormatterSettings::load_from_file(file.path()).unwrap();
        let format = settings.value_formatter();
        assert_eq!(format(2_500_000.0), "£2.5M");

        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(settings.format_date(day), "05/01/2024");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FormatterSettings::load_from_file(dir.path().join("missing.json")).unwrap_err();
        match err {
            FormatError::IoError { source } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_malformed_file_names_the_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"locale": "#).unwrap();

        let err = FormatterSettings::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, FormatError::AnyhowError(_)));
        let message = err.to_string();
        assert!(message.contains("Failed to parse formatter settings"));
        assert!(message.contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_date_range_respects_ordering() {
        let settings = FormatterSettings {
            enable_today: true,
            ..Default::default()
        };
        for option in DateRangeOption::ALL {
            let range = settings.date_range(option).unwrap();
            assert!(range.from <= range.to, "{} resolved backwards", option);
        }
    }

    #[test]
    fn test_settings_round_trip_through_json() {
        let settings = FormatterSettings {
            locale: "ja".to_string(),
            local_timezone: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"localTimezone\":true"));
        assert_eq!(FormatterSettings::from_json_str(&json).unwrap(), settings);
    }
}
