// Supported locales and currencies.
// Both enums are closed: anything outside them is either rejected by `FromStr`
// or mapped to the default through the `*_or_default` constructors.
use crate::error::ParseKindError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "it")]
    It,
    #[serde(rename = "nl")]
    Nl,
    #[serde(rename = "ru")]
    Ru,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "ar")]
    Ar,
    #[serde(rename = "hi")]
    Hi,
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "sv")]
    Sv,
}

impl Locale {
    pub const ALL: [Locale; 15] = [
        Locale::EnUs,
        Locale::EnGb,
        Locale::Es,
        Locale::Fr,
        Locale::De,
        Locale::It,
        Locale::Nl,
        Locale::Ru,
        Locale::ZhCn,
        Locale::Ja,
        Locale::Ko,
        Locale::Ar,
        Locale::Hi,
        Locale::Pt,
        Locale::Sv,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::De => "de",
            Locale::It => "it",
            Locale::Nl => "nl",
            Locale::Ru => "ru",
            Locale::ZhCn => "zh-CN",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
            Locale::Ar => "ar",
            Locale::Hi => "hi",
            Locale::Pt => "pt",
            Locale::Sv => "sv",
        }
    }

    /// Lenient lookup used at display boundaries: unknown tags become `en-US`.
    pub fn from_tag_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

// Lowercases, treats `_` like `-`, and drops POSIX encoding/modifier suffixes
// (`en_US.UTF-8`, `de_DE@euro`) and BCP-47 extensions (`-u-...`, `-x-...`).
fn normalize_tag(tag: &str) -> String {
    let mut key: String = tag
        .trim()
        .chars()
        .map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() })
        .collect();
    for marker in [".", "@", "-u-", "-x-"] {
        if let Some(idx) = key.find(marker) {
            key.truncate(idx);
        }
    }
    key
}

impl FromStr for Locale {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_tag(s);
        let locale = match key.as_str() {
            "en-us" | "en" => Locale::EnUs,
            "en-gb" | "en-uk" => Locale::EnGb,
            "zh-cn" | "zh" | "zh-hans" | "zh-hans-cn" => Locale::ZhCn,
            _ => {
                // Region variants we don't list explicitly (de-DE, fr-CA, pt-BR, ...)
                // collapse onto their language entry.
                let lang = key.split('-').next().unwrap_or("");
                match lang {
                    "en" => Locale::EnUs,
                    "es" => Locale::Es,
                    "fr" => Locale::Fr,
                    "de" => Locale::De,
                    "it" => Locale::It,
                    "nl" => Locale::Nl,
                    "ru" => Locale::Ru,
                    "ja" => Locale::Ja,
                    "ko" => Locale::Ko,
                    "ar" => Locale::Ar,
                    "hi" => Locale::Hi,
                    "pt" => Locale::Pt,
                    "sv" => Locale::Sv,
                    _ => return Err(ParseKindError::new("locale", s)),
                }
            }
        };
        Ok(locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Gbp,
    Eur,
    Cny,
    Jpy,
    Krw,
    Inr,
    Sek,
}

impl Currency {
    pub const ALL: [Currency; 8] = [
        Currency::Usd,
        Currency::Gbp,
        Currency::Eur,
        Currency::Cny,
        Currency::Jpy,
        Currency::Krw,
        Currency::Inr,
        Currency::Sek,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Cny => "CNY",
            Currency::Jpy => "JPY",
            Currency::Krw => "KRW",
            Currency::Inr => "INR",
            Currency::Sek => "SEK",
        }
    }

    // ISO 4217 minor units.
    pub fn fraction_digits(self) -> usize {
        match self {
            Currency::Jpy | Currency::Krw => 0,
            _ => 2,
        }
    }

    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl FromStr for Currency {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            // "GPB" shipped in older widget configs as a misspelling of GBP.
            "GBP" | "GPB" => Ok(Currency::Gbp),
            "EUR" => Ok(Currency::Eur),
            "CNY" => Ok(Currency::Cny),
            "JPY" => Ok(Currency::Jpy),
            "KRW" => Ok(Currency::Krw),
            "INR" => Ok(Currency::Inr),
            "SEK" => Ok(Currency::Sek),
            _ => Err(ParseKindError::new("currency", s)),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
