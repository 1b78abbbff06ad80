// Static per-locale conventions backing `BuiltinIntl`.
//
// Numbers: decimal/group separators, grouping style, minimum grouping digits
// (Spanish leaves four-digit numbers ungrouped), currency symbol placement.
// Dates: month names, rendering patterns and the first day of the week.
//
// Patterns use `{d}`, `{dd}`, `{M}`, `{MM}`, `{month}` and `{y}` placeholders;
// `{month}` is filled with the short or long month name.
use chrono::Weekday;
use shared::{Currency, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    // 1,234,567
    Standard,
    // 12,34,567
    Indian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberConventions {
    pub decimal: char,
    pub group: char,
    pub grouping: Grouping,
    pub min_grouping_digits: usize,
    pub currency_position: SymbolPosition,
    // Literal between the currency symbol and the digits.
    pub currency_spacing: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateConventions {
    pub short_months: [&'static str; 12],
    pub long_months: [&'static str; 12],
    pub medium: &'static str,
    pub month_day: &'static str,
    pub month_day_year: &'static str,
    pub month_year: &'static str,
    pub week_start: Weekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleData {
    pub number: NumberConventions,
    pub date: DateConventions,
}

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: char = '\u{202f}';

const COMMA_DOT_PREFIX: NumberConventions = NumberConventions {
    decimal: '.',
    group: ',',
    grouping: Grouping::Standard,
    min_grouping_digits: 1,
    currency_position: SymbolPosition::Prefix,
    currency_spacing: "",
};

const DOT_COMMA_SUFFIX: NumberConventions = NumberConventions {
    decimal: ',',
    group: '.',
    grouping: Grouping::Standard,
    min_grouping_digits: 1,
    currency_position: SymbolPosition::Suffix,
    currency_spacing: NBSP,
};

const SPACE_COMMA_SUFFIX: NumberConventions = NumberConventions {
    decimal: ',',
    group: '\u{a0}',
    grouping: Grouping::Standard,
    min_grouping_digits: 1,
    currency_position: SymbolPosition::Suffix,
    currency_spacing: NBSP,
};

const EN_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_LONG: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const CJK_MONTHS: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];
const KO_MONTHS: [&str; 12] = [
    "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
];
const AR_MONTHS: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر",
    "نوفمبر", "ديسمبر",
];

static EN_US: LocaleData = LocaleData {
    number: COMMA_DOT_PREFIX,
    date: DateConventions {
        short_months: EN_SHORT,
        long_months: EN_LONG,
        medium: "{month} {d}, {y}",
        month_day: "{month} {d}",
        month_day_year: "{month} {d}, {y}",
        month_year: "{month} {y}",
        week_start: Weekday::Sun,
    },
};

static EN_GB: LocaleData = LocaleData {
    number: COMMA_DOT_PREFIX,
    date: DateConventions {
        short_months: EN_SHORT,
        long_months: EN_LONG,
        medium: "{d} {month} {y}",
        month_day: "{d} {month}",
        month_day_year: "{d} {month} {y}",
        month_year: "{month} {y}",
        week_start: Weekday::Mon,
    },
};

static ES: LocaleData = LocaleData {
    number: NumberConventions {
        min_grouping_digits: 2,
        ..DOT_COMMA_SUFFIX
    },
    date: DateConventions {
        short_months: [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
        ],
        long_months: [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
        medium: "{d} {month} {y}",
        month_day: "{d} {month}",
        month_day_year: "{d} {month} {y}",
        month_year: "{month} {y}",
        week_start: Weekday::Mon,
    },
};

static FR: LocaleData = LocaleData {
    number: NumberConventions {
        group: NARROW_NBSP,
        ..SPACE_COMMA_SUFFIX
    },
    date: DateConventions {
        short_months: [
            "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
            "nov.", "déc.",
        ],
        long_months: [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
            "octobre", "novembre", "décembre",
        ],
        medium: "{d} {month} {y}",
        month_day: "{d} {month}",
        month_day_year: "{d} {month} {y}",
        month_year: "{month} {y}",
        week_start: Weekday::Mon,
    },
};

static DE: LocaleData = LocaleData {
    number: DOT_COMMA_SUFFIX,
    date: DateConventions {
        short_months: [
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
            "Dez.",
        ],
        long_months: [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ],
        medium: "{d}. {month} {y}",
        month_day: "{d}. {month}",
        month_day_year: "{d}. {month} {y}",
        month_year: "{month} {y}",
        week_start: Weekday::Mon,
    },
};

static IT: LocaleData = LocaleData {
    number: DOT_COMMA_SUFFIX,
    date: DateConventions {
        short_months: [
            "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
        ],
        long_months: [
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
            "settembre", "ottobre", "novembre", "dicembre",
        ],
        medium: "{d} {month} {y}",
        month_day: "{d} {month}",
        month_day_year: "{d} {month} {y}",
        month_year: "{month} {y}",
        week_start: Weekday::Mon,
    },
};

static NL: LocaleData = LocaleData {
    number: NumberConventions {
        currency_position: SymbolPosition::Prefix,
        ..DOT_COMMA_SUFFIX
    },
    date: DateConventions {
        short_months: [
            "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
        ],
        long_months: [
            "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus",
            "september", "oktober", "november", "december",
        ],
        medium: "{d} {month} {y}",
        month_day: "{d} {month}",
        month_day_year: "{d} {month} {y}",
        month_year: "{month} {y}",
        week_start: Weekday::Mon,
    },
};

static RU: LocaleData = LocaleData {
    number: SPACE_COMMA_SUFFIX,
    date: DateConventions {
        short_months: [
            "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ],
        long_months: [
            "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
            "октября", "ноября", "декабря",
        ],
        medium: "{d} {month} {y} г.",
        month_day: "{d} {month}",
        month_day_year: "{d} {month} {y} г.",
        month_year: "{month} {y} г.",
        week_start: Weekday::Mon,
    },
};

static ZH_CN: LocaleData = LocaleData {
    number: COMMA_DOT_PREFIX,
    date: DateConventions {
        short_months: CJK_MONTHS,
        long_months: CJK_MONTHS,
        medium: "{y}年{M}月{d}日",
        month_day: "{month}{d}日",
        month_day_year: "{y}年{month}{d}日",
        month_year: "{y}年{month}",
        week_start: Weekday::Mon,
    },
};

static JA: LocaleData = LocaleData {
    number: COMMA_DOT_PREFIX,
    date: DateConventions {
        short_months: CJK_MONTHS,
        long_months: CJK_MONTHS,
        medium: "{y}/{MM}/{dd}",
        month_day: "{month}{d}日",
        month_day_year: "{y}年{month}{d}日",
        month_year: "{y}年{month}",
        week_start: Weekday::Sun,
    },
};

static KO: LocaleData = LocaleData {
    number: COMMA_DOT_PREFIX,
    date: DateConventions {
        short_months: KO_MONTHS,
        long_months: KO_MONTHS,
        medium: "{y}.{MM}.{dd}",
        month_day: "{month} {d}일",
        month_day_year: "{y}년 {month} {d}일",
        month_year: "{y}년 {month}",
        week_start: Weekday::Sun,
    },
};

// Latin digits throughout; no Arabic-Indic digit shaping.
static AR: LocaleData = LocaleData {
    number: NumberConventions {
        decimal: '.',
        group: ',',
        ..SPACE_COMMA_SUFFIX
    },
    date: DateConventions {
        short_months: AR_MONTHS,
        long_months: AR_MONTHS,
        medium: "{d} {month} {y}",
        month_day: "{d} {month}",
        month_day_year: "{d} {month} {y}",
        month_year: "{month} {y}",
        week_start: Weekday::Sat,
    },
};

static HI: LocaleData = LocaleData {
    number: NumberConventions {
        grouping: Grouping::Indian,
        ..COMMA_DOT_PREFIX
    },
    date: DateConventions {
        short_months: [
            "जन॰", "फ़र॰", "मार्च", "अप्रैल", "मई", "जून", "जुल॰", "अग॰", "सित॰", "अक्तू॰", "नव॰",
            "दिस॰",
        ],
        long_months: [
            "जनवरी", "फ़रवरी", "मार्च", "अप्रैल", "मई", "जून", "जुलाई", "अगस्त", "सितंबर",
            "अक्तूबर", "नवंबर", "दिसंबर",
        ],
        medium: "{d} {month} {y}",
        month_day: "{d} {month}",
        month_day_year: "{d} {month} {y}",
        month_year: "{month} {y}",
        week_start: Weekday::Sun,
    },
};

static PT: LocaleData = LocaleData {
    number: NumberConventions {
        currency_position: SymbolPosition::Prefix,
        ..DOT_COMMA_SUFFIX
    },
    date: DateConventions {
        short_months: [
            "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.",
            "nov.", "dez.",
        ],
        long_months: [
            "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto",
            "setembro", "outubro", "novembro", "dezembro",
        ],
        medium: "{d} de {month} de {y}",
        month_day: "{d} de {month}",
        month_day_year: "{d} de {month} de {y}",
        month_year: "{month} de {y}",
        week_start: Weekday::Sun,
    },
};

static SV: LocaleData = LocaleData {
    number: SPACE_COMMA_SUFFIX,
    date: DateConventions {
        short_months: [
            "jan.", "feb.", "mars", "apr.", "maj", "juni", "juli", "aug.", "sep.", "okt.", "nov.",
            "dec.",
        ],
        long_months: [
            "januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti", "september",
            "oktober", "november", "december",
        ],
        medium: "{d} {month} {y}",
        month_day: "{d} {month}",
        month_day_year: "{d} {month} {y}",
        month_year: "{month} {y}",
        week_start: Weekday::Mon,
    },
};

pub fn locale_data(locale: Locale) -> &'static LocaleData {
    match locale {
        Locale::EnUs => &EN_US,
        Locale::EnGb => &EN_GB,
        Locale::Es => &ES,
        Locale::Fr => &FR,
        Locale::De => &DE,
        Locale::It => &IT,
        Locale::Nl => &NL,
        Locale::Ru => &RU,
        Locale::ZhCn => &ZH_CN,
        Locale::Ja => &JA,
        Locale::Ko => &KO,
        Locale::Ar => &AR,
        Locale::Hi => &HI,
        Locale::Pt => &PT,
        Locale::Sv => &SV,
    }
}

pub fn week_start(locale: Locale) -> Weekday {
    locale_data(locale).date.week_start
}

pub fn currency_symbol(currency: Currency, locale: Locale) -> &'static str {
    match (currency, locale) {
        (Currency::Jpy, Locale::Ja) => "￥",
        (Currency::Cny, Locale::ZhCn) => "¥",
        (Currency::Jpy, Locale::ZhCn) => "JP¥",
        (Currency::Usd, _) => "$",
        (Currency::Gbp, _) => "£",
        (Currency::Eur, _) => "€",
        (Currency::Cny, _) => "CN¥",
        (Currency::Jpy, _) => "¥",
        (Currency::Krw, _) => "₩",
        (Currency::Inr, _) => "₹",
        (Currency::Sek, _) => "kr",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_twelve_distinct_long_months() {
        for locale in Locale::ALL {
            let data = locale_data(locale);
            for (i, name) in data.date.long_months.iter().enumerate() {
                assert!(!name.is_empty(), "{} month {} is empty", locale, i + 1);
                assert!(
                    !data.date.long_months[..i].contains(name),
                    "{} repeats month name {}",
                    locale,
                    name
                );
            }
        }
    }

    #[test]
    fn test_separators_differ_within_a_locale() {
        for locale in Locale::ALL {
            let number = locale_data(locale).number;
            assert_ne!(number.decimal, number.group, "{}", locale);
        }
    }

    #[test]
    fn test_week_start() {
        assert_eq!(week_start(Locale::EnUs), Weekday::Sun);
        assert_eq!(week_start(Locale::De), Weekday::Mon);
        assert_eq!(week_start(Locale::Ar), Weekday::Sat);
    }

    #[test]
    fn test_currency_symbol_overrides() {
        assert_eq!(currency_symbol(Currency::Jpy, Locale::Ja), "￥");
        assert_eq!(currency_symbol(Currency::Jpy, Locale::EnUs), "¥");
        assert_eq!(currency_symbol(Currency::Cny, Locale::ZhCn), "¥");
        assert_eq!(currency_symbol(Currency::Cny, Locale::De), "CN¥");
    }
}
