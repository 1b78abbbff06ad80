// Translated display labels for the named date ranges.
// Each row follows the order of `DateRangeOption::ALL`.
use shared::{DateRangeOption, Locale};

type LabelRow = [&'static str; 8];

const EN: LabelRow = [
    "Last 7 days",
    "Last 30 days",
    "Last week",
    "Last month",
    "Last quarter",
    "Last year",
    "Month to date",
    "Year to date",
];

static DATE_RANGE_LABELS: [(Locale, LabelRow); 15] = [
    (Locale::EnUs, EN),
    (Locale::EnGb, EN),
    (
        Locale::Es,
        [
            "Últimos 7 días",
            "Últimos 30 días",
            "Semana pasada",
            "Mes pasado",
            "Trimestre pasado",
            "Año pasado",
            "Mes hasta la fecha",
            "Año hasta la fecha",
        ],
    ),
    (
        Locale::Fr,
        [
            "7 derniers jours",
            "30 derniers jours",
            "Semaine dernière",
            "Mois dernier",
            "Trimestre dernier",
            "Année dernière",
            "Mois en cours",
            "Année en cours",
        ],
    ),
    (
        Locale::De,
        [
            "Letzte 7 Tage",
            "Letzte 30 Tage",
            "Letzte Woche",
            "Letzter Monat",
            "Letztes Quartal",
            "Letztes Jahr",
            "Monat bis heute",
            "Jahr bis heute",
        ],
    ),
    (
        Locale::It,
        [
            "Ultimi 7 giorni",
            "Ultimi 30 giorni",
            "Settimana scorsa",
            "Mese scorso",
            "Trimestre scorso",
            "Anno scorso",
            "Mese corrente",
            "Anno corrente",
        ],
    ),
    (
        Locale::Nl,
        [
            "Afgelopen 7 dagen",
            "Afgelopen 30 dagen",
            "Vorige week",
            "Vorige maand",
            "Vorig kwartaal",
            "Vorig jaar",
            "Maand tot nu toe",
            "Jaar tot nu toe",
        ],
    ),
    (
        Locale::Ru,
        [
            "Последние 7 дней",
            "Последние 30 дней",
            "Прошлая неделя",
            "Прошлый месяц",
            "Прошлый квартал",
            "Прошлый год",
            "С начала месяца",
            "С начала года",
        ],
    ),
    (
        Locale::ZhCn,
        ["过去7天", "过去30天", "上周", "上个月", "上季度", "去年", "本月至今", "本年至今"],
    ),
    (
        Locale::Ja,
        ["過去7日間", "過去30日間", "先週", "先月", "前四半期", "昨年", "今月", "今年"],
    ),
    (
        Locale::Ko,
        ["지난 7일", "지난 30일", "지난주", "지난달", "지난 분기", "작년", "이번 달", "올해"],
    ),
    (
        Locale::Ar,
        [
            "آخر 7 أيام",
            "آخر 30 يومًا",
            "الأسبوع الماضي",
            "الشهر الماضي",
            "الربع الماضي",
            "العام الماضي",
            "الشهر حتى تاريخه",
            "السنة حتى تاريخه",
        ],
    ),
    (
        Locale::Hi,
        [
            "पिछले 7 दिन",
            "पिछले 30 दिन",
            "पिछला सप्ताह",
            "पिछला महीना",
            "पिछली तिमाही",
            "पिछला वर्ष",
            "महीने की शुरुआत से",
            "वर्ष की शुरुआत से",
        ],
    ),
    (
        Locale::Pt,
        [
            "Últimos 7 dias",
            "Últimos 30 dias",
            "Semana passada",
            "Mês passado",
            "Trimestre passado",
            "Ano passado",
            "Mês até a data",
            "Ano até a data",
        ],
    ),
    (
        Locale::Sv,
        [
            "Senaste 7 dagarna",
            "Senaste 30 dagarna",
            "Förra veckan",
            "Förra månaden",
            "Förra kvartalet",
            "Förra året",
            "Månad hittills",
            "År hittills",
        ],
    ),
];

pub fn date_range_label(option: DateRangeOption, locale: Locale) -> &'static str {
    let row = DATE_RANGE_LABELS
        .iter()
        .find(|(l, _)| *l == locale)
        .map(|(_, row)| row)
        .unwrap_or(&EN);
    row[option.index()]
}
