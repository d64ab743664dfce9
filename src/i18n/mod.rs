//! i18n - Internationalization Module
//!
//! Weekday, month and control labels for the widgets. Strings live in the
//! bundled `locales/*.yml` files loaded by `rust_i18n::i18n!` in `lib.rs`.

use chrono::Weekday;
use rust_i18n::t;
use serde::{Deserialize, Serialize};

use crate::domain::YearMonth;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh")]
    ZhCN,
}

impl Locale {
    /// Translation file code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh",
        }
    }

    /// Resolve a locale tag such as `zh-CN`, `zh_Hans` or `en`.
    ///
    /// Unknown languages fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "zh" => Locale::ZhCN,
            _ => Locale::EnUS,
        }
    }
}

const WEEKDAY_KEYS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];
const MONTH_KEYS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Translate a key
pub fn tr(locale: Locale, key: &str) -> String {
    t!(key, locale = locale.code()).into_owned()
}

/// Translate a key and substitute `{name}` placeholders
pub fn tr_format(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = tr(locale, key);

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result
}

/// Short weekday label for calendar headers
pub fn weekday_short(locale: Locale, weekday: Weekday) -> String {
    let key = WEEKDAY_KEYS[weekday.num_days_from_sunday() as usize];
    tr(locale, &format!("calendar.weekday.{key}"))
}

/// Full month name, `month` in 1..=12
pub fn month_name(locale: Locale, month: u32) -> String {
    match month.checked_sub(1).and_then(|i| MONTH_KEYS.get(i as usize)) {
        Some(key) => tr(locale, &format!("calendar.month.{key}")),
        None => month.to_string(),
    }
}

/// Calendar header title, e.g. "May 2024"
pub fn month_title(locale: Locale, month: YearMonth) -> String {
    tr_format(
        locale,
        "calendar.title",
        &[
            ("month", &month_name(locale, month.month())),
            ("year", &month.year().to_string()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_from_tag() {
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("zh_Hans"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("en-US"), Locale::EnUS);
        assert_eq!(Locale::from_tag("fr"), Locale::EnUS);
        assert_eq!(Locale::from_tag(""), Locale::EnUS);
    }

    #[test]
    fn weekday_and_month_labels() {
        assert_eq!(weekday_short(Locale::EnUS, Weekday::Sun), "Su");
        assert_eq!(weekday_short(Locale::ZhCN, Weekday::Mon), "一");
        assert_eq!(month_name(Locale::EnUS, 5), "May");
        assert_eq!(month_name(Locale::EnUS, 13), "13");
    }

    #[test]
    fn month_title_per_locale() {
        let may = YearMonth::new(2024, 5).expect("valid month");
        assert_eq!(month_title(Locale::EnUS, may), "May 2024");
        assert_eq!(month_title(Locale::ZhCN, may), "2024年5月");
    }

    #[test]
    fn format_substitutes_placeholders() {
        let text = tr_format(
            Locale::EnUS,
            "pagination.summary",
            &[("first", "11"), ("last", "20"), ("total", "95")],
        );
        assert_eq!(text, "11-20 of 95 items");
    }
}
