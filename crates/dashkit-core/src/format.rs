//! Currency and date display formatting

use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use dashkit_utils::group_digits;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==================== Currency ====================

/// Format an amount given in cents as US dollars, e.g. `123456` -> `"$1,234.56"`.
///
/// Negative amounts get a leading minus sign: `-12345` -> `"-$123.45"`.
pub fn format_currency(minor_units: i64) -> String {
    format_usd(Decimal::from_i128_with_scale(minor_units as i128, 2))
}

/// Format a decimal dollar amount, rounded half-up to whole cents.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    format!("{}${}.{}", sign, group_digits(whole, ','), cents)
}

// ==================== Dates ====================

/// Locales the date formatter knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateLocale {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_GB_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];
const DE_MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];
const FR_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc.",
];

impl DateLocale {
    pub const ALL: [DateLocale; 5] = [
        DateLocale::EnUs,
        DateLocale::EnGb,
        DateLocale::DeDe,
        DateLocale::FrFr,
        DateLocale::ZhCn,
    ];

    /// Canonical tag, e.g. `"de-DE"`
    pub fn tag(&self) -> &'static str {
        match self {
            DateLocale::EnUs => "en-US",
            DateLocale::EnGb => "en-GB",
            DateLocale::DeDe => "de-DE",
            DateLocale::FrFr => "fr-FR",
            DateLocale::ZhCn => "zh-CN",
        }
    }

    /// Render a date with numeric day, short month and numeric year
    pub fn format(&self, date: NaiveDate) -> String {
        let day = date.day();
        let year = date.year();
        let month = date.month0() as usize;
        match self {
            DateLocale::EnUs => format!("{} {}, {}", EN_MONTHS[month], day, year),
            DateLocale::EnGb => format!("{} {} {}", day, EN_GB_MONTHS[month], year),
            DateLocale::DeDe => format!("{}. {} {}", day, DE_MONTHS[month], year),
            DateLocale::FrFr => format!("{} {} {}", day, FR_MONTHS[month], year),
            DateLocale::ZhCn => format!("{}年{}月{}日", year, date.month(), day),
        }
    }
}

impl Default for DateLocale {
    fn default() -> Self {
        DateLocale::EnUs
    }
}

impl std::str::FromStr for DateLocale {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_lowercase().as_str() {
            "en-us" | "en" => Ok(DateLocale::EnUs),
            "en-gb" => Ok(DateLocale::EnGb),
            "de-de" | "de" => Ok(DateLocale::DeDe),
            "fr-fr" | "fr" => Ok(DateLocale::FrFr),
            "zh-cn" | "zh" => Ok(DateLocale::ZhCn),
            _ => Err(CoreError::UnsupportedLocale { locale: s.to_string() }),
        }
    }
}

impl std::fmt::Display for DateLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Parse an ISO-8601 date or date-time into its calendar date.
///
/// Date-times with an offset keep the date as written in that offset.
pub fn parse_iso_date(input: &str) -> CoreResult<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(dt.date());
    }

    log::debug!(target: "dashkit::format", "Rejected date input '{}'", input);
    Err(CoreError::InvalidDateFormat { input: input.to_string() })
}

/// Format an ISO date string for display, e.g. `"2023-10-05"` -> `"Oct 5, 2023"`.
///
/// `locale` defaults to en-US.
pub fn format_date_to_local(iso_date: &str, locale: Option<&str>) -> CoreResult<String> {
    let locale = match locale {
        Some(tag) => tag.parse::<DateLocale>()?,
        None => DateLocale::default(),
    };
    let date = parse_iso_date(iso_date)?;
    Ok(locale.format(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(123456), "$1,234.56");
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(5), "$0.05");
        assert_eq!(format_currency(100), "$1.00");
        assert_eq!(format_currency(100000000), "$1,000,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-12345), "-$123.45");
        assert_eq!(format_currency(-1), "-$0.01");
    }

    #[test]
    fn test_format_currency_extremes() {
        assert_eq!(format_currency(i64::MAX), "$92,233,720,368,547,758.07");
        assert_eq!(format_currency(i64::MIN), "-$92,233,720,368,547,758.08");
    }

    #[test]
    fn test_format_usd_rounds_to_cents() {
        assert_eq!(format_usd(Decimal::new(12345, 3)), "$12.35");
        assert_eq!(format_usd(Decimal::new(-4, 3)), "$0.00");
    }

    #[test]
    fn test_format_date_default_locale() {
        assert_eq!(format_date_to_local("2023-10-05", None).unwrap(), "Oct 5, 2023");
    }

    #[test]
    fn test_format_date_de() {
        assert_eq!(format_date_to_local("2023-10-05", Some("de-DE")).unwrap(), "5. Okt. 2023");
        assert_eq!(format_date_to_local("2023-05-01", Some("de-DE")).unwrap(), "1. Mai 2023");
    }

    #[test]
    fn test_format_date_other_locales() {
        assert_eq!(format_date_to_local("2023-10-05", Some("en-GB")).unwrap(), "5 Oct 2023");
        assert_eq!(format_date_to_local("2023-02-14", Some("fr-FR")).unwrap(), "14 févr. 2023");
        assert_eq!(format_date_to_local("2023-10-05", Some("zh-CN")).unwrap(), "2023年10月5日");
        assert_eq!(format_date_to_local("2023-10-05", Some("de_de")).unwrap(), "5. Okt. 2023");
    }

    #[test]
    fn test_format_date_with_time() {
        assert_eq!(format_date_to_local("2023-10-05T23:30:00Z", None).unwrap(), "Oct 5, 2023");
        assert_eq!(format_date_to_local("2023-10-05T01:00:00+09:00", None).unwrap(), "Oct 5, 2023");
        assert_eq!(format_date_to_local("2023-10-05T08:15:00.250", None).unwrap(), "Oct 5, 2023");
    }

    #[test]
    fn test_format_date_invalid() {
        let err = format_date_to_local("not a date", None).unwrap_err();
        assert_eq!(err, CoreError::InvalidDateFormat { input: "not a date".to_string() });
        assert!(format_date_to_local("2023-02-30", None).is_err());
        assert!(format_date_to_local("", None).is_err());
    }

    #[test]
    fn test_format_date_unsupported_locale() {
        let err = format_date_to_local("2023-10-05", Some("tlh-QO")).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedLocale { .. }));
    }

    #[test]
    fn test_formatting_is_repeatable() {
        assert_eq!(format_currency(98765), format_currency(98765));
        assert_eq!(
            format_date_to_local("2024-01-31", Some("fr-FR")),
            format_date_to_local("2024-01-31", Some("fr-FR"))
        );
    }
}
