//! Calendar dates and relative time

use chrono::{DateTime, Datelike, Utc};
use lifeweeks_core::{Language, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};
use lifeweeks_time::elapsed_between;

use crate::format_number;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Long-form calendar date in UTC
pub fn format_date(date: DateTime<Utc>, lang: Language) -> String {
    let month = date.month0() as usize;
    match lang {
        Language::EnUs => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
        Language::EsEs => format!("{} de {} de {}", date.day(), MONTHS_ES[month], date.year()),
        Language::ZhCn => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RelativeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl RelativeUnit {
    fn noun(self) -> &'static str {
        match self {
            RelativeUnit::Minute => "minute",
            RelativeUnit::Hour => "hour",
            RelativeUnit::Day => "day",
            RelativeUnit::Week => "week",
            RelativeUnit::Month => "month",
            RelativeUnit::Year => "year",
        }
    }

    /// Named phrase for offsets of -1, 0 and +1 where English has one
    fn named(self, offset: i64) -> Option<&'static str> {
        match (self, offset) {
            (RelativeUnit::Minute, 0) => Some("this minute"),
            (RelativeUnit::Hour, 0) => Some("this hour"),
            (RelativeUnit::Day, -1) => Some("yesterday"),
            (RelativeUnit::Day, 0) => Some("today"),
            (RelativeUnit::Day, 1) => Some("tomorrow"),
            (RelativeUnit::Week, -1) => Some("last week"),
            (RelativeUnit::Week, 0) => Some("this week"),
            (RelativeUnit::Week, 1) => Some("next week"),
            (RelativeUnit::Month, -1) => Some("last month"),
            (RelativeUnit::Month, 0) => Some("this month"),
            (RelativeUnit::Month, 1) => Some("next month"),
            (RelativeUnit::Year, -1) => Some("last year"),
            (RelativeUnit::Year, 0) => Some("this year"),
            (RelativeUnit::Year, 1) => Some("next year"),
            _ => None,
        }
    }
}

fn relative_phrase(offset: i64, unit: RelativeUnit) -> String {
    if let Some(named) = unit.named(offset) {
        return named.to_string();
    }

    let count = offset.unsigned_abs();
    let plural = if count == 1 { "" } else { "s" };
    let amount = format_number(count as f64, Language::EnUs);
    if offset < 0 {
        format!("{amount} {}{plural} ago", unit.noun())
    } else {
        format!("in {amount} {}{plural}", unit.noun())
    }
}

/// English relative time from `now` back to `date`.
///
/// Picks minutes or hours within the first day, then days, weeks (under
/// 30 days), months of 30 days (under a year) and years of 365 days.
pub fn format_relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = elapsed_between(date, now).as_millis();
    let diff_days = diff_ms.div_euclid(MS_PER_DAY);

    if diff_days == 0 {
        let diff_hours = diff_ms.div_euclid(MS_PER_HOUR);
        if diff_hours == 0 {
            let diff_minutes = diff_ms.div_euclid(MS_PER_MINUTE);
            return relative_phrase(-diff_minutes, RelativeUnit::Minute);
        }
        return relative_phrase(-diff_hours, RelativeUnit::Hour);
    }

    if diff_days < 7 {
        return relative_phrase(-diff_days, RelativeUnit::Day);
    }
    if diff_days < 30 {
        return relative_phrase(-(diff_days / 7), RelativeUnit::Week);
    }
    if diff_days < 365 {
        return relative_phrase(-(diff_days / 30), RelativeUnit::Month);
    }
    relative_phrase(-(diff_days / 365), RelativeUnit::Year)
}
