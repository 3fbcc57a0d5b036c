//! Hours, durations and ages

use chrono::{DateTime, Utc};
use lifeweeks_core::Language;
use lifeweeks_time::Birthdate;

use crate::format_number;

const HOURS_PER_DAY: f64 = 24.0;
const HOURS_PER_WEEK: f64 = 168.0;
const HOURS_PER_YEAR: f64 = 8_760.0;

fn one_decimal(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

/// Hours scaled to the largest unit below a year, one decimal
pub fn format_hours(hours: f64, lang: Language) -> String {
    if hours < HOURS_PER_DAY {
        format!("{} hours", format_number(hours, lang))
    } else if hours < HOURS_PER_WEEK {
        format!("{} days", format_number(one_decimal(hours / HOURS_PER_DAY), lang))
    } else if hours < HOURS_PER_YEAR {
        format!("{} weeks", format_number(one_decimal(hours / HOURS_PER_WEEK), lang))
    } else {
        format!("{} years", format_number(one_decimal(hours / HOURS_PER_YEAR), lang))
    }
}

const DURATION_UNITS: [(f64, &str); 7] = [
    (31_536_000.0, "year"),
    (2_592_000.0, "month"),
    (604_800.0, "week"),
    (86_400.0, "day"),
    (3_600.0, "hour"),
    (60.0, "minute"),
    (1.0, "second"),
];

/// Whole count of the largest unit that fits in `seconds`
pub fn format_duration(seconds: f64, lang: Language) -> String {
    for (value, label) in DURATION_UNITS {
        if seconds >= value {
            let count = (seconds / value).floor();
            let plural = if count == 1.0 { "" } else { "s" };
            return format!("{} {label}{plural}", format_number(count, lang));
        }
    }

    "0 seconds".to_string()
}

/// Age as "N years" or "N years, M months"
pub fn format_age(years_decimal: f64, lang: Language) -> String {
    let years = years_decimal.floor();
    let months = ((years_decimal - years) * 12.0).round() as u32;

    match months {
        0 => format!("{} years", format_number(years, lang)),
        12 => format!("{} years", format_number(years + 1.0, lang)),
        _ => format!("{} years, {months} months", format_number(years, lang)),
    }
}

/// Current age of `birth` at `now`
pub fn age_from_birthdate(birth: &Birthdate, now: DateTime<Utc>, lang: Language) -> String {
    format_age(birth.age_at(now), lang)
}
