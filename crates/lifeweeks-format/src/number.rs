//! Number, percent and distance formatting

use lifeweeks_core::Language;

/// Separators for one language
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Separators {
    group: char,
    decimal: char,
    /// Integer parts shorter than this are not grouped
    min_grouped_len: usize,
    percent: &'static str,
}

fn separators(lang: Language) -> Separators {
    match lang {
        Language::EnUs | Language::ZhCn => Separators {
            group: ',',
            decimal: '.',
            min_grouped_len: 4,
            percent: "%",
        },
        // Spanish leaves four-digit integers ungrouped: 1234 but 12.345
        Language::EsEs => Separators {
            group: '.',
            decimal: ',',
            min_grouped_len: 5,
            percent: "\u{a0}%",
        },
    }
}

fn group_digits(digits: &str, seps: Separators) -> String {
    if digits.len() < seps.min_grouped_len {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(seps.group);
        }
        out.push(ch);
    }
    out
}

/// Split `|n|` into integer and fractional digit strings with `decimals`
/// fraction digits
fn fixed_parts(n: f64, decimals: usize) -> (String, String) {
    let rendered = format!("{:.*}", decimals, n.abs());
    match rendered.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.to_string()),
        None => (rendered, String::new()),
    }
}

fn assemble(negative: bool, int: &str, frac: &str, seps: Separators) -> String {
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int, seps));
    if !frac.is_empty() {
        out.push(seps.decimal);
        out.push_str(frac);
    }
    out
}

fn non_finite(n: f64) -> Option<String> {
    if n.is_nan() {
        Some("NaN".into())
    } else if n.is_infinite() {
        Some(if n > 0.0 { "∞" } else { "-∞" }.into())
    } else {
        None
    }
}

/// Format with thousands grouping and at most three fraction digits
pub fn format_number(n: f64, lang: Language) -> String {
    if let Some(s) = non_finite(n) {
        return s;
    }

    let seps = separators(lang);
    let (int, frac) = fixed_parts(n, 3);
    let frac = frac.trim_end_matches('0');
    let negative = n < 0.0 && (int != "0" || !frac.is_empty());
    assemble(negative, &int, frac, seps)
}

/// Abbreviate with T, B, M or K and one decimal
pub fn format_large_number(n: f64, lang: Language) -> String {
    const ABBREVIATIONS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    for (value, symbol) in ABBREVIATIONS {
        if n.abs() >= value {
            let formatted = format!("{:.1}", n / value);
            let clean = formatted.strip_suffix(".0").unwrap_or(&formatted);
            return format!("{clean}{symbol}");
        }
    }

    format_number(n, lang)
}

/// Format `n` (already scaled to 0..100) as a percentage
pub fn format_percent(n: f64, decimals: usize, lang: Language) -> String {
    if let Some(s) = non_finite(n) {
        return s;
    }

    let seps = separators(lang);
    let (int, frac) = fixed_parts(n, decimals);
    let is_zero = int.chars().chain(frac.chars()).all(|c| c == '0');
    let mut out = assemble(n < 0.0 && !is_zero, &int, &frac, seps);
    out.push_str(seps.percent);
    out
}

/// Fixed-point percentage for values far below one percent
pub fn format_tiny_percent(n: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, n)
}

/// Kilometres with a magnitude word for large distances
pub fn format_distance(km: f64, lang: Language) -> String {
    if km >= 1e12 {
        format!("{} km", format_large_number(km, lang))
    } else if km >= 1e9 {
        format!("{:.1} billion km", km / 1e9)
    } else if km >= 1e6 {
        format!("{:.1} million km", km / 1e6)
    } else {
        format!("{} km", format_number(km.round(), lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_number_en() {
        assert_eq!(format_number(0.0, Language::EnUs), "0");
        assert_eq!(format_number(999.0, Language::EnUs), "999");
        assert_eq!(format_number(1234.0, Language::EnUs), "1,234");
        assert_eq!(format_number(1234567.891, Language::EnUs), "1,234,567.891");
        assert_eq!(format_number(1.5, Language::EnUs), "1.5");
        assert_eq!(format_number(2.00049, Language::EnUs), "2");
        assert_eq!(format_number(-42000.25, Language::EnUs), "-42,000.25");
    }

    #[test]
    fn test_format_number_es() {
        assert_eq!(format_number(1234.0, Language::EsEs), "1234");
        assert_eq!(format_number(12345.0, Language::EsEs), "12.345");
        assert_eq!(format_number(1234567.5, Language::EsEs), "1.234.567,5");
    }

    #[test]
    fn test_format_number_zh_matches_en() {
        assert_eq!(
            format_number(9876543.21, Language::ZhCn),
            format_number(9876543.21, Language::EnUs)
        );
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN, Language::EnUs), "NaN");
        assert_eq!(format_number(f64::INFINITY, Language::EnUs), "∞");
    }

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(1_500.0, Language::EnUs), "1.5K");
        assert_eq!(format_large_number(2_000_000.0, Language::EnUs), "2M");
        assert_eq!(format_large_number(3_260_000_000.0, Language::EnUs), "3.3B");
        assert_eq!(format_large_number(7.0e12, Language::EnUs), "7T");
        assert_eq!(format_large_number(-4_000.0, Language::EnUs), "-4K");
        assert_eq!(format_large_number(999.0, Language::EnUs), "999");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(42.5, 1, Language::EnUs), "42.5%");
        assert_eq!(format_percent(42.0, 2, Language::EnUs), "42.00%");
        assert_eq!(format_percent(1234.5, 1, Language::EnUs), "1,234.5%");
        assert_eq!(format_percent(42.5, 1, Language::EsEs), "42,5\u{a0}%");
        assert_eq!(format_percent(7.0, 0, Language::ZhCn), "7%");
    }

    #[test]
    fn test_format_tiny_percent() {
        assert_eq!(format_tiny_percent(0.000000579, 10), "0.0000005790%");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(512.4, Language::EnUs), "512 km");
        assert_eq!(format_distance(2_571_000.0, Language::EnUs), "2.6 million km");
        assert_eq!(format_distance(31_926_000_000.0, Language::EnUs), "31.9 billion km");
        assert_eq!(format_distance(5.0e12, Language::EnUs), "5T km");
    }

    proptest! {
        #[test]
        fn prop_en_grouping_roundtrips(n in 0u64..1_000_000_000_000) {
            let s = format_number(n as f64, Language::EnUs);
            prop_assert_eq!(s.replace(',', "").parse::<u64>().unwrap(), n);
        }
    }
}
