//! Display Formatting
//!
//! Currency, compact-count and trend formatting for stat tiles and overview
//! cards. Output matches en-US number formatting.

use serde::Serialize;

/// Naira sign
pub const NAIRA: char = '\u{20A6}';

const GROWTH_COLOR: &str = "#12B76A";
const DECLINE_COLOR: &str = "#F04438";

/// Format an amount as naira with thousands separators and two decimals.
///
/// `120_000_000.0` -> `₦120,000,000.00`
pub fn format_naira(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u128;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}{NAIRA}{}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const COMPACT_UNITS: [(f64, &str); 4] = [
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "B"),
    (1e12, "T"),
];

/// Short compact notation: `1800` -> `1.8K`, `20700` -> `21K`.
///
/// Values under ten units keep one fractional digit, larger ones round to an
/// integer. A value that rounds up to 1000 moves to the next unit.
pub fn format_compact(count: u64) -> String {
    if count < 1000 {
        return count.to_string();
    }

    let value = count as f64;
    let mut unit_idx = COMPACT_UNITS
        .iter()
        .rposition(|(scale, _)| value >= *scale)
        .unwrap_or(0);

    loop {
        let (scale, suffix) = COMPACT_UNITS[unit_idx];
        let scaled = round_compact(value / scale);

        if scaled >= 1000.0 && unit_idx + 1 < COMPACT_UNITS.len() {
            unit_idx += 1;
            continue;
        }

        return if scaled.fract() == 0.0 {
            format!("{}{}", scaled as u64, suffix)
        } else {
            format!("{:.1}{}", scaled, suffix)
        };
    }
}

fn round_compact(scaled: f64) -> f64 {
    if scaled < 10.0 {
        let tenths = (scaled * 10.0).round() / 10.0;
        // 9.96 rounds to 10.0, which is an integer-digit value
        if tenths >= 10.0 {
            tenths.round()
        } else {
            tenths
        }
    } else {
        scaled.round()
    }
}

/// Direction of a rate indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Rates of one percent or more count as growth
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 1.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Trend::Up => GROWTH_COLOR,
            Trend::Down => DECLINE_COLOR,
        }
    }

    /// Class applied to the up-arrow icon
    pub fn arrow_class(&self) -> &'static str {
        match self {
            Trend::Up => "",
            Trend::Down => "rotate-180",
        }
    }
}

/// `2.5` -> `2.5%`, `2.0` -> `2%`
pub fn format_rate(rate: f64) -> String {
    format!("{rate}%")
}

/// `most-clicked` -> `most clicked`
pub fn humanize_slug(slug: &str) -> String {
    slug.split('-').collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_naira() {
        assert_eq!(format_naira(120_000_000.0), "₦120,000,000.00");
        assert_eq!(format_naira(50_000_000.0), "₦50,000,000.00");
        assert_eq!(format_naira(999.999), "₦1,000.00");
        assert_eq!(format_naira(0.5), "₦0.50");
        assert_eq!(format_naira(0.0), "₦0.00");
        assert_eq!(format_naira(-1234.5), "-₦1,234.50");
    }

    #[test]
    fn test_format_compact_fixture_counts() {
        assert_eq!(format_compact(1800), "1.8K");
        assert_eq!(format_compact(80), "80");
        assert_eq!(format_compact(1000), "1K");
        assert_eq!(format_compact(20_700), "21K");
        assert_eq!(format_compact(8500), "8.5K");
        assert_eq!(format_compact(7500), "7.5K");
    }

    #[test]
    fn test_format_compact_boundaries() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(9_960), "10K");
        assert_eq!(format_compact(999_950), "1M");
        assert_eq!(format_compact(1_250_000), "1.3M");
        assert_eq!(format_compact(3_000_000_000), "3B");
    }

    #[test]
    fn test_trend_from_rate() {
        assert_eq!(Trend::from_rate(2.5), Trend::Up);
        assert_eq!(Trend::from_rate(1.0), Trend::Up);
        assert_eq!(Trend::from_rate(0.5), Trend::Down);
        assert_eq!(Trend::Down.color(), "#F04438");
        assert_eq!(Trend::Down.arrow_class(), "rotate-180");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(2.5), "2.5%");
        assert_eq!(format_rate(0.5), "0.5%");
        assert_eq!(format_rate(2.0), "2%");
    }

    #[test]
    fn test_humanize_slug() {
        assert_eq!(humanize_slug("most-clicked"), "most clicked");
        assert_eq!(humanize_slug("hottest-listing"), "hottest listing");
        assert_eq!(humanize_slug("plain"), "plain");
    }
}
