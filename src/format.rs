//! Display formatting shared by every panel.
//!
//! Every formatter is total: values that cannot be shown fall back to a
//! placeholder instead of failing the render.

use crate::consts::dashboard_consts::{CURRENCY_SYMBOL, MISSING_VALUE};
use chrono::{DateTime, NaiveDate};
use log::debug;
use ratatui::prelude::Color;

/// Format an amount as US currency with thousands separators.
///
/// At most two fraction digits are kept and trailing zeros are dropped, so
/// `16800.0` renders as `$16,800` and `595.5` as `$595.5`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return MISSING_VALUE.to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u128;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = group_thousands(cents / 100);
    let fraction = match cents % 100 {
        0 => String::new(),
        f if f % 10 == 0 => format!(".{}", f / 10),
        f => format!(".{:02}", f),
    };
    format!("{}{}{}{}", sign, CURRENCY_SYMBOL, whole, fraction)
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a period-over-period change as a signed percentage.
///
/// Only positive changes get a `+`; zero renders as `0%`.
pub fn format_change(change: f64) -> String {
    if !change.is_finite() {
        return MISSING_VALUE.to_string();
    }
    if change > 0.0 {
        format!("+{}%", change)
    } else if change == 0.0 {
        "0%".to_string()
    } else {
        format!("{}%", change)
    }
}

/// Format a ratio in [0, 1] as a rounded whole-number percentage.
pub fn format_ratio_percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return MISSING_VALUE.to_string();
    }
    format!("{}%", (ratio * 100.0).round() as i64)
}

/// Format an ISO date (`2023-06-01`, or a full RFC 3339 timestamp) as a short
/// month/day label such as `Jun 1`. Unparsable input is returned unchanged.
pub fn format_due_date(iso: &str) -> String {
    match parse_due_date(iso) {
        Some(date) => date.format("%b %-d").to_string(),
        None => {
            debug!("Unparsable due date {:?}, showing it as-is", iso);
            iso.to_string()
        }
    }
}

pub fn parse_due_date(iso: &str) -> Option<NaiveDate> {
    let trimmed = iso.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Direction of an asset's change, picked by sign.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Trend {
    Up,
    Down,
    /// Exactly zero, or not a number.
    Flat,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    /// Indicator glyph; flat changes have none.
    pub fn indicator(&self) -> Option<&'static str> {
        match self {
            Trend::Up => Some("▲"),
            Trend::Down => Some("▼"),
            Trend::Flat => None,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Trend::Up => Color::Green,
            Trend::Down => Color::Red,
            Trend::Flat => Color::Gray,
        }
    }
}

/// Parse a `#RRGGBB` or `#RGB` colour. Anything else falls back to gray.
pub fn parse_hex_color(hex: &str) -> Color {
    let digits = hex.trim().trim_start_matches('#');
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let rgb = match digits.len() {
        6 if digits.is_ascii() => (
            channel(&digits[0..2]),
            channel(&digits[2..4]),
            channel(&digits[4..6]),
        ),
        3 if digits.is_ascii() => (
            channel(&digits[0..1].repeat(2)),
            channel(&digits[1..2].repeat(2)),
            channel(&digits[2..3].repeat(2)),
        ),
        _ => (None, None, None),
    };
    match rgb {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(46481.96), "$46,481.96");
        assert_eq!(format_currency(16800.0), "$16,800");
        assert_eq!(format_currency(595.5), "$595.5");
        assert_eq!(format_currency(24.99), "$24.99");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-1200.0), "-$1,200");
        assert_eq!(format_currency(-0.001), "$0");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), MISSING_VALUE);
        assert_eq!(format_currency(f64::INFINITY), MISSING_VALUE);
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(1.25), "+1.25%");
        assert_eq!(format_change(0.02), "+0.02%");
        assert_eq!(format_change(-1.2), "-1.2%");
        assert_eq!(format_change(0.0), "0%");
        assert_eq!(format_change(-0.0), "0%");
        assert_eq!(format_change(f64::NAN), MISSING_VALUE);
    }

    #[test]
    fn test_format_ratio_percent() {
        assert_eq!(format_ratio_percent(0.8), "80%");
        assert_eq!(format_ratio_percent(0.3), "30%");
        assert_eq!(format_ratio_percent(0.125), "13%");
        assert_eq!(format_ratio_percent(1.0), "100%");
    }

    #[test]
    fn test_format_due_date() {
        assert_eq!(format_due_date("2023-06-01"), "Jun 1");
        assert_eq!(format_due_date("2023-05-28"), "May 28");
        assert_eq!(format_due_date("2023-12-24T10:00:00Z"), "Dec 24");
    }

    #[test]
    // Unparsable dates are displayed verbatim rather than failing.
    fn test_format_due_date_falls_back_to_raw() {
        assert_eq!(format_due_date("next tuesday"), "next tuesday");
        assert_eq!(format_due_date("2023-02-30"), "2023-02-30");
    }

    #[test]
    fn test_trend_from_change() {
        assert_eq!(Trend::from_change(2.3), Trend::Up);
        assert_eq!(Trend::from_change(-1.2), Trend::Down);
        assert_eq!(Trend::from_change(0.0), Trend::Flat);
        assert_eq!(Trend::from_change(f64::NAN), Trend::Flat);
        assert_eq!(Trend::Flat.indicator(), None);
        assert_eq!(Trend::Up.indicator(), Some("▲"));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#4C51BF"), Color::Rgb(0x4C, 0x51, 0xBF));
        assert_eq!(parse_hex_color("#fff"), Color::Rgb(255, 255, 255));
        assert_eq!(parse_hex_color("teal"), Color::Gray);
        assert_eq!(parse_hex_color("#12345G"), Color::Gray);
    }
}
