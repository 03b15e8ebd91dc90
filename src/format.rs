//! Display formatting for tooltip and legend text.
//!
//! Mirrors the en-US currency presentation of the original chart UI:
//! grouped dollars with two fraction digits for prices, compact
//! K/M/B/T abbreviations for 24h volume and large axis labels.

use crate::core::Sample;

/// `$12,345.67`-style currency text.
#[must_use]
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// `$1.23B`-style abbreviated currency text, at most two fraction digits
/// with trailing zeros trimmed.
#[must_use]
pub fn format_usd_compact(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let abs = value.abs();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let (scaled, suffix) = if abs >= 1e12 {
        (abs / 1e12, "T")
    } else if abs >= 1e9 {
        (abs / 1e9, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else if abs >= 1e3 {
        (abs / 1e3, "K")
    } else {
        (abs, "")
    };

    let mut text = format!("{scaled:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{sign}${text}{suffix}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// The text content of a sample tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleTooltip {
    /// `MM/DD/YYYY`
    pub date: String,
    /// `h:mm:ss AM`
    pub time: String,
    pub price: String,
    pub volume: String,
}

impl SampleTooltip {
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        Self {
            date: sample.timestamp.format("%m/%d/%Y").to_string(),
            time: sample.timestamp.format("%-I:%M:%S %p").to_string(),
            price: format_usd(sample.price),
            volume: format_usd_compact(sample.volume),
        }
    }
}
