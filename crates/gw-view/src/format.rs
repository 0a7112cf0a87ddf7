//! Display formatting for amounts, percentages, and dates.
//!
//! Two currency policies exist and each call site picks one:
//! - [`CurrencyStyle::Compact`] (`$1.2M`, `$78K`, `$500`) for chart axes,
//!   summary chips, the analytics table, and archived records.
//! - [`CurrencyStyle::Full`] (`$1,200,000`) for project cards, the project
//!   detail screen, and budget breakdown totals.
//!
//! Neither policy special-cases negative amounts; signed variance strings are
//! built by [`format_signed_currency`].

use chrono::{DateTime, NaiveDate};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::FormatError;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Shown in place of a stored date that does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyStyle {
    #[default]
    Compact,
    Full,
}

/// Format an amount with the compact policy.
#[must_use]
pub fn format_currency(amount: i64) -> String {
    if amount >= 1_000_000 {
        let hundredths = div_round(amount, 10_000);
        let whole = hundredths / 100;
        let frac = hundredths % 100;
        if frac % 10 == 0 {
            format!("${whole}.{}M", frac / 10)
        } else {
            format!("${whole}.{frac:02}M")
        }
    } else if amount >= 1_000 {
        format!("${}K", div_round(amount, 1_000))
    } else {
        format!("${amount}")
    }
}

/// Format an amount with the full policy: thousands separators, no decimals.
#[must_use]
pub fn format_currency_full(amount: i64) -> String {
    let grouped = group_thousands(amount.unsigned_abs());
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[must_use]
pub fn format_currency_with(amount: i64, style: CurrencyStyle) -> String {
    match style {
        CurrencyStyle::Compact => format_currency(amount),
        CurrencyStyle::Full => format_currency_full(amount),
    }
}

/// Compact amount with an explicit sign: `+$63K`, `-$500`.
#[must_use]
pub fn format_signed_currency(amount: i64) -> String {
    if amount < 0 {
        format!("-{}", format_currency(amount.saturating_abs()))
    } else {
        format!("+{}", format_currency(amount))
    }
}

/// One-decimal percentage with a leading `+` when non-negative.
#[must_use]
pub fn format_signed_percent(pct: f64) -> String {
    if pct < 0.0 {
        format!("{pct:.1}%")
    } else {
        format!("+{pct:.1}%")
    }
}

/// `Jun 15, 2025`.
pub fn format_date(iso: &str) -> Result<String, FormatError> {
    parse_calendar_date(iso).map(|date| date.format("%b %-d, %Y").to_string())
}

/// `November 2024`.
pub fn format_month_year(iso: &str) -> Result<String, FormatError> {
    parse_calendar_date(iso).map(|date| date.format("%B %Y").to_string())
}

// ---------------------------------------------------------------------------
// Date cells
// ---------------------------------------------------------------------------

/// A date as one screen cell shows it.
///
/// A stored date that does not parse renders as [`INVALID_DATE`] in its own
/// cell; the rest of the screen is unaffected. Serializes as the display
/// string when valid, and as `{"text": "Invalid Date", "raw": "<stored>"}`
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateDisplay {
    Formatted(String),
    /// Holds the stored text.
    Invalid(String),
}

impl DateDisplay {
    /// `Jun 15, 2025`.
    #[must_use]
    pub fn date(iso: &str) -> Self {
        Self::from_result(iso, format_date(iso))
    }

    /// `November 2024`.
    #[must_use]
    pub fn month_year(iso: &str) -> Self {
        Self::from_result(iso, format_month_year(iso))
    }

    fn from_result(iso: &str, formatted: Result<String, FormatError>) -> Self {
        match formatted {
            Ok(text) => Self::Formatted(text),
            Err(err) => {
                tracing::warn!(%err, "rendering date cell as invalid");
                Self::Invalid(iso.to_string())
            }
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Formatted(text) => text,
            Self::Invalid(_) => INVALID_DATE,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Formatted(_))
    }
}

impl Serialize for DateDisplay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Formatted(text) => serializer.serialize_str(text),
            Self::Invalid(raw) => {
                let mut cell = serializer.serialize_struct("InvalidDate", 2)?;
                cell.serialize_field("text", INVALID_DATE)?;
                cell.serialize_field("raw", raw)?;
                cell.end()
            }
        }
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (its calendar date is used).
pub fn parse_calendar_date(iso: &str) -> Result<NaiveDate, FormatError> {
    let trimmed = iso.trim();
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| FormatError::InvalidDate(iso.to_string()))
}

/// Clamp a percentage into `[0, 100]` for bar widths. NaN maps to 0.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// `1 photo`, `4 photos`.
#[must_use]
pub fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Integer division rounding half away from zero, for non-negative input.
const fn div_round(amount: i64, divisor: i64) -> i64 {
    (amount + divisor / 2) / divisor
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
