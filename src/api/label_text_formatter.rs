use std::fmt::Write as _;

use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::types::parse_calendar_date;

/// Formatting collaborator for axis and tooltip text.
///
/// The engine only positions labels; what they say is decided here.
pub trait LabelFormatter: Send + Sync {
    fn format_value(&self, value: f64) -> String;
    fn format_date(&self, date: &str) -> String;
}

/// Currency-style values (`$12,500`, `$1,234.50`) and short month/day dates.
///
/// Fractional digits are printed only when the value is not whole. Dates that
/// cannot be parsed are passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyLabelFormatter {
    symbol: String,
    date_pattern: String,
}

impl CurrencyLabelFormatter {
    pub const DEFAULT_DATE_PATTERN: &'static str = "%b %d";

    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            date_pattern: Self::DEFAULT_DATE_PATTERN.to_owned(),
        }
    }

    /// Same grouping rules without a currency symbol, for counts.
    #[must_use]
    pub fn plain() -> Self {
        Self::new("")
    }

    /// `chrono` strftime pattern used for dates.
    #[must_use]
    pub fn with_date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.date_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for CurrencyLabelFormatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl LabelFormatter for CurrencyLabelFormatter {
    fn format_value(&self, value: f64) -> String {
        let Some(amount) = Decimal::from_f64(value) else {
            return value.to_string();
        };
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let abs = rounded.abs();
        let whole = abs.trunc();
        let Some(whole_units) = whole.to_u128() else {
            return value.to_string();
        };
        let cents = ((abs - whole) * Decimal::ONE_HUNDRED)
            .round()
            .to_u8()
            .unwrap_or(0);

        let grouped = whole_units.to_formatted_string(&Locale::en);
        if cents == 0 {
            format!("{sign}{}{grouped}", self.symbol)
        } else {
            format!("{sign}{}{grouped}.{cents:02}", self.symbol)
        }
    }

    fn format_date(&self, date: &str) -> String {
        let Ok(parsed) = parse_calendar_date(date) else {
            return date.to_owned();
        };
        // chrono reports invalid strftime patterns as a fmt error.
        let mut text = String::new();
        match write!(text, "{}", parsed.format(&self.date_pattern)) {
            Ok(()) => text,
            Err(_) => date.to_owned(),
        }
    }
}
