//! Parsing and rendering of the numbers typed into the form

use super::currency::Currency;
use serde::{Deserialize, Serialize};

/// Shown wherever an amount is missing or could not be computed.
pub const PLACEHOLDER: &str = "—";

/// A field value. `NotANumber` covers both empty and unparseable input and is
/// never treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Amount {
    Value(f64),
    NotANumber,
}

impl Amount {
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Value(v) => Some(*v),
            Amount::NotANumber => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Amount::Value(_))
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Amount {
        match self {
            Amount::Value(v) => Amount::from(f(v)),
            Amount::NotANumber => Amount::NotANumber,
        }
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        if v.is_finite() {
            Amount::Value(v)
        } else {
            Amount::NotANumber
        }
    }
}

/// Accepts either `.` or `,` as the decimal separator.
pub fn parse_amount(text: &str) -> Amount {
    let normalized = text.trim().replacen(',', ".", 1);
    if normalized.is_empty() {
        return Amount::NotANumber;
    }
    normalized
        .parse::<f64>()
        .map_or(Amount::NotANumber, Amount::from)
}

/// Two fractional digits, or the placeholder.
pub fn format_amount(amount: Amount) -> String {
    match amount {
        Amount::Value(v) => {
            let text = format!("{v:.2}");
            // A tiny negative difference must not show up as "-0.00"
            if text == "-0.00" {
                "0.00".to_string()
            } else {
                text
            }
        }
        Amount::NotANumber => PLACEHOLDER.to_string(),
    }
}

/// Text written into a companion input field: empty when there is nothing to show.
pub fn format_field(amount: Amount) -> String {
    if amount.is_valid() {
        format_amount(amount)
    } else {
        String::new()
    }
}

pub fn format_with_label(amount: Amount, currency: Currency) -> String {
    if amount.is_valid() {
        format!("{} {}", format_amount(amount), currency.label())
    } else {
        PLACEHOLDER.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10"), Amount::Value(10.0));
        assert_eq!(parse_amount("  12.5 "), Amount::Value(12.5));
        assert_eq!(parse_amount("12,5"), Amount::Value(12.5));
        assert_eq!(parse_amount("0"), Amount::Value(0.0));
        assert_eq!(parse_amount("-3"), Amount::Value(-3.0));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), Amount::NotANumber);
        assert_eq!(parse_amount("   "), Amount::NotANumber);
        assert_eq!(parse_amount("abc"), Amount::NotANumber);
        assert_eq!(parse_amount("1,2,3"), Amount::NotANumber);
        assert_eq!(parse_amount("inf"), Amount::NotANumber);
        assert_eq!(parse_amount("NaN"), Amount::NotANumber);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Amount::Value(19.5583)), "19.56");
        assert_eq!(format_amount(Amount::Value(5.0)), "5.00");
        assert_eq!(format_amount(Amount::Value(-1.234)), "-1.23");
        assert_eq!(format_amount(Amount::NotANumber), "—");
    }

    #[test]
    fn test_format_amount_never_shows_negative_zero() {
        assert_eq!(format_amount(Amount::Value(-0.0)), "0.00");
        assert_eq!(format_amount(Amount::Value(-0.0025)), "0.00");
        assert_eq!(format_amount(Amount::Value(-0.006)), "-0.01");
    }

    #[test]
    fn test_format_field_and_label() {
        assert_eq!(format_field(Amount::NotANumber), "");
        assert_eq!(format_field(Amount::Value(1.0)), "1.00");
        assert_eq!(format_with_label(Amount::Value(5.0), Currency::Eur), "5.00 €");
        assert_eq!(format_with_label(Amount::Value(9.77915), Currency::Bgn), "9.78 лв.");
        assert_eq!(format_with_label(Amount::NotANumber, Currency::Bgn), "—");
    }

    #[test]
    fn test_amount_from_non_finite() {
        assert_eq!(Amount::from(f64::INFINITY), Amount::NotANumber);
        assert_eq!(Amount::from(f64::NAN), Amount::NotANumber);
        assert_eq!(Amount::Value(2.0).map(|v| v * 2.0), Amount::Value(4.0));
    }
}
