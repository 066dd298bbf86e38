//! Canonical package price.
//!
//! The API sends prices either as JSON numbers or as pre-formatted strings
//! (`"₹24,999"`, `"Rs. 1,20,000/-"`). Both are normalised here, once, into a
//! whole-rupee amount; the rendering layer only ever sees [`Price`].

use std::fmt;

// ============================================================================
// Price
// ============================================================================

/// A price in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// Create a price from a whole-rupee amount.
    #[must_use]
    pub const fn new(rupees: u64) -> Self {
        Self(rupees)
    }

    /// The amount in whole rupees.
    #[must_use]
    pub const fn rupees(self) -> u64 {
        self.0
    }

    /// Normalise a numeric wire value. Negative or non-finite values are rejected.
    #[must_use]
    pub fn from_number(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(Self(value.round() as u64))
    }

    /// Normalise a pre-formatted wire value.
    ///
    /// The first run of digits (with `,` grouping and an optional decimal
    /// part) is taken as the amount; anything around it is ignored. Returns
    /// `None` when no digits are present or the amount is negative.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        if text[..start].trim_end().ends_with('-') {
            return None;
        }

        let amount: String = text[start..]
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
            .filter(|c| *c != ',')
            .collect();
        // "1,200." or "1.2.3": keep only the first decimal part.
        let mut parts = amount.splitn(3, '.');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();
        let normalized = if fraction.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{fraction}")
        };

        normalized.parse::<f64>().ok().and_then(Self::from_number)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", group_indian(self.0))
    }
}

/// Formats an optional price, falling back to "Price on request".
#[must_use]
pub fn format_price(price: Option<Price>) -> String {
    price.map_or_else(|| "Price on request".to_string(), |p| p.to_string())
}

/// Groups digits the Indian way: the last three, then pairs (`1,24,999`).
#[must_use]
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("24999", Some(24_999))]
    #[case::symbol_and_grouping("₹24,999", Some(24_999))]
    #[case::indian_grouping("Rs. 1,20,000/-", Some(120_000))]
    #[case::decimal_rounds("24999.50", Some(25_000))]
    #[case::prefix_text("Starting from 15000 per person", Some(15_000))]
    #[case::no_digits("On request", None)]
    #[case::empty("", None)]
    #[case::negative("-500", None)]
    #[case::negative_with_symbol("₹ -500", None)]
    fn test_parse_price_text(#[case] text: &str, #[case] expected: Option<u64>) {
        assert_eq!(Price::parse(text).map(Price::rupees), expected);
    }

    #[rstest]
    #[case::whole(45000.0, Some(45_000))]
    #[case::fraction(999.4, Some(999))]
    #[case::zero(0.0, Some(0))]
    #[case::negative(-1.0, None)]
    #[case::nan(f64::NAN, None)]
    #[case::infinite(f64::INFINITY, None)]
    fn test_price_from_number(#[case] value: f64, #[case] expected: Option<u64>) {
        assert_eq!(Price::from_number(value).map(Price::rupees), expected);
    }

    #[test]
    fn test_indian_grouping() {
        let formatted: Vec<String> = [0, 999, 1_000, 24_999, 124_999, 1_000_000, 12_345_678]
            .into_iter()
            .map(group_indian)
            .collect();
        insta::assert_snapshot!(formatted.join("\n"), @r"
        0
        999
        1,000
        24,999
        1,24,999
        10,00,000
        1,23,45,678
        ");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(Price::new(124_999))), "₹1,24,999");
        assert_eq!(format_price(None), "Price on request");
    }
}
