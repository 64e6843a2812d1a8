//! Response DTOs for the pricing API.
//!
//! Totals travel both as exact decimal strings and pre-formatted for the
//! display node. Money formatting lives here, not in the client.

use rust_decimal::Decimal;
use serde::Serialize;

/// Shown instead of a price while the selection is incomplete
pub const PRICE_PLACEHOLDER: &str = "—";

const NBSP: char = '\u{a0}';

/// Response for the markup-chain calculator
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub available: bool,
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<Decimal>,
    pub formatted: String,
    /// Work items covered by the quoted job type
    pub included_work: &'static [&'static str],
}

impl QuoteResponse {
    pub fn new(total: Option<Decimal>, included_work: &'static [&'static str]) -> Self {
        Self {
            available: total.is_some(),
            formatted: format_rub(total),
            total,
            included_work,
        }
    }
}

/// Response for the additive service calculator
#[derive(Debug, Clone, Serialize)]
pub struct ServiceQuoteResponse {
    pub available: bool,
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<Decimal>,
    pub formatted: String,
}

impl ServiceQuoteResponse {
    pub fn new(total: Option<Decimal>) -> Self {
        Self {
            available: total.is_some(),
            formatted: format_rub(total),
            total,
        }
    }
}

/// Format a total as ruble text: thousands grouped with non-breaking
/// spaces and a trailing currency sign, or the placeholder glyph when the
/// total is unavailable.
pub fn format_rub(total: Option<Decimal>) -> String {
    match total {
        None => PRICE_PLACEHOLDER.to_string(),
        Some(amount) => {
            let digits = amount.normalize().to_string();
            match digits.split_once('.') {
                Some((whole, frac)) => format!("{},{} ₽", group_thousands(whole), frac),
                None => format!("{} ₽", group_thousands(&digits)),
            }
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(NBSP);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn format_rub_groups_thousands() {
        assert_eq!(format_rub(Some(dec!(500))), "500 ₽");
        assert_eq!(format_rub(Some(dec!(4830))), "4\u{a0}830 ₽");
        assert_eq!(format_rub(Some(dec!(123456))), "123\u{a0}456 ₽");
        assert_eq!(format_rub(Some(dec!(1500000))), "1\u{a0}500\u{a0}000 ₽");
    }

    #[test]
    fn format_rub_placeholder_when_unavailable() {
        assert_eq!(format_rub(None), PRICE_PLACEHOLDER);
    }

    #[test]
    fn format_rub_normalizes_trailing_zeros() {
        assert_eq!(format_rub(Some(dec!(2000.00))), "2\u{a0}000 ₽");
    }

    #[test]
    fn unavailable_quote_serializes_without_total() {
        let value =
            serde_json::to_value(QuoteResponse::new(None, &["Балансировка"])).unwrap();
        assert_eq!(value["available"], false);
        assert_eq!(value["formatted"], PRICE_PLACEHOLDER);
        assert!(value.get("total").is_none());
    }

    #[test]
    fn available_quote_serializes_total_as_string() {
        let value = serde_json::to_value(ServiceQuoteResponse::new(Some(dec!(6000)))).unwrap();
        assert_eq!(value["available"], true);
        assert_eq!(value["total"], "6000");
        assert_eq!(value["formatted"], "6\u{a0}000 ₽");
    }
}
