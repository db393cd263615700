//! Submission gate for new deals.
//!
//! The calculator accepts anything; this module decides whether a draft is
//! complete enough to become a record. A rejected submission reports every
//! failing field at once instead of being silently dropped.

use chrono::{Local, NaiveDate};

use crate::calculator::parse_amount;
use crate::deal::DealInput;
use crate::error::CommissionError;

pub const MAX_CLIENT_NAME_LENGTH: usize = 100;
pub const MAX_ADDRESS_LENGTH: usize = 200;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Replace ASCII control characters with spaces, trim whitespace, and enforce
/// a byte-length limit on what remains.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, String> {
    let sanitized: String = input
        .chars()
        .map(|c| if c.is_ascii_control() { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err("is required".to_string());
    }
    if sanitized.len() > max_len {
        return Err(format!("exceeds maximum length of {} bytes", max_len));
    }
    Ok(sanitized)
}

/// Validate a closing date. An empty value falls back to today's local date.
pub fn validate_date(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(today());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| format!("'{}' is not a YYYY-MM-DD date", trimmed))
}

/// Validate a sale price: must coerce to a value strictly greater than zero.
pub fn validate_sale_price(input: &str) -> Result<String, String> {
    if parse_amount(input) > 0.0 {
        Ok(input.trim().to_string())
    } else {
        Err("must be greater than zero".to_string())
    }
}

/// Today's local date in ISO form, the default closing date for a new draft.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Check the required fields of a submission and return a cleaned copy.
///
/// Client name and address must be non-empty after sanitization, the sale
/// price must be positive, and the date must be ISO formatted (or empty, in
/// which case today is used). Rate, split, and fees are passed through for
/// the calculator to coerce.
pub fn validate_submission(input: &DealInput) -> Result<DealInput, CommissionError> {
    let mut problems = Vec::new();

    let client_name = sanitize_text(&input.client_name, MAX_CLIENT_NAME_LENGTH)
        .map_err(|e| problems.push(format!("client name {}", e)))
        .ok();
    let address = sanitize_text(&input.address, MAX_ADDRESS_LENGTH)
        .map_err(|e| problems.push(format!("address {}", e)))
        .ok();
    let sale_price = validate_sale_price(&input.sale_price)
        .map_err(|e| problems.push(format!("sale price {}", e)))
        .ok();
    let date = validate_date(&input.date)
        .map_err(|e| problems.push(format!("date {}", e)))
        .ok();

    match (client_name, address, sale_price, date) {
        (Some(client_name), Some(address), Some(sale_price), Some(date)) => Ok(DealInput {
            date,
            client_name,
            address,
            sale_price,
            commission_rate: input.commission_rate.clone(),
            broker_split: input.broker_split.clone(),
            fees: input.fees.clone(),
        }),
        _ => Err(CommissionError::InvalidInput(problems.join("; "))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> DealInput {
        DealInput {
            date: "2024-05-01".to_string(),
            client_name: "Jane Smith".to_string(),
            address: "123 Main St, Springfield".to_string(),
            sale_price: "450000".to_string(),
            commission_rate: "3".to_string(),
            broker_split: "20".to_string(),
            fees: "250".to_string(),
        }
    }

    fn rejection(input: &DealInput) -> String {
        match validate_submission(input) {
            Err(CommissionError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    // -- Text sanitization --

    #[test]
    fn sanitize_trims_and_replaces_controls() {
        assert_eq!(sanitize_text("  Jane\tSmith\n ", 100).unwrap(), "Jane Smith");
        assert_eq!(
            sanitize_text("123 Main St\nApt 4", 200).unwrap(),
            "123 Main St Apt 4"
        );
    }

    #[test]
    fn sanitize_rejects_blank() {
        assert!(sanitize_text("   ", 100).is_err());
        assert!(sanitize_text("", 100).is_err());
    }

    #[test]
    fn sanitize_enforces_length() {
        let long = "a".repeat(101);
        assert!(sanitize_text(&long, 100).is_err());
        assert!(sanitize_text(&long[..100], 100).is_ok());
    }

    #[test]
    fn sanitize_measures_length_after_trim() {
        let padded = format!("{}Jane{}", " ".repeat(50), " ".repeat(100));
        assert_eq!(sanitize_text(&padded, 100).unwrap(), "Jane");
    }

    // -- Dates --

    #[test]
    fn date_valid_iso() {
        assert_eq!(validate_date("2024-02-29").unwrap(), "2024-02-29");
    }

    #[test]
    fn date_empty_defaults_to_today() {
        assert_eq!(validate_date("").unwrap(), today());
    }

    #[test]
    fn date_invalid() {
        assert!(validate_date("2023-02-29").is_err());
        assert!(validate_date("05/01/2024").is_err());
        assert!(validate_date("yesterday").is_err());
    }

    // -- Sale price --

    #[test]
    fn sale_price_positive() {
        assert_eq!(validate_sale_price(" 450000 ").unwrap(), "450000");
    }

    #[test]
    fn sale_price_zero_or_garbage_rejected() {
        assert!(validate_sale_price("0").is_err());
        assert!(validate_sale_price("").is_err());
        assert!(validate_sale_price("abc").is_err());
        assert!(validate_sale_price("-5").is_err());
    }

    // -- Full submission --

    #[test]
    fn submission_complete_passes() {
        let cleaned = validate_submission(&complete()).unwrap();
        assert_eq!(cleaned, complete());
    }

    #[test]
    fn submission_trims_text_fields() {
        let mut input = complete();
        input.client_name = "  Jane Smith ".to_string();
        input.address = "\t123 Main St, Springfield\n".to_string();
        let cleaned = validate_submission(&input).unwrap();
        assert_eq!(cleaned.client_name, "Jane Smith");
        assert_eq!(cleaned.address, "123 Main St, Springfield");
    }

    #[test]
    fn submission_missing_client() {
        let mut input = complete();
        input.client_name = String::new();
        let msg = rejection(&input);
        assert!(msg.contains("client name is required"));
    }

    #[test]
    fn submission_reports_every_problem() {
        let input = DealInput {
            date: "not-a-date".to_string(),
            ..DealInput::default()
        };
        let msg = rejection(&input);
        assert!(msg.contains("client name"));
        assert!(msg.contains("address"));
        assert!(msg.contains("sale price must be greater than zero"));
        assert!(msg.contains("date 'not-a-date'"));
    }

    #[test]
    fn submission_does_not_gate_rate_split_or_fees() {
        let mut input = complete();
        input.commission_rate = "abc".to_string();
        input.broker_split = String::new();
        input.fees = "-10".to_string();
        let cleaned = validate_submission(&input).unwrap();
        assert_eq!(cleaned.commission_rate, "abc");
        assert_eq!(cleaned.broker_split, "");
        assert_eq!(cleaned.fees, "-10");
    }
}
