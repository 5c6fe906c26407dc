//! Validation utilities for the Warehouse Inventory Management Platform
//!
//! Includes Mexico-specific validations for supplier records kept by
//! public-sector warehouses.

use rust_decimal::Decimal;

use crate::models::EXIT_LABEL_PREFIX;

// ============================================================================
// Stock Movement Validations
// ============================================================================

/// Validate that a reported line-item quantity is positive
pub fn validate_movement_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate stock thresholds for a generic product.
///
/// The minimum may only exceed the suggested level while the suggested
/// level is still unset (zero).
pub fn validate_stock_thresholds(stock_min: i32, stock_suggested: i32) -> Result<(), &'static str> {
    if stock_min < 0 || stock_suggested < 0 {
        return Err("Stock thresholds cannot be negative");
    }
    if stock_min > stock_suggested && stock_suggested > 0 {
        return Err("Minimum stock cannot exceed suggested stock");
    }
    Ok(())
}

// ============================================================================
// Requisition Validations
// ============================================================================

/// Trim a requisition label, treating blank input as absent
pub fn normalize_requisition_label(label: Option<&str>) -> Option<&str> {
    label.map(str::trim).filter(|l| !l.is_empty())
}

/// Check whether a label has the shape of an auto-generated exit
/// requisition (`SIN-REQ-SAL/YYYYMMDD/<epoch millis>`)
pub fn is_synthesized_exit_label(label: &str) -> bool {
    let mut parts = label.splitn(3, '/');
    let (prefix, date, millis) = match (parts.next(), parts.next(), parts.next()) {
        (Some(p), Some(d), Some(m)) => (p, d, m),
        _ => return false,
    };
    prefix == EXIT_LABEL_PREFIX
        && date.len() == 8
        && date.chars().all(|c| c.is_ascii_digit())
        && !millis.is_empty()
        && millis.chars().all(|c| c.is_ascii_digit())
}

// ============================================================================
// Mexico-Specific Validations
// ============================================================================

/// Validate an RFC (Registro Federal de Contribuyentes) for a supplier
/// Accepts: 12 characters for companies (AAA######XXX),
/// 13 for individuals (AAAA######XXX)
pub fn validate_rfc(rfc: &str) -> Result<(), &'static str> {
    let chars: Vec<char> = rfc.trim().chars().map(|c| c.to_ascii_uppercase()).collect();

    if chars.len() != 12 && chars.len() != 13 {
        return Err("RFC must be 12 or 13 characters");
    }

    let letters = chars.len() - 9;
    if !chars[..letters]
        .iter()
        .all(|&c| c.is_ascii_uppercase() || c == '&' || c == 'Ñ' || c == 'ñ')
    {
        return Err("RFC must start with the holder's initials");
    }

    // Six-digit date block (YYMMDD)
    let date = &chars[letters..letters + 6];
    if !date.iter().all(|c| c.is_ascii_digit()) {
        return Err("RFC date block must be numeric");
    }
    let digit = |c: char| c.to_digit(10).unwrap_or(0);
    let month = digit(date[2]) * 10 + digit(date[3]);
    let day = digit(date[4]) * 10 + digit(date[5]);
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err("Invalid RFC date block");
    }

    // Three-character homoclave
    if !chars[letters + 6..]
        .iter()
        .all(|&c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err("Invalid RFC homoclave");
    }

    Ok(())
}

/// Validate a Mexican phone number
/// Accepts: 5512345678, 55-1234-5678, +525512345678
pub fn validate_mexican_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    // National format: 10 digits
    if digits.len() == 10 {
        return Ok(());
    }
    // International format with country code: 12 digits starting with 52
    if digits.len() == 12 && digits.starts_with("52") {
        return Ok(());
    }

    Err("Invalid Mexican phone number format")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    use crate::models::synthesize_exit_label;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    // ========================================================================
    // Stock Movement Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_movement_quantity_positive() {
        assert!(validate_movement_quantity(dec("0.001")).is_ok());
        assert!(validate_movement_quantity(dec("12")).is_ok());
    }

    #[test]
    fn test_validate_movement_quantity_rejects_zero_and_negative() {
        assert!(validate_movement_quantity(Decimal::ZERO).is_err());
        assert!(validate_movement_quantity(dec("-3")).is_err());
    }

    #[test]
    fn test_validate_stock_thresholds_valid() {
        assert!(validate_stock_thresholds(0, 0).is_ok());
        assert!(validate_stock_thresholds(5, 20).is_ok());
        assert!(validate_stock_thresholds(20, 20).is_ok());
        // Minimum set before a suggested level is configured
        assert!(validate_stock_thresholds(10, 0).is_ok());
    }

    #[test]
    fn test_validate_stock_thresholds_invalid() {
        assert!(validate_stock_thresholds(-1, 10).is_err());
        assert!(validate_stock_thresholds(1, -10).is_err());
        assert!(validate_stock_thresholds(30, 20).is_err());
    }

    // ========================================================================
    // Requisition Validation Tests
    // ========================================================================

    #[test]
    fn test_normalize_requisition_label() {
        assert_eq!(normalize_requisition_label(Some("  REQ-001 ")), Some("REQ-001"));
        assert_eq!(normalize_requisition_label(Some("   ")), None);
        assert_eq!(normalize_requisition_label(Some("")), None);
        assert_eq!(normalize_requisition_label(None), None);
    }

    #[test]
    fn test_is_synthesized_exit_label() {
        assert!(is_synthesized_exit_label("SIN-REQ-SAL/20250817/1755412800123"));
        assert!(!is_synthesized_exit_label("REQ-2025-001"));
        assert!(!is_synthesized_exit_label("SIN-REQ-SAL/2025/1755412800123"));
        assert!(!is_synthesized_exit_label("SIN-REQ-SAL/20250817/"));
        assert!(!is_synthesized_exit_label("SIN-REQ-SAL/20250817"));
    }

    #[test]
    fn test_synthesized_labels_validate() {
        let now = Utc.with_ymd_and_hms(2025, 8, 17, 12, 0, 0).unwrap();
        assert!(is_synthesized_exit_label(&synthesize_exit_label(now)));
    }

    // ========================================================================
    // Mexico-Specific Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_rfc_company() {
        assert!(validate_rfc("ABC010203XY9").is_ok());
        assert!(validate_rfc("A&C010203XY9").is_ok());
        assert!(validate_rfc("AÑC010203XY9").is_ok());
    }

    #[test]
    fn test_validate_rfc_individual() {
        assert!(validate_rfc("ABCD010203XY9").is_ok());
        assert!(validate_rfc("abcd010203xy9").is_ok());
    }

    #[test]
    fn test_validate_rfc_invalid() {
        assert!(validate_rfc("ABC").is_err());
        assert!(validate_rfc("ABCD010203XY99").is_err());
        assert!(validate_rfc("1BCD010203XY9").is_err());
        assert!(validate_rfc("ABCD011303XY9").is_err());
        assert!(validate_rfc("ABCD010232XY9").is_err());
        assert!(validate_rfc("ABCD010203X-9").is_err());
    }

    #[test]
    fn test_validate_mexican_phone() {
        assert!(validate_mexican_phone("5512345678").is_ok());
        assert!(validate_mexican_phone("55-1234-5678").is_ok());
        assert!(validate_mexican_phone("+525512345678").is_ok());
        assert!(validate_mexican_phone("123456").is_err());
        assert!(validate_mexican_phone("+15512345678").is_err());
    }

    proptest! {
        #[test]
        fn prop_positive_quantities_always_pass(q in 1i64..1_000_000) {
            prop_assert!(validate_movement_quantity(Decimal::from(q)).is_ok());
        }

        #[test]
        fn prop_synthesized_labels_always_validate(secs in 0i64..4_102_444_800) {
            let now = Utc.timestamp_opt(secs, 0).unwrap();
            prop_assert!(is_synthesized_exit_label(&synthesize_exit_label(now)));
        }
    }
}
