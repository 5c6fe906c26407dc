//! Stock status classification tests
//!
//! Tests for the read-side threshold report: negative existences are
//! flagged (never prevented at write time), and positive counters are
//! banded against the suggested stock level.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::models::{classify_stock, stock_percentage, StockStatus};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Negative counters classify as negative whatever the thresholds
    #[test]
    fn test_negative_counter() {
        assert_eq!(classify_stock(dec("-1"), 100), StockStatus::Negative);
        assert_eq!(classify_stock(dec("-0.001"), 0), StockStatus::Negative);
    }

    /// With no suggested stock configured, anything non-negative is
    /// critical (the report asks the operator to define one)
    #[test]
    fn test_unconfigured_suggested_stock() {
        assert_eq!(classify_stock(dec("0"), 0), StockStatus::Critical);
        assert_eq!(classify_stock(dec("500"), 0), StockStatus::Critical);
    }

    /// Band boundaries at 24%, 49% and 74% of the suggested level
    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_stock(dec("24"), 100), StockStatus::Critical);
        assert_eq!(classify_stock(dec("24.01"), 100), StockStatus::Low);
        assert_eq!(classify_stock(dec("49"), 100), StockStatus::Low);
        assert_eq!(classify_stock(dec("49.01"), 100), StockStatus::Medium);
        assert_eq!(classify_stock(dec("74"), 100), StockStatus::Medium);
        assert_eq!(classify_stock(dec("74.01"), 100), StockStatus::Good);
        assert_eq!(classify_stock(dec("100"), 100), StockStatus::Good);
    }

    /// Zero stock with a configured suggested level is critical
    #[test]
    fn test_zero_stock_is_critical() {
        assert_eq!(classify_stock(dec("0"), 10), StockStatus::Critical);
    }

    /// Percentage of the suggested level, rounded to two decimals
    #[test]
    fn test_stock_percentage() {
        assert_eq!(stock_percentage(dec("50"), 200), dec("25.00"));
        assert_eq!(stock_percentage(dec("1"), 3), dec("33.33"));
        assert_eq!(stock_percentage(dec("-10"), 100), dec("-10.00"));
    }

    /// No suggested level means no meaningful percentage
    #[test]
    fn test_stock_percentage_unconfigured() {
        assert_eq!(stock_percentage(dec("50"), 0), Decimal::ZERO);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        /// A negative counter always classifies as negative
        #[test]
        fn prop_negative_is_negative(
            level in -1_000_000i64..0,
            suggested in 0i32..10_000,
        ) {
            prop_assert_eq!(
                classify_stock(Decimal::from(level), suggested),
                StockStatus::Negative
            );
        }

        /// Above 74% of the suggested level is always good
        #[test]
        fn prop_above_74_percent_is_good(
            suggested in 1i32..10_000,
            surplus in 1i64..1_000_000,
        ) {
            let level = Decimal::from(suggested) * dec("0.74") + Decimal::from(surplus);
            prop_assert_eq!(classify_stock(level, suggested), StockStatus::Good);
        }

        /// Classification is monotone: more stock never looks worse
        #[test]
        fn prop_classification_is_monotone(
            a in 0i64..1_000_000,
            b in 0i64..1_000_000,
            suggested in 1i32..10_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let rank = |s: StockStatus| match s {
                StockStatus::Negative => 0,
                StockStatus::Critical => 1,
                StockStatus::Low => 2,
                StockStatus::Medium => 3,
                StockStatus::Good => 4,
            };
            prop_assert!(
                rank(classify_stock(Decimal::from(lo), suggested))
                    <= rank(classify_stock(Decimal::from(hi), suggested))
            );
        }
    }
}
