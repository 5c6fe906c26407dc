//! Stock pool models and counter arithmetic

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two parallel stock pools tracked for every generic product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockSystem {
    /// Main warehouse pool (`existencia`)
    General,
    /// Executive-office pool (`existencia_oficialia`)
    Oficialia,
}

impl StockSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockSystem::General => "GENERAL",
            StockSystem::Oficialia => "OFICIALIA",
        }
    }

    /// Pool name used in operator-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            StockSystem::General => "ALMACÉN GENERAL",
            StockSystem::Oficialia => "OFICIALÍA",
        }
    }

    /// Map the `es_oficialia` column value back to a system
    pub fn from_oficialia_flag(is_oficialia: bool) -> Self {
        if is_oficialia {
            StockSystem::Oficialia
        } else {
            StockSystem::General
        }
    }

    /// Value stored in the `es_oficialia` column of ticket headers
    pub fn is_oficialia(&self) -> bool {
        matches!(self, StockSystem::Oficialia)
    }
}

impl std::fmt::Display for StockSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MovementDirection {
    /// Goods received; increments the target counter
    Entry,
    /// Goods dispatched; decrements the target counter
    Exit,
}

impl MovementDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementDirection::Entry => "entry",
            MovementDirection::Exit => "exit",
        }
    }

    /// Signed counter delta for a base-unit quantity
    pub fn signed_delta(&self, base_quantity: Decimal) -> Decimal {
        match self {
            MovementDirection::Entry => base_quantity,
            MovementDirection::Exit => -base_quantity,
        }
    }
}

/// Snapshot of both stock counters for a generic product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockLevels {
    pub general: Decimal,
    pub oficialia: Decimal,
}

impl StockLevels {
    pub fn new(general: Decimal, oficialia: Decimal) -> Self {
        Self { general, oficialia }
    }

    /// Counter value for the given system
    pub fn level_for(&self, system: StockSystem) -> Decimal {
        match system {
            StockSystem::General => self.general,
            StockSystem::Oficialia => self.oficialia,
        }
    }

    /// Apply a signed delta to one counter, leaving the other untouched
    pub fn apply(&mut self, system: StockSystem, delta: Decimal) {
        match system {
            StockSystem::General => self.general += delta,
            StockSystem::Oficialia => self.oficialia += delta,
        }
    }
}

/// Convert a reported quantity to base units via the variant multiplier.
///
/// A missing or zero multiplier means the variant is sold in base units
/// already, so the reported quantity passes through unchanged.
pub fn base_quantity(reported: Decimal, multiplier: Option<Decimal>) -> Decimal {
    let factor = match multiplier {
        Some(m) if !m.is_zero() => m,
        _ => Decimal::ONE,
    };
    reported * factor
}

/// Stock health relative to the suggested stock level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Counter has been driven below zero
    Negative,
    /// At or below 24% of suggested stock, or no suggested stock defined
    Critical,
    /// At or below 49% of suggested stock
    Low,
    /// At or below 74% of suggested stock
    Medium,
    Good,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Negative => "negative",
            StockStatus::Critical => "critical",
            StockStatus::Low => "low",
            StockStatus::Medium => "medium",
            StockStatus::Good => "good",
        }
    }
}

/// Classify a counter value against the suggested stock level
pub fn classify_stock(level: Decimal, stock_suggested: i32) -> StockStatus {
    if level < Decimal::ZERO {
        return StockStatus::Negative;
    }
    if stock_suggested == 0 {
        return StockStatus::Critical;
    }
    if stock_suggested > 0 {
        let suggested = Decimal::from(stock_suggested);
        if level <= suggested * Decimal::new(24, 2) {
            return StockStatus::Critical;
        }
        if level <= suggested * Decimal::new(49, 2) {
            return StockStatus::Low;
        }
        if level <= suggested * Decimal::new(74, 2) {
            return StockStatus::Medium;
        }
    }
    StockStatus::Good
}

/// Counter value as a percentage of the suggested stock level, rounded
/// to two decimal places. Zero when no suggested stock is defined.
pub fn stock_percentage(level: Decimal, stock_suggested: i32) -> Decimal {
    if stock_suggested > 0 {
        (level / Decimal::from(stock_suggested) * Decimal::from(100)).round_dp(2)
    } else {
        Decimal::ZERO
    }
}
