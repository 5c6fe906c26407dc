//! Requisition reference models

use chrono::{DateTime, Utc};

/// Prefix for auto-generated exit requisition labels
pub const EXIT_LABEL_PREFIX: &str = "SIN-REQ-SAL";

/// Synthesize a unique requisition label for an exit ticket submitted
/// without one (e.g. "SIN-REQ-SAL/20250817/1755412800123")
pub fn synthesize_exit_label(now: DateTime<Utc>) -> String {
    format!(
        "{}/{}/{}",
        EXIT_LABEL_PREFIX,
        now.format("%Y%m%d"),
        now.timestamp_millis()
    )
}
