//! gridscribe end-to-end test infrastructure.
//!
//! Integration tests for the end-to-end flows:
//!
//! - Scheduling: text -> canvas -> date/pixel mapping
//! - Log mutation: idempotent append-only record writing
//! - Preview: ASCII and JSON output shapes
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gridscribe-tests
//! ```

use chrono::NaiveDate;

/// A Sunday used as the anchor throughout the integration tests.
pub fn anchor_sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
}
