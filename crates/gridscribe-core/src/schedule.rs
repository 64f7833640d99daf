//! Date scheduling: mapping canvas pixels onto calendar days.
//!
//! Canvas column `c`, row `r` is "week c, day r" counted from an anchor
//! Sunday, so each on-pixel lands on `anchor + 7c + r` days. Week
//! columns advance left to right over time; rows 0..=6 are
//! Sunday..Saturday.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::canvas;
use crate::error::RenderError;

/// Position of an on-pixel in the contribution grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    /// Week column, 0 at the anchor Sunday.
    pub week: usize,
    /// Weekday row, 0 = Sunday .. 6 = Saturday.
    pub row: usize,
}

/// Date -> pixel mapping for a rendered text. Ordered ascending by date.
pub type Schedule = BTreeMap<NaiveDate, Pixel>;

/// Shifts a date back to the Sunday of its week. Sundays are fixed
/// points, so the function is idempotent.
pub fn nearest_previous_sunday(day: NaiveDate) -> NaiveDate {
    let days_since_sunday = day.weekday().num_days_from_sunday() as i64;
    day - Duration::days(days_since_sunday)
}

/// Resolves the anchor Sunday from an optional configured date, falling
/// back to `today`.
pub fn resolve_anchor(configured: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    nearest_previous_sunday(configured.unwrap_or(today))
}

/// Builds the date -> pixel schedule for `text` anchored at
/// `start_sunday`.
///
/// Distinct (week, row) pairs yield distinct dates for a fixed anchor,
/// so no key collisions can occur; the tests assert this rather than
/// the runtime handling it.
pub fn build_schedule(
    text: &str,
    start_sunday: NaiveDate,
    spacing: usize,
    target_width: Option<usize>,
) -> Result<Schedule, RenderError> {
    let canvas = canvas::stitch(text, spacing, target_width)?;
    let mut schedule = Schedule::new();
    for c in 0..canvas.width() {
        for r in 0..canvas.height() {
            if canvas.is_set(c, r) {
                let day = start_sunday + Duration::days((c * 7 + r) as i64);
                schedule.insert(day, Pixel { week: c, row: r });
            }
        }
    }
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sunday_is_a_fixed_point() {
        let sunday = date(2024, 1, 7);
        assert_eq!(nearest_previous_sunday(sunday), sunday);
    }

    #[test]
    fn weekdays_round_back_to_the_previous_sunday() {
        let sunday = date(2024, 1, 7);
        for offset in 0..7 {
            let day = sunday + Duration::days(offset);
            assert_eq!(nearest_previous_sunday(day), sunday, "offset {offset}");
        }
    }

    #[test]
    fn nearest_previous_sunday_is_idempotent() {
        let day = date(2024, 3, 14);
        let once = nearest_previous_sunday(day);
        assert_eq!(nearest_previous_sunday(once), once);
    }

    #[test]
    fn anchor_prefers_the_configured_date() {
        let configured = date(2024, 1, 10);
        let today = date(2024, 6, 1);
        assert_eq!(
            resolve_anchor(Some(configured), today),
            date(2024, 1, 7)
        );
        assert_eq!(resolve_anchor(None, today), nearest_previous_sunday(today));
    }

    #[test]
    fn pixel_at_week_2_row_3_is_17_days_out() {
        let anchor = date(2024, 1, 7);
        assert_eq!(anchor + Duration::days(2 * 7 + 3), date(2024, 1, 24));
    }

    #[test]
    fn schedule_round_trips_every_entry() {
        let anchor = date(2024, 1, 7);
        let schedule = build_schedule("JOY", anchor, 1, None).unwrap();
        assert!(!schedule.is_empty());
        for (day, pixel) in &schedule {
            let expected = anchor + Duration::days((pixel.week * 7 + pixel.row) as i64);
            assert_eq!(*day, expected);
            assert_eq!(day.weekday().num_days_from_sunday() as usize, pixel.row);
        }
    }

    #[test]
    fn schedule_has_one_entry_per_on_pixel() {
        let anchor = date(2024, 1, 7);
        let canvas = canvas::stitch("JOY", 1, None).unwrap();
        let on_pixels = canvas
            .columns()
            .iter()
            .map(|m| m.count_ones() as usize)
            .sum::<usize>();
        let schedule = build_schedule("JOY", anchor, 1, None).unwrap();
        assert_eq!(schedule.len(), on_pixels);
    }
}
