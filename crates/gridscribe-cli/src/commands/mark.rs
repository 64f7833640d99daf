//! Mark command implementation
//!
//! The default (non-preview) path: build the schedule, and if today is
//! one of the scheduled dates, idempotently append today's record line
//! to the log file.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use gridscribe_core::{append_if_missing, build_schedule, record_line, resolve_anchor, Settings};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

/// Run the mark command
///
/// # Arguments
/// * `settings` - Validated run settings
/// * `font_width` - Optional glyph width, 3..=5
/// * `mutation_token` - Extra token appended to the record line
/// * `today` - The date being decided; also the anchor fallback
///
/// # Returns
/// Exit code: 0 success (including "nothing scheduled today")
pub fn run(
    settings: &Settings,
    font_width: Option<usize>,
    mutation_token: Option<&str>,
    today: NaiveDate,
) -> Result<ExitCode> {
    let anchor = resolve_anchor(settings.start_sunday, today);
    let schedule = build_schedule(
        &settings.text,
        anchor,
        settings.spacing_columns,
        font_width,
    )
    .with_context(|| format!("failed to schedule text {:?}", settings.text))?;

    info!(
        total_pixels = schedule.len(),
        start_sunday = %anchor,
        today = %today,
        "schedule generated"
    );

    let Some(pixel) = schedule.get(&today).copied() else {
        info!("no commit needed today");
        return Ok(ExitCode::SUCCESS);
    };

    let line = record_line(today, &settings.text, pixel, mutation_token);
    let changed = append_if_missing(Path::new(&settings.commit_file), &line)
        .with_context(|| format!("failed to update log file {:?}", settings.commit_file))?;

    if changed {
        info!(file = %settings.commit_file, line = %line, "commit needed, record appended");
    } else {
        info!(file = %settings.commit_file, line = %line, "already recorded");
    }

    Ok(ExitCode::SUCCESS)
}
