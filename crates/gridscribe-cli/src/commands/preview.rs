//! Preview command implementation
//!
//! Renders the ASCII preview of the scheduled pattern to stdout, with
//! optional per-date listing or machine-readable JSON output. Never
//! touches the log file.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use gridscribe_core::{build_schedule, render_preview, resolve_anchor, stitch, Settings};
use serde::Serialize;
use std::process::ExitCode;

/// JSON shape emitted by `--preview --json`.
#[derive(Debug, Serialize)]
struct PreviewReport<'a> {
    text: &'a str,
    start_sunday: NaiveDate,
    weeks: usize,
    height: usize,
    dates: Vec<DateEntry>,
}

#[derive(Debug, Serialize)]
struct DateEntry {
    date: NaiveDate,
    col: usize,
    row: usize,
}

/// Run the preview command
///
/// # Arguments
/// * `settings` - Validated run settings
/// * `font_width` - Optional glyph width, 3..=5
/// * `preview_weeks` - Column cap for the rendered preview, if any
/// * `list_dates` - Also print one line per scheduled date
/// * `json` - Emit a JSON report instead of the ASCII preview
/// * `today` - Anchor fallback when no start Sunday is configured
///
/// # Returns
/// Exit code: 0 success, error on unsupported characters
pub fn run(
    settings: &Settings,
    font_width: Option<usize>,
    preview_weeks: Option<usize>,
    list_dates: bool,
    json: bool,
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

    if json {
        let canvas = stitch(&settings.text, settings.spacing_columns, font_width)?;
        let report = PreviewReport {
            text: &settings.text,
            start_sunday: anchor,
            weeks: canvas.width(),
            height: canvas.height(),
            dates: schedule
                .iter()
                .map(|(date, pixel)| DateEntry {
                    date: *date,
                    col: pixel.week,
                    row: pixel.row,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    let ascii = render_preview(
        &settings.text,
        anchor,
        settings.spacing_columns,
        font_width,
        preview_weeks,
    )?;
    println!("{ascii}");

    if list_dates {
        // BTreeMap iteration is already date-ascending.
        for (date, pixel) in &schedule {
            println!(
                "{} col={} row={}",
                date.format("%Y-%m-%d"),
                pixel.week,
                pixel.row
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
