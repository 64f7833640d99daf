//! Append-only log file mutation.
//!
//! The log is the boundary with the external tracking system: one
//! header comment line followed by one record line per scheduled date.
//! Appends are idempotent on full-line equality. There is no file
//! locking; at most one process instance is assumed per log file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::LogError;
use crate::schedule::Pixel;

/// First line written to a freshly created log file.
pub const LOG_HEADER: &str = "# Contribution writer log. Do not edit manually.";

/// Formats the record line for one scheduled day.
pub fn record_line(day: NaiveDate, text: &str, pixel: Pixel, token: Option<&str>) -> String {
    let mut line = format!(
        "{} {} col={} row={}",
        day.format("%Y-%m-%d"),
        text,
        pixel.week,
        pixel.row
    );
    if let Some(token) = token {
        line.push_str(&format!(" token={token}"));
    }
    line
}

/// Creates the log file with its header if absent. Existing files are
/// never touched, let alone rewritten.
pub fn ensure_log_exists(path: &Path) -> Result<(), LogError> {
    if !path.exists() {
        fs::write(path, format!("{LOG_HEADER}\n"))?;
    }
    Ok(())
}

/// Appends `line` unless an identical line is already present.
///
/// Returns true when the file was modified. Repeated identical calls
/// are no-ops after the first.
pub fn append_if_missing(path: &Path, line: &str) -> Result<bool, LogError> {
    ensure_log_exists(path)?;
    let contents = fs::read_to_string(path)?;
    if contents.lines().any(|existing| existing == line) {
        return Ok(false);
    }
    let mut file = OpenOptions::new().append(true).open(path)?;
    writeln!(file, "{line}")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn record_line_with_and_without_token() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 24).unwrap();
        let pixel = Pixel { week: 2, row: 3 };
        assert_eq!(
            record_line(day, "JOY", pixel, None),
            "2024-01-24 JOY col=2 row=3"
        );
        assert_eq!(
            record_line(day, "JOY", pixel, Some("run-7")),
            "2024-01-24 JOY col=2 row=3 token=run-7"
        );
    }

    #[test]
    fn ensure_creates_with_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        ensure_log_exists(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{LOG_HEADER}\n"));

        // A second call must not rewrite existing contents.
        fs::write(&path, "custom contents\n").unwrap();
        ensure_log_exists(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom contents\n");
    }

    #[test]
    fn append_if_missing_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let line = "2024-01-24 JOY col=2 row=3";

        assert!(append_if_missing(&path, line).unwrap());
        assert!(!append_if_missing(&path, line).unwrap());

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches(line).count(), 1);
        assert_eq!(contents, format!("{LOG_HEADER}\n{line}\n"));
    }

    #[test]
    fn distinct_lines_each_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        assert!(append_if_missing(&path, "2024-01-24 JOY col=2 row=3").unwrap());
        assert!(append_if_missing(&path, "2024-01-25 JOY col=2 row=4").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
    }
}
