//! CLI argument definitions for the gridscribe command-line interface.
//!
//! The `#[derive(Parser)]` type is defined here, keeping `main.rs`
//! focused on settings resolution and dispatch. Every option falls back
//! to an environment variable so scheduled runs (cron, CI) can be
//! configured without flags.

use clap::Parser;

/// gridscribe - Draw text on a contribution graph by scheduling log mutations
#[derive(Parser, Debug)]
#[command(name = "gridscribe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text to render (default BAREFOOTJOEY); normalized to uppercase
    #[arg(long, env = "TEXT")]
    pub text: Option<String>,

    /// Leftmost Sunday YYYY-MM-DD; a non-Sunday is shifted back to the
    /// previous Sunday (default: the last Sunday from today)
    #[arg(long, env = "START_SUNDAY")]
    pub start_sunday: Option<String>,

    /// File to mutate (default contrib_log.txt)
    #[arg(long, env = "COMMIT_FILE")]
    pub commit_file: Option<String>,

    /// Blank week columns between characters, 0-3 (default 1)
    #[arg(long, env = "SPACING_COLUMNS")]
    pub spacing: Option<usize>,

    /// Show ASCII preview and exit without touching the log
    #[arg(long)]
    pub preview: bool,

    /// When previewing, list all scheduled dates
    #[arg(long)]
    pub list_dates: bool,

    /// Compress glyphs to the given width (3, 4, or 5; default 5)
    #[arg(long, env = "FONT_WIDTH")]
    pub font_width: Option<usize>,

    /// Limit the preview to this many week columns; 0 disables the cap
    #[arg(long, env = "PREVIEW_WEEKS", default_value_t = 52)]
    pub preview_weeks: usize,

    /// Auto-pick a font width so the total rendered width approximates
    /// this many weeks (an explicit --font-width wins)
    #[arg(long, env = "FIT_WEEKS")]
    pub fit_weeks: Option<usize>,

    /// Extra token appended to emitted log lines to force uniqueness
    #[arg(long, env = "MUTATION_TOKEN")]
    pub mutation_token: Option<String>,

    /// Output the preview as machine-readable JSON (no colored output)
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_preview_invocation() {
        let cli = Cli::try_parse_from([
            "gridscribe",
            "--text",
            "joy",
            "--start-sunday",
            "2024-01-07",
            "--spacing",
            "2",
            "--font-width",
            "3",
            "--preview",
            "--list-dates",
            "--preview-weeks",
            "40",
        ])
        .unwrap();
        assert_eq!(cli.text.as_deref(), Some("joy"));
        assert_eq!(cli.start_sunday.as_deref(), Some("2024-01-07"));
        assert_eq!(cli.spacing, Some(2));
        assert_eq!(cli.font_width, Some(3));
        assert!(cli.preview);
        assert!(cli.list_dates);
        assert_eq!(cli.preview_weeks, 40);
        assert_eq!(cli.fit_weeks, None);
    }

    #[test]
    fn defaults_leave_options_unset() {
        let cli = Cli::try_parse_from(["gridscribe"]).unwrap();
        assert_eq!(cli.text, None);
        assert!(!cli.preview);
        assert!(!cli.json);
        assert_eq!(cli.preview_weeks, 52);
    }

    #[test]
    fn mutation_token_is_free_form() {
        let cli =
            Cli::try_parse_from(["gridscribe", "--mutation-token", "run 7/extra"]).unwrap();
        assert_eq!(cli.mutation_token.as_deref(), Some("run 7/extra"));
    }
}
