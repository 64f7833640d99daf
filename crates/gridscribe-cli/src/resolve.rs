//! Resolution of raw CLI arguments into validated run settings.

use gridscribe_core::{fit_font_width, validate_font_width, ConfigError, Settings};

use crate::cli_args::Cli;

/// Everything a command needs, validated up front.
#[derive(Debug)]
pub struct Resolved {
    pub settings: Settings,
    /// Glyph width to render at; None means the wide default.
    pub font_width: Option<usize>,
    /// Preview column cap; None means uncapped.
    pub preview_weeks: Option<usize>,
}

/// Validates arguments and picks the effective font width.
///
/// An explicit `--font-width` beats `--fit-weeks`; with neither, glyphs
/// render at their natural wide width.
pub fn resolve(cli: &Cli) -> Result<Resolved, ConfigError> {
    let settings = Settings::resolve(
        cli.text.as_deref(),
        cli.start_sunday.as_deref(),
        cli.commit_file.as_deref(),
        cli.spacing,
    )?;

    let font_width = match (cli.font_width, cli.fit_weeks.filter(|&w| w > 0)) {
        (Some(width), _) => Some(validate_font_width(width)?),
        (None, Some(fit_weeks)) => Some(fit_font_width(
            fit_weeks,
            settings.text.chars().count(),
            settings.spacing_columns,
        )),
        (None, None) => None,
    };

    let preview_weeks = match cli.preview_weeks {
        0 => None,
        cap => Some(cap),
    };

    Ok(Resolved {
        settings,
        font_width,
        preview_weeks,
    })
}
