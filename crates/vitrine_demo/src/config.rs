//! Runtime configuration for `vitrine_demo`.
//!
//! The [`Config`] struct is the single source of truth for runtime options,
//! independent of how they were specified. Tests construct it directly
//! without CLI parsing.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    /// Styled output.
    #[default]
    Auto,
    /// Plain output, no escape sequences.
    Never,
}

/// Runtime configuration, resolved from CLI args and environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether the sample page declares `data-italic="true"`.
    pub italic: bool,

    /// Number of button clicks to simulate.
    pub clicks: usize,

    /// Whether to build the title-less page variant.
    pub titleless: bool,

    /// Color output mode.
    pub color_mode: ColorMode,

    /// Whether to print the JSON state report to stdout.
    pub json: bool,

    /// Optional path to write the JSON state report to.
    pub report_path: Option<PathBuf>,

    /// Log verbosity level (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            italic: false,
            clicks: 0,
            titleless: false,
            color_mode: ColorMode::Auto,
            json: false,
            report_path: None,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let color_mode = if cli.no_color {
            ColorMode::Never
        } else {
            ColorMode::Auto
        };

        Self {
            italic: cli.italic,
            clicks: cli.clicks,
            titleless: cli.no_title,
            color_mode,
            json: cli.json,
            report_path: cli.report.clone(),
            verbosity: cli.verbose,
        }
    }

    /// Check if output should be styled.
    #[must_use]
    pub const fn use_color(&self) -> bool {
        matches!(self.color_mode, ColorMode::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = Config::new();
        assert!(!config.italic);
        assert_eq!(config.clicks, 0);
        assert!(!config.titleless);
        assert!(config.use_color());
        assert!(!config.json);
    }

    #[test]
    fn config_from_cli_maps_fields() {
        let cli = Cli::try_parse_from([
            "vitrine_demo",
            "--italic",
            "--clicks",
            "2",
            "--no-title",
            "--no-color",
            "-vv",
        ])
        .unwrap();

        let config = Config::from_cli(&cli);
        assert!(config.italic);
        assert_eq!(config.clicks, 2);
        assert!(config.titleless);
        assert_eq!(config.color_mode, ColorMode::Never);
        assert!(!config.use_color());
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = Config {
            italic: true,
            clicks: 4,
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert!(back.italic);
        assert_eq!(back.clicks, 4);
        assert_eq!(back.color_mode, ColorMode::Auto);
    }
}
