//! Command-line interface for `vitrine_demo`.
//!
//! Defines the CLI contract using clap derive macros.
//!
//! # Examples
//!
//! ```bash
//! # Render the sample card
//! vitrine_demo
//!
//! # Start italic (declared on the markup) and simulate two clicks
//! vitrine_demo --italic --clicks 2
//!
//! # Machine-readable state report
//! vitrine_demo --clicks 1 --json
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Vitrine demo - drives the product showcase module end to end.
///
/// Builds the sample page, mounts the module, simulates button clicks,
/// and renders the resulting card.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "vitrine_demo",
    author,
    version,
    about = "Drives the product showcase module end to end"
)]
pub struct Cli {
    /// Declare the italic option on the sample page
    ///
    /// Sets `data-italic="true"` on the container element, so the module
    /// picks it up the same way it would from authored markup
    #[arg(long, env = "VITRINE_ITALIC")]
    pub italic: bool,

    /// Number of button clicks to simulate
    #[arg(long, short = 'c', default_value = "0", env = "VITRINE_CLICKS")]
    pub clicks: usize,

    /// Build the title-less page variant
    ///
    /// The module still mounts and the button still clicks; the toggle
    /// reports failure instead of mutating anything
    #[arg(long)]
    pub no_title: bool,

    /// Force plain output
    ///
    /// Respects the `NO_COLOR` environment variable convention
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Print a JSON state report to stdout after rendering
    #[arg(long)]
    pub json: bool,

    /// Write the JSON state report to a file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Get the log filter directive based on verbosity.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
