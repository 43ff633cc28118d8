//! Machine-readable state report.
//!
//! Emitted with `--json` (stdout) or `--report <path>` (file), so scripts
//! and the CLI tests can observe the module's final state without scraping
//! the rendered card.

use serde::{Deserialize, Serialize};

/// Final state of a demo run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Clicks the run was asked to simulate.
    pub clicks_requested: usize,
    /// Clicks a module actually handled.
    pub clicks_handled: usize,
    /// Whether the title ended up emphasized.
    pub italic: bool,
}

impl Report {
    /// Encodes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
