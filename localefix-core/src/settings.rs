//! Clap-free settings for the repair pipeline.

use camino::Utf8PathBuf;

/// Root consumed by a zero-argument run, matching the layout the tool was
/// built for: one subdirectory per locale under `public/locales`.
pub const DEFAULT_ROOT: &str = "public/locales";

/// Settings for one repair pass.
#[derive(Debug, Clone)]
pub struct RepairSettings {
    /// Directory containing one subdirectory per locale.
    pub root: Utf8PathBuf,
}

impl Default for RepairSettings {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from(DEFAULT_ROOT),
        }
    }
}
