use crate::outcome::FileOutcome;
use serde::{Deserialize, Serialize};

/// Counters accumulated across one repair pass.
///
/// The printed summary shows `fixed` and `failed` only. Files that were
/// already valid, empty, or the literal `{}` land in `ignored`, which is
/// surfaced at debug log level but excluded from both printed tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub fixed: u64,
    pub failed: u64,
    pub ignored: u64,
}

impl RunSummary {
    /// Fold one outcome into the tallies.
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Ignored { .. } => self.ignored += 1,
            FileOutcome::Fixed { .. } => self.fixed += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }
}
