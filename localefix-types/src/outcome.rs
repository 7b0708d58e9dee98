use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Terminal state for one scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum FileOutcome {
    /// Left untouched. Counted in neither printed tally.
    Ignored { reason: IgnoreReason },

    /// Overwritten in place with valid JSON.
    Fixed { kind: FixKind },

    /// Read or processing error. The on-disk state is whatever it was at
    /// the point of failure; there is no rollback.
    Failed { message: String },
}

impl FileOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        FileOutcome::Failed {
            message: message.into(),
        }
    }
}

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Nothing but whitespace.
    Empty,
    /// Exactly the literal `{}` after trimming.
    EmptyObject,
    /// Parsed as-is; no repair needed.
    AlreadyValid,
}

/// How a rewritten file was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixKind {
    /// The text patches made the content parse; rewritten canonically.
    Patched,
    /// Still unparsable after patching; reset to `{}`, discarding the
    /// original content.
    Reset,
}

/// Path plus terminal state for one candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: Utf8PathBuf,
    pub outcome: FileOutcome,
}
