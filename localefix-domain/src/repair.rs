//! Classification of file content into a repair decision.

use crate::patch::patch_source;
use localefix_types::outcome::IgnoreReason;
use serde_json::Value;
use thiserror::Error;

/// The literal written by the destructive fallback.
pub const EMPTY_OBJECT: &str = "{}";

/// What the pipeline should do with one file's content.
#[derive(Debug, Clone, PartialEq)]
pub enum RepairDecision {
    /// Leave the file byte-for-byte untouched.
    Skip(IgnoreReason),

    /// The patched content parses. Overwrite the file with the canonical
    /// rendering of `document`.
    Rewrite { document: Value },

    /// Still unparsable after patching. Overwrite the file with
    /// [`EMPTY_OBJECT`], discarding the original content.
    Reset,
}

/// Classify `content` and decide the repair action.
///
/// Empty content and the literal `{}` are skipped before any parse is
/// attempted, so they are never reformatted. Valid JSON is skipped as-is.
pub fn plan_repair(content: &str) -> RepairDecision {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return RepairDecision::Skip(IgnoreReason::Empty);
    }
    if trimmed == EMPTY_OBJECT {
        return RepairDecision::Skip(IgnoreReason::EmptyObject);
    }
    if serde_json::from_str::<Value>(content).is_ok() {
        return RepairDecision::Skip(IgnoreReason::AlreadyValid);
    }

    let patched = patch_source(content);
    match serde_json::from_str::<Value>(&patched) {
        Ok(document) => RepairDecision::Rewrite { document },
        Err(_) => RepairDecision::Reset,
    }
}

/// Render a document in the canonical on-disk form: two-space indentation,
/// keys in the parser's stable sorted order, non-ASCII preserved literally.
pub fn render_document(document: &Value) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Serialization failure while rendering a repaired document.
#[derive(Debug, Error)]
#[error("render repaired document: {0}")]
pub struct RenderError(#[from] serde_json::Error);
