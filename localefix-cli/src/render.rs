//! Console rendering for per-file status lines and the run summary.

use localefix_types::outcome::{FileOutcome, FileRecord, FixKind, IgnoreReason};
use localefix_types::report::RunSummary;

pub fn file_line(record: &FileRecord) -> String {
    let status = match &record.outcome {
        FileOutcome::Ignored { reason } => match reason {
            IgnoreReason::Empty => "empty file, ignored".to_string(),
            IgnoreReason::EmptyObject => "empty object, ignored".to_string(),
            IgnoreReason::AlreadyValid => "already valid JSON".to_string(),
        },
        FileOutcome::Fixed { kind } => match kind {
            FixKind::Patched => "repaired".to_string(),
            FixKind::Reset => "unrecoverable, reset to {}".to_string(),
        },
        FileOutcome::Failed { message } => format!("failed: {message}"),
    };
    format!("{}: {}", record.path, status)
}

pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "done: {} file(s) fixed, {} file(s) failed",
        summary.fixed, summary.failed
    )
}
