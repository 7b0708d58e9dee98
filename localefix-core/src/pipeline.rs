//! The repair pass, extracted from the CLI.
//!
//! The entry point is I/O-agnostic: discovery and file access go through
//! the port traits, so tests can run against an in-memory store.

use crate::ports::{Candidate, CandidateSource, FileStore};
use crate::settings::RepairSettings;
use camino::Utf8Path;
use localefix_domain::{EMPTY_OBJECT, RepairDecision, plan_repair, render_document};
use localefix_types::outcome::{FileOutcome, FileRecord, FixKind};
use localefix_types::report::RunSummary;
use tracing::{debug, warn};

/// Outcome of [`run_repair`]: one record per candidate plus the tallies.
#[derive(Debug, Clone)]
pub struct RepairOutcome {
    pub records: Vec<FileRecord>,
    pub summary: RunSummary,
}

/// Run the repair pass over every `<root>/<subdir>/*.json` candidate,
/// sequentially, in the order discovery yields them.
///
/// Per-file errors never propagate: they land in that file's record as
/// `Failed` and the scan continues. The only hard error is a root the
/// discovery walk cannot be set up for.
pub fn run_repair(
    settings: &RepairSettings,
    source: &dyn CandidateSource,
    store: &dyn FileStore,
) -> anyhow::Result<RepairOutcome> {
    let candidates = source.discover(&settings.root)?;

    let mut records = Vec::with_capacity(candidates.len());
    let mut summary = RunSummary::default();

    for candidate in candidates {
        let record = match candidate {
            Candidate::Path(path) => {
                let outcome = repair_file(store, &path);
                FileRecord { path, outcome }
            }
            Candidate::Unreadable { path, message } => {
                warn!(path = %path, message = %message, "unreadable directory entry");
                FileRecord {
                    path,
                    outcome: FileOutcome::Failed { message },
                }
            }
        };
        summary.record(&record.outcome);
        records.push(record);
    }

    debug!(
        fixed = summary.fixed,
        failed = summary.failed,
        ignored = summary.ignored,
        "repair pass finished"
    );
    Ok(RepairOutcome { records, summary })
}

/// Classify and repair a single file. Every error is converted into a
/// `Failed` outcome; the file is left at whatever state the failure hit.
fn repair_file(store: &dyn FileStore, path: &Utf8Path) -> FileOutcome {
    match try_repair_file(store, path) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(path = %path, "file failed: {err:#}");
            FileOutcome::failed(format!("{err:#}"))
        }
    }
}

fn try_repair_file(store: &dyn FileStore, path: &Utf8Path) -> anyhow::Result<FileOutcome> {
    let content = store.read_to_string(path)?;

    Ok(match plan_repair(&content) {
        RepairDecision::Skip(reason) => {
            debug!(path = %path, ?reason, "left untouched");
            FileOutcome::Ignored { reason }
        }
        RepairDecision::Rewrite { document } => {
            let rendered = render_document(&document)?;
            store.write_file(path, rendered.as_bytes())?;
            debug!(path = %path, "repaired");
            FileOutcome::Fixed {
                kind: FixKind::Patched,
            }
        }
        RepairDecision::Reset => {
            store.write_file(path, EMPTY_OBJECT.as_bytes())?;
            debug!(path = %path, "unrecoverable, reset to empty object");
            FileOutcome::Fixed {
                kind: FixKind::Reset,
            }
        }
    })
}
