//! Port traits abstracting all I/O away from the pipeline.

use camino::{Utf8Path, Utf8PathBuf};

/// One discovery result. Entries the walk could not resolve are carried
/// alongside the readable paths so the pipeline can count them as failed
/// instead of aborting the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Path(Utf8PathBuf),
    Unreadable { path: Utf8PathBuf, message: String },
}

/// Discovery of candidate locale files under a root directory.
pub trait CandidateSource {
    /// List every `<root>/<subdir>/*.json` entry. The only hard error is a
    /// root the walk cannot be compiled for.
    fn discover(&self, root: &Utf8Path) -> anyhow::Result<Vec<Candidate>>;
}

/// File read/overwrite operations.
pub trait FileStore {
    fn read_to_string(&self, path: &Utf8Path) -> anyhow::Result<String>;
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
}
