//! Default filesystem-backed port implementations.

use crate::ports::{Candidate, CandidateSource, FileStore};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Discovers `<root>/<subdir>/*.json` via a glob walk.
#[derive(Debug, Clone, Default)]
pub struct GlobCandidateSource;

impl CandidateSource for GlobCandidateSource {
    fn discover(&self, root: &Utf8Path) -> anyhow::Result<Vec<Candidate>> {
        let pattern = format!("{}/*/*.json", root);
        let walk =
            glob::glob(&pattern).with_context(|| format!("compile glob pattern {}", pattern))?;

        let mut candidates = Vec::new();
        for entry in walk {
            match entry {
                Ok(path) => match Utf8PathBuf::from_path_buf(path) {
                    Ok(path) => candidates.push(Candidate::Path(path)),
                    Err(path) => candidates.push(Candidate::Unreadable {
                        path: Utf8PathBuf::from(path.to_string_lossy().into_owned()),
                        message: "non-UTF-8 path".to_string(),
                    }),
                },
                Err(err) => {
                    let path = Utf8PathBuf::from(err.path().to_string_lossy().into_owned());
                    let message = err.to_string();
                    candidates.push(Candidate::Unreadable { path, message });
                }
            }
        }

        debug!(pattern = %pattern, count = candidates.len(), "discovered candidates");
        Ok(candidates)
    }
}

/// Filesystem file store. Reads must decode as UTF-8; writes land in place
/// with no backup and no atomic rename.
#[derive(Debug, Clone, Default)]
pub struct FsFileStore;

impl FileStore for FsFileStore {
    fn read_to_string(&self, path: &Utf8Path) -> anyhow::Result<String> {
        fs::read_to_string(path).with_context(|| format!("read {}", path))
    }

    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        fs::write(path, contents).with_context(|| format!("write {}", path))
    }
}

/// In-memory store for pipeline tests. Non-UTF-8 contents produce a read
/// error, mirroring the decode failure of the filesystem store.
#[derive(Debug, Default)]
pub struct InMemoryFileStore {
    files: Mutex<BTreeMap<Utf8PathBuf, Vec<u8>>>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<Utf8PathBuf>, contents: impl Into<Vec<u8>>) {
        self.lock().insert(path.into(), contents.into());
    }

    pub fn contents(&self, path: &Utf8Path) -> Option<Vec<u8>> {
        self.lock().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<Utf8PathBuf> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<Utf8PathBuf, Vec<u8>>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileStore for InMemoryFileStore {
    fn read_to_string(&self, path: &Utf8Path) -> anyhow::Result<String> {
        let bytes = self
            .lock()
            .get(path)
            .cloned()
            .with_context(|| format!("read {}: not found", path))?;
        String::from_utf8(bytes).with_context(|| format!("read {}: invalid UTF-8", path))
    }

    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        self.lock().insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}

/// Static candidate listing for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticCandidateSource {
    candidates: Vec<Candidate>,
}

impl StaticCandidateSource {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn from_paths(paths: impl IntoIterator<Item = Utf8PathBuf>) -> Self {
        Self::new(paths.into_iter().map(Candidate::Path).collect())
    }
}

impl CandidateSource for StaticCandidateSource {
    fn discover(&self, _root: &Utf8Path) -> anyhow::Result<Vec<Candidate>> {
        Ok(self.candidates.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 tempdir")
    }

    #[test]
    fn glob_source_finds_two_level_json_only() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);

        std::fs::create_dir_all(root.join("en")).expect("mkdir");
        std::fs::create_dir_all(root.join("ko").join("nested")).expect("mkdir");
        std::fs::write(root.join("en").join("common.json"), "{}").expect("write");
        std::fs::write(root.join("en").join("notes.txt"), "x").expect("write");
        std::fs::write(root.join("top.json"), "{}").expect("write");
        std::fs::write(root.join("ko").join("nested").join("deep.json"), "{}").expect("write");

        let candidates = GlobCandidateSource.discover(&root).expect("discover");
        assert_eq!(
            candidates,
            vec![Candidate::Path(root.join("en").join("common.json"))]
        );
    }

    #[test]
    fn glob_source_is_empty_for_missing_root() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp).join("does-not-exist");

        let candidates = GlobCandidateSource.discover(&root).expect("discover");
        assert!(candidates.is_empty());
    }

    #[test]
    fn fs_store_round_trips() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);
        let path = root.join("file.json");

        let store = FsFileStore;
        store.write_file(&path, b"{}").expect("write");
        assert_eq!(store.read_to_string(&path).expect("read"), "{}");
    }

    #[test]
    fn fs_store_read_fails_on_invalid_utf8() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);
        let path = root.join("binary.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).expect("write");

        assert!(FsFileStore.read_to_string(&path).is_err());
    }

    #[test]
    fn in_memory_store_read_fails_on_missing_and_invalid() {
        let store = InMemoryFileStore::new();
        let missing = Utf8Path::new("nope.json");
        assert!(store.read_to_string(missing).is_err());

        store.insert("bad.json", vec![0xff, 0xfe]);
        assert!(store.read_to_string(Utf8Path::new("bad.json")).is_err());
        // Failed reads leave contents as they were.
        assert_eq!(
            store.contents(Utf8Path::new("bad.json")),
            Some(vec![0xff, 0xfe])
        );
    }

    #[test]
    fn static_source_ignores_the_root() {
        let source = StaticCandidateSource::from_paths([Utf8PathBuf::from("a/b.json")]);
        let candidates = source.discover(Utf8Path::new("anywhere")).expect("discover");
        assert_eq!(candidates, vec![Candidate::Path("a/b.json".into())]);
    }
}
