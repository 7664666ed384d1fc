//! Bounded most-recently-used list of opened files.
//!
//! The list is persisted as a newline-joined string inside the property
//! store and rebuilt from it before every mutation, so the in-memory copy
//! is only as stale as the last `refresh`/`add` call. Index 0 is the most
//! recently used entry.

use std::path::{Path, PathBuf};

use crate::store::defaults::RECENT_FILES_KEY;
use crate::store::PropertyStore;

/// How many entries are retained by default.
pub const DEFAULT_MAX_RECENT_FILES: usize = 30;

#[derive(Clone, Debug)]
pub struct RecentFilesList {
    max_files: usize,
    files: Vec<PathBuf>,
}

impl RecentFilesList {
    pub fn new() -> Self {
        Self::with_max(DEFAULT_MAX_RECENT_FILES)
    }

    pub fn with_max(max_files: usize) -> Self {
        Self {
            max_files,
            files: Vec::new(),
        }
    }

    /// Reload from the store and immediately write the normalized form
    /// back. The round trip drops duplicates, blank lines and overflow
    /// left behind by older releases.
    pub fn refresh(&mut self, store: &mut PropertyStore) {
        self.restore_from(&store.get(RECENT_FILES_KEY));
        store.set(RECENT_FILES_KEY, self.serialize());
    }

    /// Promote `path` to most-recent and persist the updated list.
    /// Overflow drops the oldest entry, never the newest.
    pub fn add(&mut self, store: &mut PropertyStore, path: &Path) {
        self.restore_from(&store.get(RECENT_FILES_KEY));
        self.files.retain(|p| p != path);
        self.files.insert(0, path.to_path_buf());
        self.files.truncate(self.max_files);
        store.set(RECENT_FILES_KEY, self.serialize());
    }

    /// Entry at `index`, most recent first. Out-of-range reads are `None`;
    /// positional access never errors.
    pub fn entry(&self, index: usize) -> Option<&Path> {
        self.files.get(index).map(PathBuf::as_path)
    }

    pub fn most_recent(&self) -> Option<&Path> {
        self.entry(0)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    fn restore_from(&mut self, serialized: &str) {
        self.files.clear();
        for line in serialized.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let path = PathBuf::from(line);
            if !self.files.contains(&path) {
                self.files.push(path);
            }
        }
        self.files.truncate(self.max_files);
    }

    fn serialize(&self) -> String {
        self.files
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for RecentFilesList {
    fn default() -> Self {
        Self::new()
    }
}
