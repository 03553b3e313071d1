//! File listings for a note vault.
//!
//! Naming only needs to know which files already exist. That knowledge comes
//! through the [`FileStore`] trait so callers can hand in a fixed listing
//! ([`MemoryStore`]) or walk a vault on disk ([`DirStore`]).

use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// A file known to the store, addressed by its vault-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// `/`-separated path relative to the vault root, e.g. `2.1-setup/2.1.01-intro.md`.
    pub path: String,
    /// Last path segment, extension included.
    pub name: String,
}

impl StoredFile {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        Self { path, name }
    }

    /// Every path segment except the last, re-joined with `/`.
    ///
    /// Files at the vault root have an empty parent folder.
    pub fn parent_folder(&self) -> &str {
        self.path.rsplit_once('/').map_or("", |(parent, _)| parent)
    }
}

/// Failures while listing the files of a vault.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("vault root '{0}' does not exist or is not a directory")]
    MissingRoot(PathBuf),
    #[error("failed to walk vault: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("path '{0}' is not valid UTF-8")]
    NonUtf8Path(PathBuf),
}

/// Read-only source of the files currently present in a vault.
pub trait FileStore {
    /// List every file the store knows about.
    ///
    /// # Errors
    /// Returns a [`StoreError`] if the underlying listing cannot be produced.
    fn files(&self) -> Result<Vec<StoredFile>, StoreError>;
}

/// A fixed, in-memory listing.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: Vec<StoredFile>,
}

impl MemoryStore {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: paths.into_iter().map(StoredFile::new).collect(),
        }
    }
}

impl FileStore for MemoryStore {
    fn files(&self) -> Result<Vec<StoredFile>, StoreError> {
        Ok(self.files.clone())
    }
}

/// A vault on disk, walked fresh on every listing.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
    include_hidden: bool,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_hidden: false,
        }
    }

    /// Also list dot-files and the contents of dot-directories (`.obsidian`, `.git`, ...).
    #[must_use]
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn vault_relative(&self, entry: &DirEntry) -> Result<String, StoreError> {
        let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
        let mut segments = Vec::new();
        for component in relative.components() {
            let segment = component
                .as_os_str()
                .to_str()
                .ok_or_else(|| StoreError::NonUtf8Path(entry.path().to_path_buf()))?;
            segments.push(segment);
        }
        Ok(segments.join("/"))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    // the root itself is never filtered, whatever its name
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

/// Dangling or looping symlinks, which the host would not list as notes either.
fn is_broken_link(err: &walkdir::Error) -> bool {
    err.loop_ancestor().is_some()
        || err
            .path()
            .and_then(|path| path.symlink_metadata().ok())
            .is_some_and(|meta| meta.file_type().is_symlink())
}

impl FileStore for DirStore {
    fn files(&self) -> Result<Vec<StoredFile>, StoreError> {
        if !self.root.is_dir() {
            return Err(StoreError::MissingRoot(self.root.clone()));
        }
        // symlinked notes are notes too
        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.include_hidden || !is_hidden(entry));

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_broken_link(&err) => {
                    warn!("skipping vault entry: {err}");
                    continue;
                },
                Err(err) => return Err(err.into()),
            };
            if !entry.file_type().is_file() {
                continue;
            }
            match self.vault_relative(&entry) {
                Ok(path) => files.push(StoredFile::new(path)),
                Err(err) => warn!("skipping vault entry: {err}"),
            }
        }
        debug!("listed {} files under '{}'", files.len(), self.root.display());
        Ok(files)
    }
}
