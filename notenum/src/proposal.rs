//! Proposing the next note name for a folder.
//!
//! Given a topic title and a vault folder, [`propose`] looks at the folder's
//! existing siblings and returns `<prefix>.<NN>-<slug>`, where `NN` is one past
//! the highest sequence number already used under that prefix.
//!
//! Nothing is reserved: two proposals computed against the same listing will
//! agree, so callers creating notes concurrently can collide.

use std::fmt;

use log::{debug, trace};
use thiserror::Error;

use crate::prefix::{next_number, prefix_base, sequence_number, sequence_pattern};
use crate::slug::slugify;
use crate::store::{FileStore, StoreError};

/// Reasons a name cannot be proposed.
#[derive(Debug, Error)]
pub enum NameError {
    #[error("missing folder path")]
    MissingFolderPath,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A proposed note name, kept in its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    prefix_base: String,
    number: String,
    slug: String,
}

impl Proposal {
    /// Dot-joined numeric labels of the folder path (may be empty).
    pub fn prefix_base(&self) -> &str {
        &self.prefix_base
    }

    /// Zero-padded sequence number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Slugified topic title (may be empty).
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The proposed name with `extension` appended (`md` -> `2.1.03-topic.md`).
    pub fn file_name_with_extension(&self, extension: &str) -> String {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            self.to_string()
        } else {
            format!("{self}.{extension}")
        }
    }
}

impl fmt::Display for Proposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}-{}", self.prefix_base, self.number, self.slug)
    }
}

/// Propose the next note name for `topic_title` inside `folder_path`.
///
/// Siblings are the files whose parent folder is exactly `folder_path`; no
/// path normalization is done, so a trailing slash matches nothing.
///
/// # Errors
/// - [`NameError::MissingFolderPath`] if `folder_path` is absent or empty,
///   checked before the store is consulted.
/// - [`NameError::Store`] with the store's own error if the listing fails.
pub fn propose<S>(store: &S, topic_title: &str, folder_path: Option<&str>) -> Result<Proposal, NameError>
where
    S: FileStore + ?Sized,
{
    let folder_path = match folder_path {
        Some(path) if !path.is_empty() => path,
        _ => return Err(NameError::MissingFolderPath),
    };

    let prefix_base = prefix_base(folder_path);
    let pattern = sequence_pattern(&prefix_base);

    let siblings: Vec<_> = store
        .files()?
        .into_iter()
        .filter(|file| file.parent_folder() == folder_path)
        .collect();

    let mut numbers = Vec::new();
    for file in &siblings {
        let number = sequence_number(&pattern, &file.name);
        trace!("sibling '{}' -> {number:?}", file.name);
        numbers.extend(number);
    }

    let proposal = Proposal {
        number: next_number(&numbers),
        slug: slugify(topic_title),
        prefix_base,
    };
    debug!(
        "proposal folder='{folder_path}' prefix='{}' pattern='{}' siblings={} numbers={numbers:?} next={} slug='{}'",
        proposal.prefix_base,
        pattern.as_str(),
        siblings.len(),
        proposal.number,
        proposal.slug
    );
    Ok(proposal)
}

/// Like [`propose`], returning the rendered name directly.
///
/// # Errors
/// See [`propose`].
pub fn next_file_name<S>(store: &S, topic_title: &str, folder_path: Option<&str>) -> Result<String, NameError>
where
    S: FileStore + ?Sized,
{
    propose(store, topic_title, folder_path).map(|proposal| proposal.to_string())
}
