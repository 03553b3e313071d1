//! Creating a proposed note inside the vault.

use anyhow::{Context, Result, bail};
use log::info;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::proposal::Proposal;

/// Check that `folder` names a single vault folder verbatim.
///
/// Siblings are found by exact folder comparison, so `a/`, `a//b`, `./a` or
/// `a/../b` would see no siblings yet write beside them on disk.
///
/// # Errors
/// Returns an error naming the first empty, `.` or `..` segment.
pub fn check_note_folder(folder: &str) -> Result<()> {
    if folder.is_empty() {
        bail!("folder path is empty");
    }
    if let Some(segment) = folder.split('/').find(|segment| matches!(*segment, "" | "." | "..")) {
        bail!("folder path '{folder}' has an invalid segment '{segment}'");
    }
    Ok(())
}

/// Write a new note for `proposal` under `vault/folder`, headed by `title`.
///
/// The folder is created if needed; an existing note is never overwritten.
/// Returns the vault-relative, `/`-separated path of the new note.
///
/// # Errors
/// Returns an error if `folder` fails [`check_note_folder`], the folder cannot
/// be created, the note already exists, or the heading cannot be written.
pub fn create_note(vault: &Path, folder: &str, proposal: &Proposal, extension: &str, title: &str) -> Result<String> {
    check_note_folder(folder)?;
    let file_name = proposal.file_name_with_extension(extension);
    let dir = folder.split('/').fold(vault.to_path_buf(), |path, segment| path.join(segment));
    fs::create_dir_all(&dir).with_context(|| format!("unable to create folder '{}'", dir.display()))?;

    let path = dir.join(&file_name);
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .with_context(|| format!("unable to create note '{}'", path.display()))?;
    writeln!(file, "# {}", title.trim()).with_context(|| format!("writing '{}'", path.display()))?;
    info!("created note '{}'", path.display());
    Ok(format!("{folder}/{file_name}"))
}
