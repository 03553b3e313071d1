#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** notenum **
//! Sequential, prefix-scoped note naming for Markdown vaults.

pub const NOTENUM_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod note;
pub mod prefix;
pub mod proposal;
pub mod slug;
pub mod store;

// Re-exports for convenience
pub use config::Config;
pub use note::{check_note_folder, create_note};
pub use proposal::{NameError, Proposal, next_file_name, propose};
pub use slug::slugify;
pub use store::{DirStore, FileStore, MemoryStore, StoreError, StoredFile};
