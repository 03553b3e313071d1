use anyhow::Result;
use notenum::prefix::prefix_base;
use notenum::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_end_to_end_memory_store() {
    let store = MemoryStore::new(["2.1-setup/2.1.01-intro.md", "2.1-setup/2.1.02-basics.md"]);
    let name = next_file_name(&store, "My New Topic", Some("2.1-setup")).unwrap();
    assert_eq!(name, "2.1.03-my-new-topic");
}

#[test]
fn test_end_to_end_vault_on_disk() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path();
    fs::create_dir_all(root.join("3.2-x/4-y"))?;
    fs::create_dir_all(root.join(".obsidian"))?;
    fs::write(root.join("3.2-x/4-y/3.2.4.01-foo.md"), "# Foo\n")?;
    fs::write(root.join("3.2-x/4-y/3.2.4.03-bar.md"), "# Bar\n")?;
    fs::write(root.join("3.2-x/3.2.07-parent-level.md"), "")?;
    fs::write(root.join(".obsidian/workspace.json"), "{}")?;

    let store = DirStore::new(root);
    let proposal = propose(&store, "  Hello, World!! ", Some("3.2-x/4-y"))?;
    assert_eq!(proposal.prefix_base(), "3.2.4");
    assert_eq!(proposal.number(), "04");
    assert_eq!(proposal.slug(), "hello-world");
    assert_eq!(proposal.to_string(), "3.2.4.04-hello-world");

    let parent = propose(&store, "Next", Some("3.2-x"))?;
    assert_eq!(parent.to_string(), "3.2.08-next");
    Ok(())
}

#[test]
fn test_missing_vault_surfaces_store_error() -> Result<()> {
    let dir = tempdir()?;
    let store = DirStore::new(dir.path().join("not-a-vault"));
    let err = propose(&store, "t", Some("1-a")).unwrap_err();
    assert!(matches!(err, NameError::Store(StoreError::MissingRoot(_))));
    Ok(())
}

#[test]
fn test_missing_folder_path() {
    let store = MemoryStore::new(["1-a/1.01-x.md"]);
    assert!(matches!(next_file_name(&store, "t", None), Err(NameError::MissingFolderPath)));
    assert!(matches!(next_file_name(&store, "t", Some("")), Err(NameError::MissingFolderPath)));
}

#[test]
fn test_unnumbered_folders_have_empty_prefix() {
    for folder in ["Inbox", "Projects/Ideas", "notes/v2"] {
        assert_eq!(prefix_base(folder), "", "folder {folder}");
    }
}

#[test]
fn test_slugify_reexport() {
    assert_eq!(slugify("  Hello, World!! "), "hello-world");
}

#[test]
fn test_lib_version() {
    assert!(!NOTENUM_VERSION.is_empty());
}
