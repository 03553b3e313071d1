#![warn(clippy::pedantic)]
//! ** notenum **
//! Prints (and optionally creates) the next numbered note name for a vault folder.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use notenum::{Config, DirStore, check_note_folder, create_note, propose};

#[derive(Parser)]
#[command(author, version, about = "Propose the next sequentially numbered note name for a vault folder.")]
struct Cli {
    /// Topic title to slugify into the note name.
    title: String,
    /// Vault-relative folder path, `/`-separated (e.g. `2.1-setup`).
    #[arg(long, short = 'f', value_name = "FOLDER")]
    folder: String,
    /// Vault root directory (defaults to the config value, then the current directory).
    #[arg(long, value_name = "DIR")]
    vault: Option<PathBuf>,
    /// Read settings from this TOML file instead of the default location.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Extension for created notes (overrides the config file).
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,
    /// Print the name with its extension.
    #[arg(long)]
    with_extension: bool,
    /// Create the note in the vault instead of only printing its name.
    #[arg(long)]
    create: bool,
    /// Include dot-files and dot-directories when scanning the vault.
    #[arg(long)]
    include_hidden: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("while loading notenum config")?;
    let vault = cli.vault.clone().or(config.vault.clone()).unwrap_or_else(|| PathBuf::from("."));
    let extension = cli.extension.clone().unwrap_or(config.extension.clone());
    let store = DirStore::new(&vault).include_hidden(cli.include_hidden || config.include_hidden);

    if cli.create {
        check_note_folder(&cli.folder).context("refusing to create a note")?;
    }
    let proposal = propose(&store, &cli.title, Some(&cli.folder))
        .with_context(|| format!("while proposing a name in '{}'", cli.folder))?;
    info!("proposed '{proposal}' in vault '{}'", vault.display());

    if cli.create {
        let created = create_note(&vault, &cli.folder, &proposal, &extension, &cli.title)
            .context("while creating the proposed note")?;
        println!("{created}");
    } else if cli.with_extension {
        println!("{}", proposal.file_name_with_extension(&extension));
    } else {
        println!("{proposal}");
    }
    Ok(())
}
