//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::Path;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::SecretCodec;
use crate::errors::{Result, VaultError};
use crate::exchange::ExchangeCodec;
use crate::store::FileStore;
use crate::vault::Vault;

/// CredVault CLI: website credential vault with secrets encrypted at rest.
#[derive(Parser)]
#[command(
    name = "credvault",
    about = "Website credential vault with secrets encrypted at rest",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory holding .credvault.toml and the data directory
    #[arg(long, default_value = ".", global = true)]
    pub project_dir: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// List all credentials
    List {
        /// Sort alphabetically by website
        #[arg(short, long)]
        sort: bool,
    },

    /// Show one credential by id
    Get {
        /// Entry id
        id: u64,
    },

    /// Add a credential
    Add {
        /// Website, e.g. github.com
        website: String,
        /// Login name for the site
        username: String,
        /// Secret value (omit for interactive prompt)
        #[arg(short, long)]
        secret: Option<String>,
        /// Generate a random secret instead of supplying one
        #[arg(short, long, conflicts_with = "secret")]
        generate: bool,
    },

    /// Replace website, username, and secret of an entry
    Update {
        /// Entry id
        id: u64,
        /// New website
        website: String,
        /// New username
        username: String,
        /// New secret value (omit for interactive prompt)
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Delete a credential by id
    Delete {
        /// Entry id
        id: u64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a random secret and print it
    Generate {
        /// Secret length (default: from config, normally 16)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Export all credentials to an interchange file
    Export {
        /// Output format: json or xml
        #[arg(short, long, default_value = "json")]
        format: String,
        /// File name inside the data directory (default: credentials.<format>)
        name: Option<String>,
    },

    /// Import credentials from an interchange file
    Import {
        /// File name inside the data directory
        name: String,
        /// Import format: json or xml (auto-detected from extension)
        #[arg(short, long)]
        format: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the vault passphrase, trying in order:
/// 1. `CREDVAULT_PASSPHRASE` env var (CI/scripting)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("CREDVAULT_PASSPHRASE") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter vault passphrase")
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a secret value when none was given on the command line.
///
/// Returns `Zeroizing<String>` so the value is wiped from memory on drop.
pub fn prompt_secret() -> Result<Zeroizing<String>> {
    let value = dialoguer::Password::new()
        .with_prompt("Enter secret value")
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("secret prompt: {e}")))?;
    Ok(Zeroizing::new(value))
}

/// Load settings and open the vault over the file-backed store.
pub fn open_vault(cli: &Cli) -> Result<(Settings, Vault<FileStore>)> {
    let project_dir = Path::new(&cli.project_dir);
    let settings = Settings::load(project_dir)?;

    let passphrase = prompt_passphrase()?;
    let codec = SecretCodec::new(&passphrase);

    let store = FileStore::open(&settings.store_path(project_dir))?;
    let exchange = ExchangeCodec::new(settings.data_dir_path(project_dir));

    Ok((settings, Vault::new(store, codec, exchange)))
}
