use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// Project-level configuration, loaded from `.credvault.toml`.
///
/// Every field has a sensible default so CredVault works out-of-the-box
/// without any config file at all.  The passphrase itself is never part
/// of the config file — it arrives via `CREDVAULT_PASSPHRASE` or an
/// interactive prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the project root) where interchange files
    /// are read and written.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// File name of the persisted records store, inside `data_dir`.
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Length used by the `generate` command when no `--length` is given.
    #[serde(default = "default_secret_length")]
    pub default_secret_length: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_store_file() -> String {
    "vault.json".to_string()
}

fn default_secret_length() -> usize {
    16
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            store_file: default_store_file(),
            default_secret_length: default_secret_length(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".credvault.toml";

    /// Load settings from `<project_dir>/.credvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Full path of the data directory.
    pub fn data_dir_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.data_dir)
    }

    /// Full path of the records store file.
    ///
    /// Example: `project_dir/data/vault.json`
    pub fn store_path(&self, project_dir: &Path) -> PathBuf {
        self.data_dir_path(project_dir).join(&self.store_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
