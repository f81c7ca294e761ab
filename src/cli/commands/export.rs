//! `credvault export` — write the whole vault to an interchange file.
//!
//! Supported formats:
//! - `json` (default): flat array of records
//! - `xml`: `<credentials>` wrapper with one `<entry>` per record
//!
//! Exported files contain **plaintext** secrets; they are an exchange
//! format, not at-rest storage.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;
use crate::exchange::ExchangeFormat;

/// Execute the `export` command.
pub fn execute(cli: &Cli, format: &str, name: Option<&str>) -> Result<()> {
    let format: ExchangeFormat = format.parse()?;
    let name = name
        .map(str::to_string)
        .unwrap_or_else(|| format!("credentials.{}", format.extension()));

    let (_settings, vault) = open_vault(cli)?;

    let count = vault.list()?.len();
    vault.export_to(format, &name)?;

    output::success(&format!("Exported {count} credential(s) to {name} (format: {format})"));
    output::warning("Exported files contain plaintext secrets — handle with care.");

    Ok(())
}
