//! `credvault import` — bulk-load credentials from an interchange file.
//!
//! Every imported entry is created as new (fresh id, fresh ciphertext);
//! ids inside the file are ignored.  A missing source file is not an
//! error — the vault is simply returned unchanged.

use std::path::Path;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;
use crate::exchange::ExchangeFormat;

/// Execute the `import` command.
pub fn execute(cli: &Cli, name: &str, format: Option<&str>) -> Result<()> {
    let format = match format {
        Some(f) => f.parse()?,
        None => detect_format(name),
    };

    let (_settings, mut vault) = open_vault(cli)?;

    let before = vault.list()?.len();
    let all = vault.import_from(format, name)?;
    let imported = all.len() - before;

    if imported == 0 {
        output::warning(&format!("No credentials found in {name}."));
    } else {
        output::success(&format!(
            "Imported {imported} credential(s) from {name} — vault now holds {}",
            all.len()
        ));
    }

    Ok(())
}

/// Detect the interchange format from the file extension.
fn detect_format(name: &str) -> ExchangeFormat {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some("xml") => ExchangeFormat::Xml,
        _ => ExchangeFormat::Json, // Default to JSON.
    }
}
