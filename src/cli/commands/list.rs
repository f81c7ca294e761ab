//! `credvault list` — display all credentials in a table.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;
use crate::vault::sort_by_website;

/// Execute the `list` command.
pub fn execute(cli: &Cli, sort: bool) -> Result<()> {
    let (_settings, vault) = open_vault(cli)?;

    let mut entries = vault.list()?;
    if sort {
        sort_by_website(&mut entries);
    }

    output::info(&format!("{} credential(s)", entries.len()));
    output::print_entries_table(&entries);

    Ok(())
}
