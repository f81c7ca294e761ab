//! `credvault get` — show a single credential by id.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(cli: &Cli, id: u64) -> Result<()> {
    let (_settings, vault) = open_vault(cli)?;

    match vault.get(id)? {
        Some(entry) => {
            println!("website:  {}", entry.website);
            println!("username: {}", entry.username);
            println!("secret:   {}", entry.secret);
        }
        None => {
            output::warning(&format!("No credential with id {id}."));
        }
    }

    Ok(())
}
