//! `credvault update` — replace an entry's website, username, and secret.

use crate::cli::output;
use crate::cli::{open_vault, prompt_secret, Cli};
use crate::errors::Result;
use crate::vault::CredentialEntry;

/// Execute the `update` command.
pub fn execute(cli: &Cli, id: u64, website: &str, username: &str, secret: Option<&str>) -> Result<()> {
    let (_settings, mut vault) = open_vault(cli)?;

    let secret = match secret {
        Some(value) => value.to_string(),
        None => prompt_secret()?.to_string(),
    };

    match vault.update(id, CredentialEntry::new(website, username, secret))? {
        Some(updated) => {
            output::success(&format!("Updated credential {id} ({})", updated.website));
        }
        None => {
            output::warning(&format!("No credential with id {id} — nothing updated."));
        }
    }

    Ok(())
}
