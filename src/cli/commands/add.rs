//! `credvault add` — store a new credential.

use crate::cli::output;
use crate::cli::{open_vault, prompt_secret, Cli};
use crate::errors::Result;
use crate::vault::CredentialEntry;

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    website: &str,
    username: &str,
    secret: Option<&str>,
    generate: bool,
) -> Result<()> {
    let (_settings, mut vault) = open_vault(cli)?;

    // Resolve the secret: flag value, generated, or interactive prompt.
    let secret = match secret {
        Some(value) => value.to_string(),
        None if generate => {
            let generated = vault.generate_secret()?;
            output::info(&format!("Generated secret: {generated}"));
            generated
        }
        None => prompt_secret()?.to_string(),
    };

    let created = vault.create(CredentialEntry::new(website, username, secret))?;

    output::success(&format!(
        "Stored credential for {} (id {})",
        created.website,
        created.id.unwrap_or_default()
    ));

    Ok(())
}
