//! `credvault generate` — print a fresh random secret.
//!
//! Does not touch the vault, so no passphrase is required.

use std::path::Path;

use crate::cli::Cli;
use crate::config::Settings;
use crate::errors::Result;
use crate::generator::SecretGenerator;

/// Execute the `generate` command.
pub fn execute(cli: &Cli, length: Option<usize>) -> Result<()> {
    let settings = Settings::load(Path::new(&cli.project_dir))?;
    let length = length.unwrap_or(settings.default_secret_length);

    let secret = SecretGenerator::new().generate(length)?;

    // Raw value on stdout so it can be piped.
    println!("{secret}");

    Ok(())
}
