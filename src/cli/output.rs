//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::CredentialEntry;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of credentials (Id, Website, Username, Secret).
///
/// Secrets arrive here already decrypted; this is a local vault tool
/// and `list` is its read surface.
pub fn print_entries_table(entries: &[CredentialEntry]) {
    if entries.is_empty() {
        info("No credentials in the vault yet.");
        tip("Run `credvault add <website> <username>` to add your first entry.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Website", "Username", "Secret"]);

    for entry in entries {
        table.add_row(vec![
            entry.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            entry.website.clone(),
            entry.username.clone(),
            entry.secret.clone(),
        ]);
    }

    println!("{table}");
}
