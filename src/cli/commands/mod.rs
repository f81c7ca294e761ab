//! One module per subcommand; each exposes a single `execute` function.

pub mod add;
pub mod delete;
pub mod export;
pub mod generate;
pub mod get;
pub mod import_cmd;
pub mod list;
pub mod update;
