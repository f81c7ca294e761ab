use clap::Parser;
use credvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { sort } => credvault::cli::commands::list::execute(&cli, sort),
        Commands::Get { id } => credvault::cli::commands::get::execute(&cli, id),
        Commands::Add {
            ref website,
            ref username,
            ref secret,
            generate,
        } => credvault::cli::commands::add::execute(
            &cli,
            website,
            username,
            secret.as_deref(),
            generate,
        ),
        Commands::Update {
            id,
            ref website,
            ref username,
            ref secret,
        } => credvault::cli::commands::update::execute(
            &cli,
            id,
            website,
            username,
            secret.as_deref(),
        ),
        Commands::Delete { id, force } => {
            credvault::cli::commands::delete::execute(&cli, id, force)
        }
        Commands::Generate { length } => {
            credvault::cli::commands::generate::execute(&cli, length)
        }
        Commands::Export {
            ref format,
            ref name,
        } => credvault::cli::commands::export::execute(&cli, format, name.as_deref()),
        Commands::Import {
            ref name,
            ref format,
        } => credvault::cli::commands::import_cmd::execute(&cli, name, format.as_deref()),
    };

    if let Err(e) = result {
        credvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
