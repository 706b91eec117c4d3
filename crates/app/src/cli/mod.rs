//! Operator commands run outside the API server.
#![expect(clippy::print_stdout, reason = "commands report their results on stdout")]

use clap::{Parser, Subcommand};

mod db;
mod key;
mod provider;

#[derive(Debug, Parser)]
#[command(name = "panggilin-app", about = "Panggilin operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Provider(provider::ProviderCommand),
    Key(key::KeyCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Provider(command) => provider::run(command).await,
            Commands::Key(command) => key::run(&command),
            Commands::Db(command) => db::run(command).await,
        }
    }
}
