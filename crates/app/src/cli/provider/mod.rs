use clap::{Args, Subcommand};

mod activate;
mod create;

#[derive(Debug, Args)]
pub(crate) struct ProviderCommand {
    #[command(subcommand)]
    command: ProviderSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProviderSubcommand {
    /// Register a provider account with a password
    Create(create::CreateProviderArgs),

    /// Mark a provider as taking orders, or not
    Activate(activate::ActivateProviderArgs),
}

pub(crate) async fn run(command: ProviderCommand) -> Result<(), String> {
    match command.command {
        ProviderSubcommand::Create(args) => create::run(args).await,
        ProviderSubcommand::Activate(args) => activate::run(args).await,
    }
}
