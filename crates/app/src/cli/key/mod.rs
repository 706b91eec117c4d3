use clap::{Args, Subcommand};
use panggilin_app::auth::SigningKey;

#[derive(Debug, Args)]
pub(crate) struct KeyCommand {
    #[command(subcommand)]
    command: KeySubcommand,
}

#[derive(Debug, Subcommand)]
enum KeySubcommand {
    /// Print a fresh base64 session signing key for `SESSION_SIGNING_KEY`
    Generate,
}

pub(crate) fn run(command: &KeyCommand) -> Result<(), String> {
    match command.command {
        KeySubcommand::Generate => {
            println!("{}", SigningKey::generate().to_base64());

            Ok(())
        }
    }
}
