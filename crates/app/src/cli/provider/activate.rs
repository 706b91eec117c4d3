use clap::Args;
use panggilin_app::{
    database::{self, Db},
    domain::accounts::{AccountsService, PgAccountsService, models::ProviderId},
};

#[derive(Debug, Args)]
pub(crate) struct ActivateProviderArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long)]
    provider_id: i64,

    /// Take the provider off the marketplace instead
    #[arg(long)]
    deactivate: bool,
}

pub(crate) async fn run(args: ActivateProviderArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let provider = PgAccountsService::new(Db::new(pool))
        .set_provider_active(ProviderId::from_i64(args.provider_id), !args.deactivate)
        .await
        .map_err(|error| format!("failed to update provider: {error}"))?;

    println!("provider_id: {}", provider.id);
    println!("active: {}", provider.is_active);

    Ok(())
}
