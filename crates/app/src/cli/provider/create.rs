use clap::Args;
use panggilin_app::{
    database::{self, Db},
    domain::accounts::{AccountsService, PgAccountsService, models::NewProvider},
};

#[derive(Debug, Args)]
pub(crate) struct CreateProviderArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Login email
    #[arg(long)]
    email: String,

    /// Login password
    #[arg(long, env = "PROVIDER_PASSWORD", hide_env_values = true)]
    password: String,

    /// Business name shown to customers
    #[arg(long)]
    full_name: String,

    #[arg(long)]
    phone_number: Option<String>,

    #[arg(long)]
    address: Option<String>,

    /// Furthest distance the provider travels, in kilometres
    #[arg(long, default_value_t = 10)]
    max_distance_km: i64,

    /// Start taking orders immediately
    #[arg(long)]
    active: bool,
}

pub(crate) async fn run(args: CreateProviderArgs) -> Result<(), String> {
    if args.password.trim().is_empty() {
        return Err("password cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let accounts = PgAccountsService::new(Db::new(pool));

    let mut provider = accounts
        .create_provider(NewProvider {
            email: args.email,
            password: args.password,
            full_name: args.full_name,
            phone_number: args.phone_number,
            address: args.address,
            max_distance_km: args.max_distance_km,
        })
        .await
        .map_err(|error| format!("failed to create provider: {error}"))?;

    if args.active {
        provider = accounts
            .set_provider_active(provider.id, true)
            .await
            .map_err(|error| format!("failed to activate provider: {error}"))?;
    }

    println!("provider_id: {}", provider.id);
    println!("email: {}", provider.email);
    println!("active: {}", provider.is_active);

    Ok(())
}
