//! Per-test databases on one shared Postgres container.

use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

const USER: &str = "panggilin_test";
const PASSWORD: &str = "panggilin_test_password";

static CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases queued for `DROP DATABASE` once their `TestDb` goes away.
static DROP_QUEUE: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

/// Database names end up inside `CREATE DATABASE "..."`, so only plain
/// identifiers are let through.
fn validate_database_name(name: &str) -> Result<(), String> {
    if name.is_empty() || name.len() > 63 {
        return Err(format!("'{name}' must be 1-63 characters long"));
    }

    if !name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    {
        return Err(format!("'{name}' must start with a letter or underscore"));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("'{name}' may only contain letters, digits and underscores"));
    }

    Ok(())
}

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name(USER)
        .start()
        .await
        .expect("Postgres container should start")
}

async fn database_url(database: &str) -> String {
    let container = CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Postgres port should be mapped");

    let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
        .unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}")
}

async fn spawn_drop_worker() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if validate_database_name(&name).is_err() {
                continue;
            }

            let Ok(mut conn) = PgConnection::connect(&database_url("postgres").await).await else {
                continue;
            };

            let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
                .execute(&mut conn)
                .await;

            let _ = conn.close().await;
        }
    });

    sender
}

/// A freshly migrated database owned by a single test.
///
/// Services commit normally; isolation comes from every test getting its own
/// database, which is dropped in the background when this value is dropped.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROP_QUEUE.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be past the epoch")
            .as_nanos();

        let thread = format!("{:?}", std::thread::current().id())
            .replace(|c: char| !c.is_ascii_alphanumeric(), "");

        let name = format!("panggilin_test_{nanos}_{thread}");

        validate_database_name(&name).expect("generated database name should be valid");

        DROP_QUEUE.get_or_init(spawn_drop_worker).await;

        let mut admin = PgConnection::connect(&database_url("postgres").await)
            .await
            .expect("maintenance database should accept connections");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("test database should be created");

        admin
            .close()
            .await
            .expect("maintenance connection should close");

        let pool = PgPool::connect(&database_url(&name).await)
            .await
            .expect("test database should accept connections");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("migrations should apply");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers_are_valid_names() {
        assert!(validate_database_name("panggilin_test_1").is_ok());
        assert!(validate_database_name("_scratch").is_ok());
    }

    #[test]
    fn unsafe_names_are_rejected() {
        assert!(validate_database_name("").is_err());
        assert!(validate_database_name(&"a".repeat(64)).is_err());
        assert!(validate_database_name("1st").is_err());
        assert!(validate_database_name("bad\"name").is_err());
        assert!(validate_database_name("drop; table").is_err());
    }

    #[tokio::test]
    async fn migrated_database_is_usable() {
        let db = TestDb::new().await;

        let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer_accounts")
            .fetch_one(db.pool())
            .await
            .expect("customer_accounts should exist after migrations");

        assert_eq!(customers, 0);
    }
}
