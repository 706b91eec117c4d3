//! Panggilin JSON API Server

use std::process;

use panggilin_app::{
    auth::TokenError,
    context::{AppContext, AppInitError},
    messages::MessagesError,
};
use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use thiserror::Error;
use tracing::{error, info};

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod accounts;
mod auth;
mod catcher;
mod config;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod orders;
mod ratings;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

#[derive(Debug, Error)]
enum StartupError {
    #[error("invalid session signing key")]
    SigningKey(#[from] TokenError),

    #[error("failed to load message catalog")]
    Messages(#[from] MessagesError),

    #[error("failed to initialize app context")]
    App(#[from] AppInitError),
}

async fn build_app(config: &ServerConfig) -> Result<AppContext, StartupError> {
    let sessions = config.auth.session_settings()?;
    let messages = config.notifications.messages()?;

    let app = AppContext::from_database_url(
        &config.database.database_url,
        config.database.pool_settings(),
        sessions,
        config.notifications.push_settings(),
        messages,
    )
    .await?;

    Ok(app)
}

/// Panggilin JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so tracing output would be lost"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let app = match build_app(&config).await {
        Ok(app) => app,
        Err(startup_error) => {
            error!(error = ?startup_error, "failed to start: {startup_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!(base_path = %config.server.base_path, "Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let errors = app.messages.errors.clone();

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .hoop(observability::request_logging)
        .push(router::app_router(&config.server.base_path));

    let doc = OpenApi::new("Panggilin API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let service = Service::new(router).catcher(catcher::error_catcher(errors));

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = config.server.shutdown_grace();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service).await;
}
