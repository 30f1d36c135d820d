use crate::catalog::JsonFileCatalog;
use crate::config::Config;
use crate::engine::{CatalogEngine, EngineConfig};
use crate::oracle::YahooQuoteOracle;
use crate::router::{respond, AppState};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod domain;
mod engine;
mod errors;
mod oracle;
mod responses;
mod router;


fn main() {
    // Optional local overrides; real environment variables win.
    dotenvy::from_filename("config.env").ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gold_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let oracle = match YahooQuoteOracle::new(config.oracle.clone()) {
        Ok(o) => o,
        Err(e) => {
            tracing::error!("Price oracle init failed: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState {
        engine: CatalogEngine::new(EngineConfig {
            catalog: Box::new(JsonFileCatalog::new(&config.catalog_path)),
            oracle: Box::new(oracle),
        }),
        cors_origin: config.cors_origin.clone(),
    };

    tracing::info!(
        addr = %config.bind_addr,
        catalog = %config.catalog_path.display(),
        quote_url = %config.oracle.quote_url,
        "starting server"
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| respond(req, &state));

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
