use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use realty_api::config::{CorsSettings, LoggingSettings, Settings};
use realty_api::routes::{self, handle_query_payload_error, AppState};
use realty_api::services::{MongoStore, PropertyStore};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.compact().init(),
    }
}

fn build_cors(settings: &CorsSettings) -> Cors {
    if settings.allowed_origins.is_empty() {
        return Cors::permissive();
    }

    settings
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::other(format!("Configuration error: {}", e)));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Realty API...");

    let store = MongoStore::connect(&settings.database)
        .await
        .map_err(|e| {
            error!("Failed to configure MongoDB client: {}", e);
            std::io::Error::other(format!("MongoDB configuration error: {}", e))
        })?;

    // The driver connects lazily; a failed ping only degrades /health
    match store.ping().await {
        Ok(()) => info!("MongoDB reachable"),
        Err(e) => warn!("MongoDB ping failed, continuing: {}", e),
    }

    let app_state = AppState::new(Arc::new(store));

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let cors_settings = settings.cors.clone();

    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(build_cors(&cors_settings))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
