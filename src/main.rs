use actix_web::{middleware, web, App, HttpServer};
use artsy_gallery::config::Settings;
use artsy_gallery::routes::{self, handle_query_payload_error, AppState};
use artsy_gallery::services::{ArtCatalog, ArtsyClient, TokenProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Settings are read first so the config file can set the log level
    let settings = Settings::load();
    let (config_level, config_format) = match &settings {
        Ok(s) => (s.logging.level.clone(), s.logging.format.clone()),
        Err(_) => ("info".to_string(), "compact".to_string()),
    };

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or(config_level);
    let log_format = std::env::var("LOG_FORMAT").unwrap_or(config_format);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Artsy gallery...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    let timeout = Duration::from_secs(settings.artsy.timeout_secs.unwrap_or(30));
    let http = ArtsyClient::http_client(timeout).map_err(|e| {
        error!("Failed to build HTTP client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    // The token is acquired once; the process does not start without it
    let token = TokenProvider::acquire(
        &http,
        &settings.artsy.base_url,
        &settings.artsy.client_id,
        &settings.artsy.client_secret,
    )
    .await
    .map_err(|e| {
        error!("Failed to acquire Artsy token: {}", e);
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, e)
    })?;

    match token.expires_at() {
        Some(expires_at) => info!("Artsy token acquired (expires {})", expires_at),
        None => info!("Artsy token acquired"),
    }

    let catalog: Arc<dyn ArtCatalog> = Arc::new(ArtsyClient::new(
        settings.artsy.base_url.clone(),
        http,
        Arc::new(token),
    ));

    let app_state = AppState { catalog };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
