use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Responder};
use askama::Template;
use std::sync::Arc;
use validator::Validate;

use crate::models::{ArtistQuery, Fetched, HealthResponse, SimilarArtistsQuery, SimilarArtworksQuery};
use crate::routes::error::PageError;
use crate::services::ArtCatalog;
use crate::views::{ArtistTemplate, IndexTemplate, SimilarArtistsTemplate, SimilarArtworksTemplate};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn ArtCatalog>,
}

/// Configure all page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/artist", web::get().to(artist))
        .route("/similar", web::get().to(similar_artists))
        .route("/similar_artworks", web::get().to(similar_artworks))
        .route("/health", web::get().to(health_check));
}

fn html<T: Template>(template: T) -> Result<HttpResponse, PageError> {
    let body = template.render()?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

fn validate<T: Validate>(query: &T) -> Result<(), PageError> {
    query
        .validate()
        .map_err(|errors| PageError::BadRequest(errors.to_string()))
}

fn log_fallback<T>(route: &str, fetched: &Fetched<T>) {
    match fetched.upstream_status() {
        Some(status) => tracing::warn!("{}: Artsy answered {}, showing home listing", route, status),
        None => tracing::info!("{}: nothing found, showing home listing", route),
    }
}

/// The home listing, also the fallback of every other page
async fn render_home(catalog: &dyn ArtCatalog) -> Result<HttpResponse, PageError> {
    let fetched = catalog.list_artworks().await?;

    if let Some(status) = fetched.upstream_status() {
        tracing::warn!("Home listing unavailable: Artsy answered {}", status);
    }

    let entries = fetched.items();
    tracing::debug!("Rendering home with {} artworks", entries.len());

    html(IndexTemplate::new(&entries))
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /
async fn index(state: web::Data<AppState>) -> Result<HttpResponse, PageError> {
    render_home(state.catalog.as_ref()).await
}

/// GET /artist?artist_id={id}
///
/// Falls back to the home listing when the artist has no artworks.
async fn artist(
    state: web::Data<AppState>,
    query: web::Query<ArtistQuery>,
) -> Result<HttpResponse, PageError> {
    validate(&*query)?;
    let artist_id = query.artist_id.as_str();

    tracing::info!("Artist page for {}", artist_id);

    let artworks = match state.catalog.list_artworks_by_artist(artist_id).await? {
        Fetched::Found(artworks) => artworks,
        other => {
            log_fallback("/artist", &other);
            return render_home(state.catalog.as_ref()).await;
        }
    };

    let detail = state.catalog.get_artist_detail(artist_id).await?;
    if let Some(status) = detail.upstream_status() {
        tracing::warn!("Detail for artist {} unavailable: Artsy answered {}", artist_id, status);
    }

    html(ArtistTemplate::new(artist_id, detail.found().as_ref(), &artworks))
}

/// GET /similar?artist_id={id}&artist_name={name}
async fn similar_artists(
    state: web::Data<AppState>,
    query: web::Query<SimilarArtistsQuery>,
) -> Result<HttpResponse, PageError> {
    validate(&*query)?;

    tracing::info!("Similar artists for {}", query.artist_id);

    match state.catalog.list_similar_artists(&query.artist_id).await? {
        Fetched::Found(artists) => html(SimilarArtistsTemplate::new(query.artist_name.as_deref(), &artists)),
        other => {
            log_fallback("/similar", &other);
            render_home(state.catalog.as_ref()).await
        }
    }
}

/// GET /similar_artworks?artwork_id={id}&artist_name={name}&artwork_name={title}
async fn similar_artworks(
    state: web::Data<AppState>,
    query: web::Query<SimilarArtworksQuery>,
) -> Result<HttpResponse, PageError> {
    validate(&*query)?;

    tracing::info!("Similar artworks for {}", query.artwork_id);

    match state.catalog.list_similar_artworks(&query.artwork_id).await? {
        Fetched::Found(entries) => html(SimilarArtworksTemplate::new(
            query.artist_name.as_deref(),
            query.artwork_name.as_deref(),
            &entries,
        )),
        other => {
            log_fallback("/similar_artworks", &other);
            render_home(state.catalog.as_ref()).await
        }
    }
}
