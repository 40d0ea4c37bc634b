use crate::core::ShapeError;
use crate::models::{Artist, ArtistRef, Artwork, ArtworkEntry, Fetched};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the art catalog
///
/// A non-200 answer is not an error here: it comes back as
/// [`Fetched::Upstream`] so pages can fall back instead of failing.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(#[from] ShapeError),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::InvalidResponse(ShapeError::InvalidDocument(e.to_string()))
    }
}

pub type CatalogResult<T> = Result<Fetched<T>, CatalogError>;

/// Read-only queries the pages run against the art catalog
#[async_trait]
pub trait ArtCatalog: Send + Sync {
    /// Every artist in the default collection
    async fn list_artists(&self) -> CatalogResult<Vec<Artist>>;

    /// Artworks, each paired with the artist its link resolves to
    async fn list_artworks(&self) -> CatalogResult<Vec<ArtworkEntry>>;

    /// Follow an artwork's artist link
    ///
    /// `Ok(None)` exactly when the link answered with a non-200.
    async fn resolve_artist_from_link(&self, href: &str) -> Result<Option<ArtistRef>, CatalogError>;

    async fn list_artworks_by_artist(&self, artist_id: &str) -> CatalogResult<Vec<Artwork>>;

    async fn get_artist_detail(&self, artist_id: &str) -> CatalogResult<Artist>;

    async fn list_similar_artists(&self, artist_id: &str) -> CatalogResult<Vec<Artist>>;

    async fn list_similar_artworks(&self, artwork_id: &str) -> CatalogResult<Vec<ArtworkEntry>>;
}
