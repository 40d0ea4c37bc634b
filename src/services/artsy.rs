use crate::core;
use crate::models::{Artist, ArtistRef, Artwork, ArtworkEntry, Fetched};
use crate::services::catalog::{ArtCatalog, CatalogError, CatalogResult};
use crate::services::token::TokenProvider;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Default public API root
pub const DEFAULT_BASE_URL: &str = "https://api.artsy.net/api/";

/// Header carrying the application token
pub const TOKEN_HEADER: &str = "X-Xapp-Token";

/// Artsy API client
///
/// Every call carries the token acquired at startup. Only a 200 counts as
/// an answer; anything else comes back as [`Fetched::Upstream`].
pub struct ArtsyClient {
    base_url: String,
    client: Client,
    token: Arc<TokenProvider>,
}

impl ArtsyClient {
    /// Create a new Artsy client around an acquired token
    pub fn new(base_url: String, client: Client, token: Arc<TokenProvider>) -> Self {
        Self {
            base_url,
            client,
            token,
        }
    }

    /// Build the shared HTTP client with the configured timeout
    pub fn http_client(timeout: Duration) -> Result<Client, CatalogError> {
        Ok(Client::builder().timeout(timeout).build()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// GET a URL with the token attached and decode a 200 body as JSON
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> CatalogResult<Value> {
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, self.token.token())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Artsy answered {} for {}", status, url);
            return Ok(Fetched::Upstream(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(Fetched::Found(serde_json::from_str(&body)?))
    }

    /// GET an `_embedded` collection and deserialize its items
    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        query: &[(&str, &str)],
    ) -> CatalogResult<Vec<T>> {
        let url = self.endpoint(path);
        let body = match self.get_json(&url, query).await? {
            Fetched::Found(body) => body,
            Fetched::Empty => return Ok(Fetched::Empty),
            Fetched::Upstream(status) => return Ok(Fetched::Upstream(status)),
        };

        let items: Vec<T> = core::embedded(&body, key)?;

        tracing::debug!("Fetched {} {} from {}", items.len(), key, url);

        Ok(Fetched::from_items(items))
    }

    /// Resolve the artist of each artwork, one link at a time, in order
    async fn with_artists(&self, artworks: Vec<Artwork>) -> Result<Vec<ArtworkEntry>, CatalogError> {
        let mut entries = Vec::with_capacity(artworks.len());

        for artwork in artworks {
            let artist = match artwork.artists_href() {
                Some(href) => match self.resolve_artist_from_link(href).await {
                    Ok(artist) => artist,
                    Err(CatalogError::InvalidResponse(e)) => {
                        tracing::warn!("Could not read artist of artwork {}: {}", artwork.id, e);
                        None
                    }
                    Err(e) => return Err(e),
                },
                None => {
                    tracing::warn!("Artwork {} has no artists link", artwork.id);
                    None
                }
            };

            entries.push(ArtworkEntry { artwork, artist });
        }

        Ok(entries)
    }

    async fn artworks_with_artists(&self, path: &str, query: &[(&str, &str)]) -> CatalogResult<Vec<ArtworkEntry>> {
        match self.fetch_collection::<Artwork>(path, "artworks", query).await? {
            Fetched::Found(artworks) => Ok(Fetched::Found(self.with_artists(artworks).await?)),
            Fetched::Empty => Ok(Fetched::Empty),
            Fetched::Upstream(status) => Ok(Fetched::Upstream(status)),
        }
    }
}

#[async_trait]
impl ArtCatalog for ArtsyClient {
    async fn list_artists(&self) -> CatalogResult<Vec<Artist>> {
        self.fetch_collection("artists", "artists", &[]).await
    }

    async fn list_artworks(&self) -> CatalogResult<Vec<ArtworkEntry>> {
        self.artworks_with_artists("artworks", &[]).await
    }

    async fn resolve_artist_from_link(&self, href: &str) -> Result<Option<ArtistRef>, CatalogError> {
        match self.get_json(href, &[]).await? {
            Fetched::Found(body) => Ok(Some(core::first_artist(&body)?)),
            Fetched::Empty | Fetched::Upstream(_) => Ok(None),
        }
    }

    async fn list_artworks_by_artist(&self, artist_id: &str) -> CatalogResult<Vec<Artwork>> {
        self.fetch_collection("artworks", "artworks", &[("artist_id", artist_id)])
            .await
    }

    async fn get_artist_detail(&self, artist_id: &str) -> CatalogResult<Artist> {
        let url = self.endpoint(&format!("artists/{}", urlencoding::encode(artist_id)));

        match self.get_json(&url, &[]).await? {
            Fetched::Found(body) => {
                let artist: Artist = core::document(body)?;
                Ok(Fetched::Found(artist))
            }
            Fetched::Empty => Ok(Fetched::Empty),
            Fetched::Upstream(status) => Ok(Fetched::Upstream(status)),
        }
    }

    async fn list_similar_artists(&self, artist_id: &str) -> CatalogResult<Vec<Artist>> {
        // The filter travels only as a query parameter on the collection root.
        self.fetch_collection("artists/", "artists", &[("similar_to_artist_id", artist_id)])
            .await
    }

    async fn list_similar_artworks(&self, artwork_id: &str) -> CatalogResult<Vec<ArtworkEntry>> {
        self.artworks_with_artists("artworks/", &[("similar_to_artwork_id", artwork_id)])
            .await
    }
}
