use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of `GET /artist`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ArtistQuery {
    #[validate(length(min = 1))]
    pub artist_id: String,
}

/// Query string of `GET /similar`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimilarArtistsQuery {
    #[validate(length(min = 1))]
    pub artist_id: String,
    #[serde(default)]
    pub artist_name: Option<String>,
}

/// Query string of `GET /similar_artworks`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimilarArtworksQuery {
    #[validate(length(min = 1))]
    pub artwork_id: String,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub artwork_name: Option<String>,
}
