//! Askama Templates
//!
//! Template structs and the view models they display. Hrefs are built here
//! so the templates only interpolate.

use askama::Template;

use crate::models::{Artist, ArtistRef, Artwork, ArtworkEntry};

pub const SITE_TITLE: &str = "Artsy Gallery";

/// `/artist?artist_id=…`
pub fn artist_href(artist_id: &str) -> String {
    format!("/artist?artist_id={}", urlencoding::encode(artist_id))
}

/// `/similar?artist_id=…&artist_name=…`
pub fn similar_artists_href(artist_id: &str, artist_name: &str) -> String {
    format!(
        "/similar?artist_id={}&artist_name={}",
        urlencoding::encode(artist_id),
        urlencoding::encode(artist_name)
    )
}

/// `/similar_artworks?artwork_id=…&artist_name=…&artwork_name=…`
pub fn similar_artworks_href(artwork_id: &str, artist_name: &str, artwork_name: &str) -> String {
    format!(
        "/similar_artworks?artwork_id={}&artist_name={}&artwork_name={}",
        urlencoding::encode(artwork_id),
        urlencoding::encode(artist_name),
        urlencoding::encode(artwork_name)
    )
}

/// Artist byline under an artwork
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistByline {
    pub name: String,
    pub href: String,
    pub similar_href: String,
}

impl From<&ArtistRef> for ArtistByline {
    fn from(artist: &ArtistRef) -> Self {
        Self {
            name: artist.name.clone(),
            href: artist_href(&artist.id),
            similar_href: similar_artists_href(&artist.id, &artist.name),
        }
    }
}

/// One artwork tile
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkCard {
    pub title: String,
    pub date: String,
    pub medium: String,
    pub thumbnail: Option<String>,
    pub artist: Option<ArtistByline>,
    pub similar_href: String,
}

impl ArtworkCard {
    pub fn new(artwork: &Artwork, artist: Option<&ArtistRef>) -> Self {
        let artist_name = artist.map(|a| a.name.as_str()).unwrap_or_default();

        Self {
            title: artwork.title.clone(),
            date: artwork.date.clone().unwrap_or_default(),
            medium: artwork.medium.clone().unwrap_or_default(),
            thumbnail: artwork.thumbnail().map(str::to_string),
            artist: artist.map(ArtistByline::from),
            similar_href: similar_artworks_href(&artwork.id, artist_name, &artwork.title),
        }
    }
}

impl From<&ArtworkEntry> for ArtworkCard {
    fn from(entry: &ArtworkEntry) -> Self {
        Self::new(&entry.artwork, entry.artist.as_ref())
    }
}

/// One artist tile on the similar-artists page
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistCard {
    pub name: String,
    pub nationality: String,
    pub thumbnail: Option<String>,
    pub href: String,
    pub similar_href: String,
}

impl From<&Artist> for ArtistCard {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            nationality: artist.nationality.clone().unwrap_or_default(),
            thumbnail: artist.thumbnail().map(str::to_string),
            href: artist_href(&artist.id),
            similar_href: similar_artists_href(&artist.id, &artist.name),
        }
    }
}

/// Heading block of the artist page
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistProfile {
    pub name: String,
    pub nationality: String,
    pub lifespan: String,
    pub hometown: String,
    pub biography: String,
    pub thumbnail: Option<String>,
    pub similar_href: String,
}

impl ArtistProfile {
    /// Profile for an artist whose detail document could not be fetched
    pub fn unknown(artist_id: &str) -> Self {
        Self {
            name: artist_id.to_string(),
            nationality: String::new(),
            lifespan: String::new(),
            hometown: String::new(),
            biography: String::new(),
            thumbnail: None,
            similar_href: similar_artists_href(artist_id, ""),
        }
    }
}

impl From<&Artist> for ArtistProfile {
    fn from(artist: &Artist) -> Self {
        let born = artist.birthday.as_deref().unwrap_or_default();
        let died = artist.deathday.as_deref().unwrap_or_default();
        let lifespan = match (born.is_empty(), died.is_empty()) {
            (true, true) => String::new(),
            (false, true) => format!("b. {}", born),
            (true, false) => format!("d. {}", died),
            (false, false) => format!("{} – {}", born, died),
        };

        Self {
            name: artist.name.clone(),
            nationality: artist.nationality.clone().unwrap_or_default(),
            lifespan,
            hometown: artist.hometown.clone().unwrap_or_default(),
            biography: artist.biography.clone().unwrap_or_default(),
            thumbnail: artist.thumbnail().map(str::to_string),
            similar_href: similar_artists_href(&artist.id, &artist.name),
        }
    }
}

/// Home page: artworks with their artists.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub cards: Vec<ArtworkCard>,
}

impl IndexTemplate {
    pub fn new(entries: &[ArtworkEntry]) -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            cards: entries.iter().map(ArtworkCard::from).collect(),
        }
    }
}

/// Artworks of one artist.
#[derive(Template)]
#[template(path = "artist.html")]
pub struct ArtistTemplate {
    pub title: String,
    pub artist: ArtistProfile,
    pub cards: Vec<ArtworkCard>,
}

impl ArtistTemplate {
    pub fn new(artist_id: &str, artist: Option<&Artist>, artworks: &[Artwork]) -> Self {
        let byline = artist.map(|a| ArtistRef::new(a.id.clone(), a.name.clone()));
        let profile = artist
            .map(ArtistProfile::from)
            .unwrap_or_else(|| ArtistProfile::unknown(artist_id));

        Self {
            title: format!("{} | {}", profile.name, SITE_TITLE),
            cards: artworks
                .iter()
                .map(|artwork| ArtworkCard::new(artwork, byline.as_ref()))
                .collect(),
            artist: profile,
        }
    }
}

/// Artists similar to a given one.
#[derive(Template)]
#[template(path = "similar.html")]
pub struct SimilarArtistsTemplate {
    pub title: String,
    pub name: String,
    pub artists: Vec<ArtistCard>,
}

impl SimilarArtistsTemplate {
    pub fn new(name: Option<&str>, artists: &[Artist]) -> Self {
        let name = name.unwrap_or_default().to_string();
        Self {
            title: format!("Similar to {} | {}", name, SITE_TITLE),
            name,
            artists: artists.iter().map(ArtistCard::from).collect(),
        }
    }
}

/// Artworks similar to a given one.
#[derive(Template)]
#[template(path = "similar_artworks.html")]
pub struct SimilarArtworksTemplate {
    pub title: String,
    pub artist_name: String,
    pub artwork_name: String,
    pub cards: Vec<ArtworkCard>,
}

impl SimilarArtworksTemplate {
    pub fn new(artist_name: Option<&str>, artwork_name: Option<&str>, entries: &[ArtworkEntry]) -> Self {
        let artwork_name = artwork_name.unwrap_or_default().to_string();
        Self {
            title: format!("Similar to {} | {}", artwork_name, SITE_TITLE),
            artist_name: artist_name.unwrap_or_default().to_string(),
            artwork_name,
            cards: entries.iter().map(ArtworkCard::from).collect(),
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub status: u16,
    pub message: String,
}

impl ErrorTemplate {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            title: format!("Error {} | {}", status, SITE_TITLE),
            status,
            message: message.into(),
        }
    }
}
