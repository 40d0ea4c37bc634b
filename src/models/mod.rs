// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Artist, ArtistLinks, ArtistRef, Artwork, ArtworkEntry, ArtworkLinks, Fetched, Link};
pub use requests::{ArtistQuery, SimilarArtistsQuery, SimilarArtworksQuery};
pub use responses::HealthResponse;
