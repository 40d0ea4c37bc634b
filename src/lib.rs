//! Artsy Gallery - server-rendered pages over the Artsy public API
//!
//! A token is acquired once at startup and handed to the [`ArtsyClient`],
//! which answers every page's lookups. Pages fall back to the home listing
//! whenever a lookup comes back empty or the vendor does not answer 200.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

// Re-export commonly used types
pub use models::{Artist, ArtistRef, Artwork, ArtworkEntry, Fetched};
pub use services::{ArtCatalog, ArtsyClient, CatalogError, TokenProvider};
