// Service exports
pub mod artsy;
pub mod catalog;
pub mod token;

pub use artsy::{ArtsyClient, DEFAULT_BASE_URL, TOKEN_HEADER};
pub use catalog::{ArtCatalog, CatalogError, CatalogResult};
pub use token::TokenProvider;
