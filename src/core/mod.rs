// Vendor response-shape navigation
pub mod embedded;

pub use embedded::{document, embedded, embedded_values, first_artist, ShapeError};
