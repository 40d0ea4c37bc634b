use crate::models::ArtistRef;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// A 200 response whose body does not have the shape the vendor documents
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("missing `_embedded.{0}` array")]
    MissingCollection(String),

    #[error("item {index} of `{key}` did not parse: {reason}")]
    InvalidItem {
        key: String,
        index: usize,
        reason: String,
    },

    #[error("document did not parse: {0}")]
    InvalidDocument(String),

    #[error("artist collection has no embedded artist")]
    NoArtist,
}

/// Borrow the array stored under `_embedded.<key>`
pub fn embedded_values<'a>(body: &'a Value, key: &str) -> Result<&'a [Value], ShapeError> {
    body.get("_embedded")
        .and_then(|e| e.get(key))
        .and_then(|c| c.as_array())
        .map(|items| items.as_slice())
        .ok_or_else(|| ShapeError::MissingCollection(key.to_string()))
}

/// Deserialize every item of `_embedded.<key>`, keeping vendor order
pub fn embedded<T: DeserializeOwned>(body: &Value, key: &str) -> Result<Vec<T>, ShapeError> {
    embedded_values(body, key)?
        .iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item.clone()).map_err(|e| ShapeError::InvalidItem {
                key: key.to_string(),
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Deserialize a single (non-collection) document
pub fn document<T: DeserializeOwned>(body: Value) -> Result<T, ShapeError> {
    serde_json::from_value(body).map_err(|e| ShapeError::InvalidDocument(e.to_string()))
}

/// Id and name of the first artist in an `_embedded.artists` collection
pub fn first_artist(body: &Value) -> Result<ArtistRef, ShapeError> {
    let first = embedded_values(body, "artists")?
        .first()
        .ok_or(ShapeError::NoArtist)?;

    let id = first.get("id").and_then(|v| v.as_str());
    let name = first.get("name").and_then(|v| v.as_str());

    match (id, name) {
        (Some(id), Some(name)) => Ok(ArtistRef::new(id, name)),
        _ => Err(ShapeError::InvalidItem {
            key: "artists".to_string(),
            index: 0,
            reason: "missing id or name".to_string(),
        }),
    }
}
