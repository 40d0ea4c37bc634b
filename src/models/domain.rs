use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Hyperlink as Artsy embeds it under `_links`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub templated: bool,
}

/// Read a display string the vendor may send as `null`
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Links carried by an artist document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<Link>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Artist document as returned by the vendor
///
/// Only the fields the pages display are typed; everything else is kept
/// verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deathday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: ArtistLinks,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Artist {
    pub fn thumbnail(&self) -> Option<&str> {
        self.links.thumbnail.as_ref().map(|l| l.href.as_str())
    }
}

/// Links carried by an artwork document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artists: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<Link>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Artwork document as returned by the vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: ArtworkLinks,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Artwork {
    /// Href of the artwork's artist collection, if the vendor linked one
    pub fn artists_href(&self) -> Option<&str> {
        self.links.artists.as_ref().map(|l| l.href.as_str())
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.links.thumbnail.as_ref().map(|l| l.href.as_str())
    }
}

/// Artist identity resolved by following an artwork's artist link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

impl ArtistRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An artwork paired with its resolved artist
///
/// `artist` is `None` when the link could not be followed (non-200) or the
/// artwork carries no artist link at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkEntry {
    pub artwork: Artwork,
    pub artist: Option<ArtistRef>,
}

/// Outcome of a vendor lookup
///
/// Keeps "the vendor answered with nothing" apart from "the vendor did not
/// answer with 200", which the pages otherwise treat the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Found(T),
    Empty,
    Upstream(u16),
}

impl<T> Fetched<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Fetched::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Fetched::Found(data) => Some(data),
            Fetched::Empty | Fetched::Upstream(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Fetched<U> {
        match self {
            Fetched::Found(data) => Fetched::Found(f(data)),
            Fetched::Empty => Fetched::Empty,
            Fetched::Upstream(status) => Fetched::Upstream(status),
        }
    }

    /// Upstream status when the vendor answered with a non-200
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Fetched::Upstream(status) => Some(*status),
            _ => None,
        }
    }
}

impl<T> Fetched<Vec<T>> {
    /// Wrap a collection, tagging an empty one as `Empty`
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Fetched::Empty
        } else {
            Fetched::Found(items)
        }
    }

    /// The collection, or an empty one for `Empty` and `Upstream`
    pub fn items(self) -> Vec<T> {
        self.found().unwrap_or_default()
    }
}
