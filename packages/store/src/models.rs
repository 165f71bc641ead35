//! # Domain records and create payloads
//!
//! Defines the data structures exchanged with the backend's REST collections.
//! Records are what a `GET /{collection}` returns; payloads are what a
//! `POST /{collection}` sends. Records are never mutated on the client: a panel
//! replaces its whole list on every successful fetch.
//!
//! ## Records
//!
//! | Struct | Collection | Notes |
//! |--------|-----------|-------|
//! | [`Photo`] | `/photos` | `favorite` drives the Favorites view (`?favorites=true`). |
//! | [`Song`] | `/songs` | |
//! | [`Movie`] | `/movies` | `watched` is stored but never shown or toggled. |
//! | [`Note`] | `/notes` | |
//! | [`Plan`] | `/plans` | `date` is free text, never validated. |
//!
//! Every non-id field falls back to its default when absent or `null`, so a
//! terse create response such as `{"id": "…"}` still decodes, and one sloppy
//! record never sinks a whole list.
//!
//! ## Payloads
//!
//! [`NewPhoto`], [`NewSong`], [`NewMovie`], [`NewNote`], [`NewPlan`] mirror the
//! request bodies the backend expects. Optional text is sent as an empty string,
//! except [`NewMovie::year`] which is left out entirely when unset.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Attribution used for items the two of us add together.
pub const SHARED_AUTHOR: &str = "biz";

/// Server-assigned identifier. Backends differ on integer vs. string ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// A shared photo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uploader: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub favorite: bool,
}

impl Photo {
    /// Caption to show under the image, if there is one worth showing.
    pub fn caption_text(&self) -> Option<&str> {
        non_empty(&self.caption)
    }

    /// Alt text for the image element.
    pub fn alt_text(&self) -> &str {
        self.caption.as_deref().unwrap_or_default()
    }
}

/// One of "our songs".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Song {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub added_by: String,
}

impl Song {
    pub fn artist_text(&self) -> &str {
        self.artist.as_deref().unwrap_or_default()
    }

    /// Listening link, when one was given.
    pub fn link(&self) -> Option<&str> {
        non_empty(&self.url)
    }
}

/// An entry on the movie watch-list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub planned_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub watched: bool,
}

impl Movie {
    pub fn link(&self) -> Option<&str> {
        non_empty(&self.link)
    }

    /// Who put the movie on the list, or an em dash when nobody is recorded.
    pub fn planner(&self) -> &str {
        if self.planned_by.is_empty() {
            "—"
        } else {
            &self.planned_by
        }
    }
}

/// A short note left for the other person.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
}

/// Something we plan to do together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl Plan {
    pub fn date_text(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    pub fn details_text(&self) -> Option<&str> {
        non_empty(&self.details)
    }

    pub fn author_text(&self) -> Option<&str> {
        non_empty(&self.author)
    }
}

/// Body of `POST /photos`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPhoto {
    pub uploader: String,
    pub caption: String,
    pub file_url: String,
    pub favorite: bool,
}

/// Body of `POST /songs`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub url: String,
    pub added_by: String,
}

/// Body of `POST /movies`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMovie {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub link: String,
    pub planned_by: String,
    pub watched: bool,
}

/// Body of `POST /notes`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewNote {
    pub content: String,
    pub author: String,
}

/// Body of `POST /plans`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPlan {
    pub title: String,
    pub date: String,
    pub details: String,
    pub author: String,
}

/// An explicit `null` decodes like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `1999`, `1999.0` and `"1999"`. Anything else, including
/// fractional or out-of-range numbers, decodes as no year.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(year_from_json))
}

fn year_from_json(value: &Value) -> Option<i32> {
    let year = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    i32::try_from(year).ok()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_id_accepts_numbers_and_strings() {
        let photo: Photo = serde_json::from_value(json!({
            "id": 7,
            "uploader": "biz",
            "file_url": "https://example.com/a.jpg",
            "favorite": true
        }))
        .unwrap();
        assert_eq!(photo.id, RecordId::Number(7));
        assert_eq!(photo.id.to_string(), "7");

        let note: Note = serde_json::from_value(json!({
            "_id": "65f0c0ffee",
            "content": "merhaba",
            "author": "A"
        }))
        .unwrap();
        assert_eq!(note.id, RecordId::Text("65f0c0ffee".to_string()));
        assert_eq!(note.id.to_string(), "65f0c0ffee");
    }

    #[test]
    fn test_terse_create_response_decodes() {
        let movie: Movie = serde_json::from_value(json!({ "id": "m1" })).unwrap();
        assert_eq!(movie.title, "");
        assert!(movie.year.is_none());
        assert!(!movie.watched);
        assert_eq!(movie.planner(), "—");
    }

    #[test]
    fn test_empty_optionals_render_as_absent() {
        let photo: Photo = serde_json::from_value(json!({
            "id": 1,
            "file_url": "u",
            "caption": ""
        }))
        .unwrap();
        assert!(photo.caption_text().is_none());
        assert_eq!(photo.alt_text(), "");

        let plan: Plan = serde_json::from_value(json!({
            "id": 2,
            "title": "Piknik",
            "date": "2024-06-01",
            "details": "",
            "author": null
        }))
        .unwrap();
        assert_eq!(plan.date_text(), Some("2024-06-01"));
        assert!(plan.details_text().is_none());
        assert!(plan.author_text().is_none());

        let song: Song = serde_json::from_value(json!({
            "id": 3,
            "title": "Gül Pembe",
            "url": "https://example.com/listen"
        }))
        .unwrap();
        assert_eq!(song.artist_text(), "");
        assert_eq!(song.link(), Some("https://example.com/listen"));
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let photo: Photo = serde_json::from_value(json!({
            "id": 4,
            "uploader": null,
            "caption": null,
            "file_url": "c.jpg",
            "favorite": null
        }))
        .unwrap();
        assert_eq!(photo.uploader, "");
        assert!(photo.caption.is_none());
        assert!(!photo.favorite);

        let movie: Movie = serde_json::from_value(json!({
            "id": 2,
            "title": "Eski",
            "planned_by": null,
            "watched": null,
            "year": null
        }))
        .unwrap();
        assert_eq!(movie.planner(), "—");
        assert!(!movie.watched);
        assert!(movie.year.is_none());

        let note: Note =
            serde_json::from_value(json!({ "id": 5, "content": null, "author": null })).unwrap();
        assert_eq!(note.content, "");
        assert_eq!(note.author, "");
    }

    #[test]
    fn test_movie_year_shapes() {
        let year = |raw: Value| {
            serde_json::from_value::<Movie>(json!({ "id": 1, "title": "x", "year": raw }))
                .unwrap()
                .year
        };
        assert_eq!(year(json!(1999)), Some(1999));
        assert_eq!(year(json!(1999.0)), Some(1999));
        assert_eq!(year(json!(" 2004 ")), Some(2004));
        assert_eq!(year(json!(1999.5)), None);
        assert_eq!(year(json!(9_999_999_999_i64)), None);
        assert_eq!(year(json!("doksan")), None);
        assert_eq!(year(json!(true)), None);
    }

    #[test]
    fn test_new_movie_omits_missing_year() {
        let movie = NewMovie {
            title: "Matrix".to_string(),
            year: None,
            link: String::new(),
            planned_by: SHARED_AUTHOR.to_string(),
            watched: false,
        };
        let value = serde_json::to_value(&movie).unwrap();
        assert!(value.get("year").is_none());
        assert_eq!(value["planned_by"], "biz");
        assert_eq!(value["watched"], false);
    }
}
