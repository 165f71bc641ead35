//! # Resource catalogue
//!
//! Each section of the page is an instance of the same panel, parameterised by
//! a zero-sized resource type. [`Resource`] says where a panel lists from and
//! what its draft looks like; [`Creatable`] adds the submit side: which fields
//! are required and how a draft becomes a request body.
//!
//! | Type | Path | Query | Required | Submit flag |
//! |------|------|-------|----------|-------------|
//! | [`Photos`] | `photos` | — | `file_url` | `favorite: bool` |
//! | [`FavoritePhotos`] | `photos` | `favorites=true` | (list only) | — |
//! | [`Songs`] | `songs` | — | `title` | `()` |
//! | [`Movies`] | `movies` | — | `title` | `()` |
//! | [`Notes`] | `notes` | — | `content`, `author` | `()` |
//! | [`Plans`] | `plans` | — | `title` | `()` |

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::ListQuery;
use crate::draft::Draft;
use crate::models::*;

/// A REST collection a panel can list.
pub trait Resource: 'static {
    type Record: Clone + Debug + PartialEq + DeserializeOwned + 'static;

    /// Collection path segment, without slashes.
    const PATH: &'static str;

    /// Draft field names, in form order.
    const FIELDS: &'static [&'static str] = &[];

    /// Server-side filter applied to every list call.
    fn query() -> Option<ListQuery> {
        None
    }
}

/// A collection the page can also add to.
pub trait Creatable: Resource {
    type Payload: Serialize + Debug;

    /// Extra input chosen by the action rather than typed into the form.
    type Flag: Copy + Default + Debug + 'static;

    /// Fields that must be non-empty before anything is sent.
    const REQUIRED: &'static [&'static str];

    fn payload(draft: &Draft, flag: Self::Flag) -> Self::Payload;

    fn is_ready(draft: &Draft) -> bool {
        Self::REQUIRED
            .iter()
            .all(|field| !draft.get(field).is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Photos;

impl Photos {
    pub const FILE_URL: &'static str = "file_url";
    pub const CAPTION: &'static str = "caption";
}

impl Resource for Photos {
    type Record = Photo;
    const PATH: &'static str = "photos";
    const FIELDS: &'static [&'static str] = &[Self::FILE_URL, Self::CAPTION];
}

impl Creatable for Photos {
    type Payload = NewPhoto;
    /// `true` for the "add as favorite" action.
    type Flag = bool;
    const REQUIRED: &'static [&'static str] = &[Self::FILE_URL];

    fn payload(draft: &Draft, favorite: bool) -> NewPhoto {
        NewPhoto {
            uploader: SHARED_AUTHOR.to_string(),
            caption: draft.get(Self::CAPTION).to_string(),
            file_url: draft.get(Self::FILE_URL).to_string(),
            favorite,
        }
    }
}

/// The favorite photos, fetched on their own with a server-side filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FavoritePhotos;

impl Resource for FavoritePhotos {
    type Record = Photo;
    const PATH: &'static str = "photos";

    fn query() -> Option<ListQuery> {
        Some(ListQuery::favorites())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Songs;

impl Songs {
    pub const TITLE: &'static str = "title";
    pub const ARTIST: &'static str = "artist";
    pub const URL: &'static str = "url";
}

impl Resource for Songs {
    type Record = Song;
    const PATH: &'static str = "songs";
    const FIELDS: &'static [&'static str] = &[Self::TITLE, Self::ARTIST, Self::URL];
}

impl Creatable for Songs {
    type Payload = NewSong;
    type Flag = ();
    const REQUIRED: &'static [&'static str] = &[Self::TITLE];

    fn payload(draft: &Draft, _: ()) -> NewSong {
        NewSong {
            title: draft.get(Self::TITLE).to_string(),
            artist: draft.get(Self::ARTIST).to_string(),
            url: draft.get(Self::URL).to_string(),
            added_by: SHARED_AUTHOR.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Movies;

impl Movies {
    pub const TITLE: &'static str = "title";
    pub const YEAR: &'static str = "year";
    pub const LINK: &'static str = "link";
}

impl Resource for Movies {
    type Record = Movie;
    const PATH: &'static str = "movies";
    const FIELDS: &'static [&'static str] = &[Self::TITLE, Self::YEAR, Self::LINK];
}

impl Creatable for Movies {
    type Payload = NewMovie;
    type Flag = ();
    const REQUIRED: &'static [&'static str] = &[Self::TITLE];

    fn payload(draft: &Draft, _: ()) -> NewMovie {
        NewMovie {
            title: draft.get(Self::TITLE).to_string(),
            year: parse_year(draft.get(Self::YEAR)),
            link: draft.get(Self::LINK).to_string(),
            planned_by: SHARED_AUTHOR.to_string(),
            watched: false,
        }
    }
}

/// Empty input means "no year". Input that is not a whole number is dropped too.
fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(year) => Some(year),
        Err(err) => {
            tracing::warn!(year = raw, %err, "ignoring movie year that is not a number");
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Notes;

impl Notes {
    pub const CONTENT: &'static str = "content";
    pub const AUTHOR: &'static str = "author";
}

impl Resource for Notes {
    type Record = Note;
    const PATH: &'static str = "notes";
    const FIELDS: &'static [&'static str] = &[Self::CONTENT, Self::AUTHOR];
}

impl Creatable for Notes {
    type Payload = NewNote;
    type Flag = ();
    const REQUIRED: &'static [&'static str] = &[Self::CONTENT, Self::AUTHOR];

    fn payload(draft: &Draft, _: ()) -> NewNote {
        NewNote {
            content: draft.get(Self::CONTENT).to_string(),
            author: draft.get(Self::AUTHOR).to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plans;

impl Plans {
    pub const TITLE: &'static str = "title";
    pub const DATE: &'static str = "date";
    pub const DETAILS: &'static str = "details";
    pub const AUTHOR: &'static str = "author";
}

impl Resource for Plans {
    type Record = Plan;
    const PATH: &'static str = "plans";
    const FIELDS: &'static [&'static str] =
        &[Self::TITLE, Self::DATE, Self::DETAILS, Self::AUTHOR];
}

impl Creatable for Plans {
    type Payload = NewPlan;
    type Flag = ();
    const REQUIRED: &'static [&'static str] = &[Self::TITLE];

    fn payload(draft: &Draft, _: ()) -> NewPlan {
        NewPlan {
            title: draft.get(Self::TITLE).to_string(),
            date: draft.get(Self::DATE).to_string(),
            details: draft.get(Self::DETAILS).to_string(),
            author: draft.get(Self::AUTHOR).to_string(),
        }
    }
}
