//! # Client seam between panels and the backend
//!
//! [`ResourceClient`] is the async interface every panel talks through. It has
//! exactly two operations, matching the two things the page ever does with a
//! collection:
//!
//! | Method | HTTP | Description |
//! |--------|------|-------------|
//! | [`list`](ResourceClient::list) | `GET /{path}[?query]` | Fetch the whole collection, optionally filtered. |
//! | [`create`](ResourceClient::create) | `POST /{path}` | Send a JSON payload, decode the created record. |
//!
//! Implementations: `api::HttpClient` (reqwest, the real backend) and
//! [`crate::MemoryBackend`] (in-process, used by tests).

use std::fmt;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Query-string filter for a list call, e.g. `favorites=true`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pairs: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a `key=value` pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// The filter the Favorites panel uses against `/photos`.
    pub fn favorites() -> Self {
        Self::new().with("favorites", "true")
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for ListQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// The two HTTP methods the page uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// Async trait for listing and creating records in a REST collection.
pub trait ResourceClient {
    type Error: std::error::Error + 'static;

    fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&ListQuery>,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>>;

    fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &P,
    ) -> impl Future<Output = Result<T, Self::Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_query() {
        let query = ListQuery::favorites();
        assert_eq!(query.to_string(), "favorites=true");
        assert_eq!(
            query.pairs(),
            &[("favorites".to_string(), "true".to_string())]
        );
        assert!(ListQuery::new().is_empty());
    }

    #[test]
    fn test_multi_pair_display() {
        let query = ListQuery::new().with("a", "1").with("b", "2");
        assert_eq!(query.to_string(), "a=1&b=2");
    }
}
