use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::{ListQuery, Method, ResourceClient};

/// One call seen by a [`MemoryBackend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestRecord {
    pub method: Method,
    pub path: String,
    pub query: Option<ListQuery>,
}

#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    #[error("injected failure for {method} /{path}")]
    Injected { method: Method, path: String },
    #[error("payload for /{0} is not a JSON object")]
    NotAnObject(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// In-memory REST backend for testing.
///
/// Collections are plain JSON objects keyed by path. `create` assigns an
/// increasing integer `id`; `list` returns records in insertion order and
/// keeps only those whose fields match every query pair. Every call is
/// recorded, and [`fail_next`](MemoryBackend::fail_next) makes the next call
/// with a given method fail.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    requests: Arc<Mutex<Vec<RequestRecord>>>,
    failures: Arc<Mutex<Vec<Method>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a record in place as if another client had created it.
    pub fn seed(&self, path: &str, record: Value) {
        self.collections
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push(record);
    }

    /// Raw stored records for `path`, as the server would hold them.
    pub fn records(&self, path: &str) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    /// Every call so far, oldest first.
    pub fn requests(&self) -> Vec<RequestRecord> {
        self.requests.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Make the next call using `method` fail.
    pub fn fail_next(&self, method: Method) {
        self.failures.lock().unwrap().push(method);
    }

    fn log_request(
        &self,
        method: Method,
        path: &str,
        query: Option<&ListQuery>,
    ) -> Result<(), MemoryError> {
        self.requests.lock().unwrap().push(RequestRecord {
            method,
            path: path.to_string(),
            query: query.cloned(),
        });

        let mut failures = self.failures.lock().unwrap();
        if let Some(pos) = failures.iter().position(|m| *m == method) {
            failures.remove(pos);
            return Err(MemoryError::Injected {
                method,
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

fn matches_query(record: &Value, query: Option<&ListQuery>) -> bool {
    let Some(query) = query else {
        return true;
    };
    query.pairs().iter().all(|(key, expected)| match record.get(key) {
        Some(Value::Bool(b)) => expected.parse::<bool>().is_ok_and(|e| e == *b),
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == *expected,
        _ => false,
    })
}

// The Favorites filter is named `favorites` while the stored flag is `favorite`.
fn field_for_query_key(key: &str) -> &str {
    match key {
        "favorites" => "favorite",
        other => other,
    }
}

impl ResourceClient for MemoryBackend {
    type Error = MemoryError;

    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&ListQuery>,
    ) -> Result<Vec<T>, MemoryError> {
        self.log_request(Method::Get, path, query)?;

        let query = query.map(|q| {
            q.pairs().iter().fold(ListQuery::new(), |acc, (key, value)| {
                acc.with(field_for_query_key(key), value.clone())
            })
        });
        let records = self.records(path);
        records
            .into_iter()
            .filter(|record| matches_query(record, query.as_ref()))
            .map(|record| serde_json::from_value(record).map_err(MemoryError::from))
            .collect()
    }

    async fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<T, MemoryError> {
        self.log_request(Method::Post, path, None)?;

        let Value::Object(fields) = serde_json::to_value(payload)? else {
            return Err(MemoryError::NotAnObject(path.to_string()));
        };
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            *next_id
        };
        let mut record = Map::new();
        record.insert("id".to_string(), Value::from(id));
        record.extend(fields);
        let record = Value::Object(record);

        self.seed(path, record.clone());
        Ok(serde_json::from_value(record)?)
    }
}
