//! # HTTP client for the REST collections
//!
//! [`HttpClient`] implements [`store::ResourceClient`] on top of `reqwest`, which
//! compiles to `fetch` on WASM and to hyper on native targets.
//!
//! - `list` → `GET {base}/{path}` with the query pairs appended, body decoded
//!   as a JSON array.
//! - `create` → `POST {base}/{path}` with a JSON body, response decoded as the
//!   created record.
//!
//! Non-2xx answers are errors. Nothing is retried and no timeout is set: a
//! failed call simply ends the refresh or submit that issued it.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{ListQuery, ResourceClient};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Shared handle to the backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Client for the backend named by the environment.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn send(request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl ResourceClient for HttpClient {
    type Error = ApiError;

    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&ListQuery>,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.config.endpoint(path);
        let mut request = self.http.get(&url);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            request = request.query(query.pairs());
        }

        tracing::debug!(%url, query = ?query, "GET");
        let response = Self::send(request, &url).await?;
        Self::decode(response, &url).await
    }

    async fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let request = self.http.post(&url).json(payload);

        tracing::debug!(%url, "POST");
        let response = Self::send(request, &url).await?;
        Self::decode(response, &url).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::Value;
    use store::{Creatable, Draft, Movie, Movies, Photo, RecordId, Resource};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    /// Client for a local test server, never routed through a proxy.
    fn local_client(base_url: String) -> HttpClient {
        HttpClient {
            http: Client::builder().no_proxy().build().expect("build client"),
            config: ApiConfig::new(base_url),
        }
    }

    /// What the fake backend received.
    struct Received {
        request_line: String,
        body: String,
    }

    /// Accept one connection on a local port, answer it with `status` and
    /// `body`, and report the request that came in.
    async fn serve_once(status: &'static str, body: &'static str) -> (HttpClient, JoinHandle<Received>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            let header_end = loop {
                let n = stream.read(&mut chunk).await.expect("read request");
                assert!(n > 0, "connection closed before the headers ended");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
            let length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while buf.len() < header_end + length {
                let n = stream.read(&mut chunk).await.expect("read body");
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            stream.shutdown().await.ok();

            Received {
                request_line: head.lines().next().unwrap_or_default().to_string(),
                body: String::from_utf8_lossy(&buf[header_end..]).into_owned(),
            }
        });

        (local_client(format!("http://{addr}/")), handle)
    }

    #[test]
    fn test_client_uses_configured_base() {
        let client = HttpClient::new(ApiConfig::new("http://backend.test/"));
        assert_eq!(client.config().endpoint("songs"), "http://backend.test/songs");
    }

    #[tokio::test]
    async fn test_list_sends_favorites_filter() {
        let (client, server) = serve_once(
            "200 OK",
            r#"[{"id":1,"uploader":"biz","file_url":"a.jpg","favorite":true}]"#,
        )
        .await;

        let photos: Vec<Photo> = client
            .list("photos", Some(&ListQuery::favorites()))
            .await
            .unwrap();

        let received = server.await.unwrap();
        assert_eq!(received.request_line, "GET /photos?favorites=true HTTP/1.1");
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].id, RecordId::Number(1));
        assert!(photos[0].favorite);
    }

    #[tokio::test]
    async fn test_list_without_query_has_no_query_string() {
        let (client, server) = serve_once("200 OK", "[]").await;

        let notes: Vec<store::Note> = client.list("notes", None).await.unwrap();

        assert!(notes.is_empty());
        assert_eq!(server.await.unwrap().request_line, "GET /notes HTTP/1.1");
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let (client, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = client.list::<Photo>("photos", None).await.unwrap_err();
        server.await.unwrap();

        match &err {
            ApiError::Status { status, .. } => {
                assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected a status error, got {other:?}"),
        }
        assert!(err.url().ends_with("/photos"));
    }

    #[tokio::test]
    async fn test_non_json_body_maps_to_decode() {
        let (client, server) = serve_once("200 OK", "<html>bakım</html>").await;

        let err = client.list::<Photo>("songs", None).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
        assert!(err.url().ends_with("/songs"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_maps_to_network() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = local_client(format!("http://{addr}"));
        let err = client.list::<Photo>("plans", None).await.unwrap_err();

        assert!(matches!(err, ApiError::Network { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_create_posts_json_body_without_empty_year() {
        let (client, server) = serve_once(
            "201 Created",
            r#"{"id":7,"title":"Matrix","link":"","planned_by":"biz","watched":false}"#,
        )
        .await;

        let mut draft = Draft::new(Movies::FIELDS);
        draft.set(Movies::TITLE, "Matrix");
        let payload = Movies::payload(&draft, ());

        let movie: Movie = client.create(Movies::PATH, &payload).await.unwrap();

        let received = server.await.unwrap();
        assert_eq!(received.request_line, "POST /movies HTTP/1.1");
        let body: Value = serde_json::from_str(&received.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "title": "Matrix",
                "link": "",
                "planned_by": "biz",
                "watched": false
            })
        );
        assert_eq!(movie.id, RecordId::Number(7));
        assert!(movie.year.is_none());
    }
}
