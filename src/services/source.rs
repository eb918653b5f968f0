// src/services/source.rs

//! Document sources for the curriculum Markdown files.
//!
//! A source answers `Ok(None)` when the document simply is not there
//! (missing file, HTTP 404) and `Err` for any other failure. The loader
//! treats both as "unavailable".

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::error::{AppError, Result};
use crate::utils::http::is_remote;

/// Something that can produce the raw bytes of one document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable location used in log lines.
    fn location(&self) -> String;

    /// Read the whole document.
    async fn fetch(&self) -> Result<Option<Vec<u8>>>;
}

/// Document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

/// Document served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Option<Vec<u8>>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AppError::source(&self.url, format!("HTTP status {status}")));
        }
        Ok(Some(response.bytes().await?.to_vec()))
    }
}

/// Document held in memory (embedded corpora, tests).
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    content: Option<String>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Some(content.into()),
        }
    }

    /// A source that never has a document.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
        }
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    fn location(&self) -> String {
        format!("memory:{}", self.name)
    }

    async fn fetch(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.content.as_ref().map(|c| c.as_bytes().to_vec()))
    }
}

/// Pick a source for a configured location: URL or file path.
pub fn source_for_location(location: &str, client: &Client) -> Box<dyn DocumentSource> {
    if is_remote(location) {
        Box::new(HttpSource::new(client.clone(), location))
    } else {
        Box::new(FileSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpConfig;
    use crate::utils::http::create_async_client;
    use crate::utils::http::test_server::{closed_url, serve_once};

    #[tokio::test]
    async fn test_file_source_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2015.md");
        std::fs::write(&path, "# 1. 국어").unwrap();

        let source = FileSource::new(&path);
        let bytes = source.fetch().await.unwrap();
        assert_eq!(bytes, Some("# 1. 국어".as_bytes().to_vec()));
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.md"));
        assert!(source.fetch().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_source_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());
        assert!(source.fetch().await.is_err());
    }

    #[tokio::test]
    async fn test_memory_source() {
        let present = MemorySource::new("2022", "## (국어)");
        assert_eq!(present.location(), "memory:2022");
        assert!(present.fetch().await.unwrap().is_some());
        assert!(MemorySource::missing("2015").fetch().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_http_source_reads_body() {
        let (base, server) = serve_once("200 OK", "## 성취기준 (국어)").await;
        let source = HttpSource::new(Client::new(), format!("{base}/2022.md"));

        let bytes = source.fetch().await.unwrap();
        assert_eq!(bytes, Some("## 성취기준 (국어)".as_bytes().to_vec()));
        assert!(server.await.unwrap().starts_with("GET /2022.md "));
    }

    #[tokio::test]
    async fn test_http_source_not_found_is_none() {
        let (base, _server) = serve_once("404 Not Found", "").await;
        let source = HttpSource::new(Client::new(), format!("{base}/2015.md"));
        assert!(source.fetch().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_http_source_server_error_is_source_error() {
        let (base, _server) = serve_once("500 Internal Server Error", "boom").await;
        let url = format!("{base}/2015.md");
        let source = HttpSource::new(Client::new(), &url);

        match source.fetch().await {
            Err(AppError::Source { location, message }) => {
                assert_eq!(location, url);
                assert!(message.contains("500"));
            }
            other => panic!("expected a source error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_source_unreachable_is_error() {
        let source = HttpSource::new(Client::new(), format!("{}/2015.md", closed_url().await));
        assert!(source.fetch().await.is_err());
    }

    #[test]
    fn test_source_for_location() {
        let client = create_async_client(&HttpConfig::default()).unwrap();
        let remote = source_for_location("https://example.com/2022.md", &client);
        assert_eq!(remote.location(), "https://example.com/2022.md");

        let local = source_for_location("data/2015.md", &client);
        assert_eq!(local.location(), "data/2015.md");
    }
}
