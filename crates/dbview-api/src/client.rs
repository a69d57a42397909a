//! Table browser API client

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use dbview_core::{DatabaseInfo, Error, Result, TableInfo, TableList, TableSnapshot};

use crate::classify::{classify_response, ContentTypePolicy};
use crate::error::FetchError;

/// Characters escaped when a table name is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Read-only access to the table browser API
#[trait_variant::make(TableApi: Send)]
pub trait LocalTableApi {
    /// `GET /api/database/info`
    async fn database_info(&self) -> std::result::Result<DatabaseInfo, FetchError>;

    /// `GET /api/tables`
    async fn list_tables(&self) -> std::result::Result<TableList, FetchError>;

    /// `GET /api/table/{name}/info`
    async fn table_info(&self, name: &str) -> std::result::Result<TableInfo, FetchError>;

    /// `GET /api/table/{name}?limit={limit}`
    async fn table_rows(
        &self,
        name: &str,
        limit: u32,
    ) -> std::result::Result<TableSnapshot, FetchError>;
}

/// [`TableApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpTableApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTableApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Build a client; `timeout` of `None` waits indefinitely
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        let parsed = url::Url::parse(&base_url).map_err(|_| Error::invalid_base_url(&base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_base_url(&base_url));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::http_client(e.to_string()))?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        policy: ContentTypePolicy,
    ) -> std::result::Result<T, FetchError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|e| warn!("GET {} failed: {}", url, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        classify_response(status, content_type.as_deref(), &body, policy)
            .inspect_err(|e| debug!("GET {} classified as {:?}", url, e.tier()))
    }
}

/// Percent-encode a table name for use as a path segment
pub fn encode_table_name(name: &str) -> String {
    utf8_percent_encode(name, PATH_SEGMENT).to_string()
}

impl TableApi for HttpTableApi {
    async fn database_info(&self) -> std::result::Result<DatabaseInfo, FetchError> {
        self.get("/api/database/info", ContentTypePolicy::Any).await
    }

    async fn list_tables(&self) -> std::result::Result<TableList, FetchError> {
        self.get("/api/tables", ContentTypePolicy::Any).await
    }

    async fn table_info(&self, name: &str) -> std::result::Result<TableInfo, FetchError> {
        let path = format!("/api/table/{}/info", encode_table_name(name));
        self.get(&path, ContentTypePolicy::Any).await
    }

    async fn table_rows(
        &self,
        name: &str,
        limit: u32,
    ) -> std::result::Result<TableSnapshot, FetchError> {
        let path = format!("/api/table/{}?limit={}", encode_table_name(name), limit);
        self.get(&path, ContentTypePolicy::RequireJson).await
    }
}
