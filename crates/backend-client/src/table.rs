//! Client for the table API (`/rest/v1/{table}`).

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_RANGE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::Session;
use crate::config::BackendConfig;
use crate::error::{BackendError, BackendResult};
use crate::query::{parse_content_range, Counted, Select};

/// Table access, optionally on behalf of a signed-in user.
///
/// Cloning is cheap; the underlying HTTP client is shared.
#[derive(Debug, Clone)]
pub struct TableClient {
    http: reqwest::Client,
    config: BackendConfig,
    access_token: Option<String>,
}

impl TableClient {
    pub fn new(config: BackendConfig) -> BackendResult<Self> {
        Ok(Self {
            http: crate::http_client(&config)?,
            config,
            access_token: None,
        })
    }

    /// Same client, acting as the session's user.
    pub fn with_session(&self, session: &Session) -> Self {
        Self {
            access_token: Some(session.access_token.clone()),
            ..self.clone()
        }
    }

    /// Whether requests carry a user token rather than just the anon key.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let token = self.access_token.as_deref().unwrap_or(&self.config.anon_key);
        if let Ok(value) = HeaderValue::from_str(&self.config.anon_key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    /// Fetch rows matching `select`.
    pub async fn select<T: DeserializeOwned>(&self, table: &str, select: &Select) -> BackendResult<Vec<T>> {
        Ok(self.select_counted(table, select).await?.rows)
    }

    /// Fetch rows and, if `select` asked for it, the exact total.
    pub async fn select_counted<T: DeserializeOwned>(
        &self,
        table: &str,
        select: &Select,
    ) -> BackendResult<Counted<T>> {
        let endpoint = format!("GET {table}");
        let url = self.config.table_url(table);
        tracing::debug!(%endpoint, query = ?select.query_pairs(), "select");

        let mut request = self
            .http
            .get(&url)
            .headers(self.headers())
            .query(&select.query_pairs());
        if select.wants_count() {
            request = request.header("Prefer", "count=exact");
        }

        let resp = request.send().await.map_err(|e| BackendError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        if !resp.status().is_success() {
            return Err(BackendError::from_response(&endpoint, resp).await);
        }

        let total = resp
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range);

        let rows = resp.json().await.map_err(|e| BackendError::Deserialization {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        Ok(Counted { rows, total })
    }

    /// Insert a single row. The server assigns `id` and `created_at`.
    pub async fn insert<D: Serialize + ?Sized>(&self, table: &str, row: &D) -> BackendResult<()> {
        let endpoint = format!("POST {table}");
        let url = self.config.table_url(table);
        tracing::debug!(%endpoint, "insert");

        let resp = self
            .http
            .post(&url)
            .headers(self.headers())
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(|e| BackendError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(BackendError::from_response(&endpoint, resp).await);
        }
        Ok(())
    }
}
