//! Thin HTTP client for the hosted Deta Base item API

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::base::DocumentStore;
use super::errors::{StorageError, StorageResult};

/// Hosted item API endpoint
const DETA_ENDPOINT: &str = "https://database.deta.sh/v1";

/// API key header
const API_KEY_HEADER: &str = "X-API-Key";

/// Request body for `PUT /items`
#[derive(Debug, Serialize)]
struct PutRequest {
    items: Vec<Value>,
}

/// Request body for `PATCH /items/{key}`
#[derive(Debug, Serialize)]
struct UpdateRequest {
    set: Value,
}

/// Request body for `POST /query`
#[derive(Debug, Serialize)]
struct QueryRequest {
    query: Vec<Value>,
    limit: usize,
}

/// Client for one base (named collection) of a hosted Deta project.
///
/// The project key doubles as credential and address: its prefix before the
/// first `_` is the project id the base URL is derived from. The key itself
/// is sent on every request and never logged.
pub struct DetaBase {
    client: reqwest::Client,
    base_url: String,
    project_key: String,
}

impl DetaBase {
    /// Client for `base_name` under the project identified by `project_key`.
    pub fn new(project_key: &str, base_name: &str) -> Self {
        Self::with_endpoint(DETA_ENDPOINT, project_key, base_name)
    }

    /// Same as `new` but against a non-default endpoint.
    pub fn with_endpoint(endpoint: &str, project_key: &str, base_name: &str) -> Self {
        let project_id = project_id_of(project_key);
        Self {
            client: reqwest::Client::new(),
            base_url: format!("{}/{}/{}", endpoint.trim_end_matches('/'), project_id, base_name),
            project_key: project_key.to_string(),
        }
    }

    /// The collection URL this client talks to (without a trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> StorageResult<reqwest::Response> {
        request
            .header(API_KEY_HEADER, &self.project_key)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))
    }

    async fn read_json(response: reqwest::Response) -> StorageResult<Value> {
        response
            .json()
            .await
            .map_err(|e| StorageError::MalformedResponse(e.to_string()))
    }

    async fn unexpected(response: reqwest::Response) -> StorageError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        StorageError::UnexpectedResponse { status, body }
    }
}

/// Project id portion of a `{project_id}_{secret}` key.
fn project_id_of(project_key: &str) -> &str {
    project_key.split('_').next().unwrap_or(project_key)
}

#[async_trait]
impl DocumentStore for DetaBase {
    async fn put(&self, item: Value) -> StorageResult<Value> {
        let url = format!("{}/items", self.base_url);
        let body = PutRequest { items: vec![item] };
        let response = self.send(self.client.put(&url).json(&body)).await?;

        if !response.status().is_success() {
            return Err(Self::unexpected(response).await);
        }

        // The item API answers with {"processed": {"items": [...]}}
        let mut parsed = Self::read_json(response).await?;
        match parsed
            .pointer_mut("/processed/items/0")
            .map(Value::take)
        {
            Some(stored) => Ok(stored),
            None => Err(StorageError::MalformedResponse(
                "put response carried no processed item".to_string(),
            )),
        }
    }

    async fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        let url = format!("{}/items/{}", self.base_url, key);
        let response = self.send(self.client.get(&url)).await?;

        match response.status() {
            s if s.is_success() => Ok(Some(Self::read_json(response).await?)),
            reqwest::StatusCode::NOT_FOUND => Ok(None),
            _ => Err(Self::unexpected(response).await),
        }
    }

    async fn update(&self, key: &str, patch: Value) -> StorageResult<()> {
        let url = format!("{}/items/{}", self.base_url, key);
        let body = UpdateRequest { set: patch };
        let response = self.send(self.client.patch(&url).json(&body)).await?;

        match response.status() {
            s if s.is_success() => Ok(()),
            reqwest::StatusCode::NOT_FOUND => Err(StorageError::KeyNotFound(key.to_string())),
            _ => Err(Self::unexpected(response).await),
        }
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let url = format!("{}/items/{}", self.base_url, key);
        let response = self.send(self.client.delete(&url)).await?;

        // The item API reports success for absent keys as well.
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::unexpected(response).await)
        }
    }

    async fn fetch(&self, query: Option<Value>, limit: usize) -> StorageResult<Vec<Value>> {
        let url = format!("{}/query", self.base_url);
        let body = QueryRequest {
            query: query.into_iter().collect(),
            limit,
        };
        let response = self.send(self.client.post(&url).json(&body)).await?;

        if !response.status().is_success() {
            return Err(Self::unexpected(response).await);
        }

        let mut parsed = Self::read_json(response).await?;
        match parsed.get_mut("items").map(Value::take) {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(StorageError::MalformedResponse(
                "query response carried no items array".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_is_key_prefix() {
        assert_eq!(project_id_of("a0abcxyz_secretpart"), "a0abcxyz");
    }

    #[test]
    fn test_project_id_of_underscoreless_key() {
        assert_eq!(project_id_of("rawkey"), "rawkey");
    }

    #[test]
    fn test_base_url_derivation() {
        let base = DetaBase::new("a0abcxyz_secretpart", "stores");
        assert_eq!(
            base.base_url(),
            "https://database.deta.sh/v1/a0abcxyz/stores"
        );
    }

    #[test]
    fn test_custom_endpoint_trailing_slash() {
        let base = DetaBase::with_endpoint("http://localhost:9000/", "p_s", "stores");
        assert_eq!(base.base_url(), "http://localhost:9000/p/stores");
    }
}
