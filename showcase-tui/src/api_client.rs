//! REST client for the listing API.

use crate::config::TuiConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use serde_json::Value;
use showcase_core::{
    extract_page, extract_reference, CatalogSpec, Item, ListingApi, ListingError, ListingPage,
    ListingQuery, ReferenceApi, ReferenceEntry, ReferenceKind,
};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Listing error: {0}")]
    Listing(#[from] ListingError),
}

impl From<ApiClientError> for ListingError {
    fn from(err: ApiClientError) -> Self {
        match err {
            ApiClientError::Http(err) if err.is_decode() => ListingError::decode(err.to_string()),
            ApiClientError::Http(err) => ListingError::transport(err.to_string()),
            ApiClientError::Serde(err) => ListingError::from(err),
            ApiClientError::Status { status, body } => ListingError::Status { status, body },
            ApiClientError::Listing(err) => err,
        }
    }
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        Self::with_base_url(
            &config.api_base_url,
            Duration::from_millis(config.request_timeout_ms),
        )
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, ApiClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    pub async fn list_catalog(
        &self,
        spec: &CatalogSpec,
        query: &ListingQuery,
    ) -> Result<ListingPage<Item>, ApiClientError> {
        let body = self.get_json(spec.endpoint, &query.to_pairs()).await?;
        Ok(extract_page(&body, spec.response_key)?)
    }

    pub async fn list_reference(
        &self,
        kind: ReferenceKind,
    ) -> Result<Vec<ReferenceEntry>, ApiClientError> {
        let body = self
            .get_json(kind.endpoint(), &ListingQuery::reference().to_pairs())
            .await?;
        Ok(extract_reference(&body, kind))
    }

    async fn get_json(&self, endpoint: &str, query: &[(String, String)]) -> Result<Value, ApiClientError> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(url = %url, ?query, "GET");
        let response = self.client.get(url).query(query).send().await?;
        self.parse_response(response).await
    }

    async fn parse_response(&self, response: reqwest::Response) -> Result<Value, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            Ok(serde_json::from_str(&text)?)
        } else {
            let body = response.text().await?;
            Err(ApiClientError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl ListingApi for RestClient {
    async fn fetch_listing(
        &self,
        spec: &CatalogSpec,
        query: &ListingQuery,
    ) -> Result<ListingPage<Item>, ListingError> {
        Ok(self.list_catalog(spec, query).await?)
    }
}

#[async_trait]
impl ReferenceApi for RestClient {
    async fn fetch_reference(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntry>, ListingError> {
        Ok(self.list_reference(kind).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_single_slash() {
        let client = RestClient::with_base_url("http://localhost:5000/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(
            client.endpoint_url("websites/listing"),
            "http://localhost:5000/api/websites/listing"
        );
        assert_eq!(
            client.endpoint_url("/clients/listing"),
            "http://localhost:5000/api/clients/listing"
        );
    }

    #[test]
    fn test_status_error_converts_to_listing_status() {
        let err = ApiClientError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(
            ListingError::from(err),
            ListingError::Status {
                status: 500,
                body: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_serde_error_converts_to_decode() {
        let err = serde_json::from_str::<Value>("{").unwrap_err();
        assert!(matches!(
            ListingError::from(ApiClientError::from(err)),
            ListingError::Decode { .. }
        ));
    }
}
