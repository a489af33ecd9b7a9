//! API client module for the marketplace under test.
//!
//! Provides async helpers for the endpoints the load scenarios touch:
//! - `GET /user`, `GET /legoset` — id discovery
//! - `POST /user`, `POST /legoset/`, `POST /auction/`, `POST /comment`,
//!   `POST /auction/{id}/bid` — entity creation

mod comments;
mod lego_sets;
mod listings;
mod users;

use crate::config::LoadConfig;
use crate::data::{BidDraft, CommentDraft, LegoSetDraft, ListingDraft, UserDraft};
use crate::images::ImageFile;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while talking to the service.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status: HTTP {0}")]
    Status(u16),
    #[error("unreadable response body: {0}")]
    Decode(String),
}

/// Map a reqwest failure onto the error taxonomy.
fn classify(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_decode() {
        ApiError::Decode(e.to_string())
    } else {
        ApiError::Network(e)
    }
}

/// Client for the marketplace REST API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client for the configured target.
    pub fn new(config: &LoadConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("brickload/0.1.0")
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.base_url_trimmed().to_string(),
            timeout: Duration::from_millis(config.request_timeout_ms()),
        }
    }

    /// Absolute URL for a path under the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch all user ids.
    pub async fn user_ids(&self) -> Result<Vec<String>, ApiError> {
        users::fetch_ids(&self.http, &self.endpoint("user"), self.timeout).await
    }

    /// Register a user; returns the created id.
    pub async fn create_user(&self, draft: &UserDraft) -> Result<String, ApiError> {
        users::create(&self.http, &self.endpoint("user"), self.timeout, draft).await
    }

    /// Fetch all catalog-item ids.
    pub async fn lego_set_ids(&self) -> Result<Vec<String>, ApiError> {
        lego_sets::fetch_ids(&self.http, &self.endpoint("legoset"), self.timeout).await
    }

    /// Create a catalog item with up to three image attachments; returns
    /// the created id.
    pub async fn create_lego_set(
        &self,
        draft: &LegoSetDraft,
        images: &[ImageFile],
    ) -> Result<String, ApiError> {
        lego_sets::create(
            &self.http,
            &self.endpoint("legoset/"),
            self.timeout,
            draft,
            images,
        )
        .await
    }

    /// Create a listing; returns the created id.
    pub async fn create_listing(&self, draft: &ListingDraft) -> Result<String, ApiError> {
        listings::create(&self.http, &self.endpoint("auction/"), self.timeout, draft).await
    }

    /// Place a bid on a listing.
    pub async fn create_bid(&self, listing_id: &str, draft: &BidDraft) -> Result<(), ApiError> {
        listings::bid(
            &self.http,
            &self.endpoint(&format!("auction/{}/bid", listing_id)),
            self.timeout,
            draft,
        )
        .await
    }

    /// Post a comment on a catalog item.
    pub async fn create_comment(&self, draft: &CommentDraft) -> Result<(), ApiError> {
        comments::create(&self.http, &self.endpoint("comment"), self.timeout, draft).await
    }
}

/// A record carrying an `id` field; everything else is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct IdRecord {
    pub id: Value,
}

/// Normalize a JSON id to a string. The service uses UUID strings, but
/// numeric ids are tolerated.
pub(crate) fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract the ordered id sequence from a fetched record list.
pub(crate) fn collect_ids(records: Vec<IdRecord>) -> Vec<String> {
    records.iter().filter_map(|r| id_string(&r.id)).collect()
}

/// Pull the created id out of a creation response body.
pub(crate) fn created_id(body: Value) -> Result<String, ApiError> {
    body.get("id")
        .and_then(id_string)
        .ok_or_else(|| ApiError::Decode("response carries no id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_string_accepts_strings_and_numbers() {
        assert_eq!(id_string(&json!("abc")), Some("abc".to_string()));
        assert_eq!(id_string(&json!(42)), Some("42".to_string()));
        assert_eq!(id_string(&json!(null)), None);
        assert_eq!(id_string(&json!({"nested": 1})), None);
    }

    #[test]
    fn test_collect_ids_preserves_order_and_skips_unusable() {
        let records: Vec<IdRecord> =
            serde_json::from_value(json!([{"id": "a"}, {"id": 2}, {"id": null}, {"id": "z"}]))
                .unwrap();
        assert_eq!(collect_ids(records), vec!["a", "2", "z"]);
    }

    #[test]
    fn test_created_id_present() {
        assert_eq!(created_id(json!({"id": 42})).unwrap(), "42");
    }

    #[test]
    fn test_created_id_missing() {
        let err = created_id(json!({"status": "ok"})).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
