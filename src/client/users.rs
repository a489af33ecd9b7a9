//! User endpoints: `GET /user`, `POST /user`.

use super::{classify, collect_ids, created_id, ApiError, IdRecord};
use crate::data::UserDraft;
use reqwest::Client;
use std::time::Duration;

/// Fetch the ordered list of user ids.
pub(crate) async fn fetch_ids(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<Vec<String>, ApiError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(classify)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    let records: Vec<IdRecord> = response.json().await.map_err(classify)?;
    Ok(collect_ids(records))
}

/// Register a user; returns the created id.
pub(crate) async fn create(
    client: &Client,
    url: &str,
    timeout: Duration,
    draft: &UserDraft,
) -> Result<String, ApiError> {
    let response = client
        .post(url)
        .timeout(timeout)
        .json(draft)
        .send()
        .await
        .map_err(classify)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    let body = response.json().await.map_err(classify)?;
    created_id(body)
}
