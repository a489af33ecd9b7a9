//! Listing endpoints: `POST /auction/`, `POST /auction/{id}/bid`.

use super::{classify, created_id, ApiError};
use crate::data::{BidDraft, ListingDraft};
use reqwest::Client;
use std::time::Duration;

/// Create a listing; returns the created id.
pub(crate) async fn create(
    client: &Client,
    url: &str,
    timeout: Duration,
    draft: &ListingDraft,
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

/// Place a bid on a listing.
pub(crate) async fn bid(
    client: &Client,
    url: &str,
    timeout: Duration,
    draft: &BidDraft,
) -> Result<(), ApiError> {
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
    Ok(())
}
