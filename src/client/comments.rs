//! Comment endpoint: `POST /comment`.

use super::{classify, ApiError};
use crate::data::CommentDraft;
use reqwest::Client;
use std::time::Duration;

/// Post a comment on a catalog item.
pub(crate) async fn create(
    client: &Client,
    url: &str,
    timeout: Duration,
    draft: &CommentDraft,
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
