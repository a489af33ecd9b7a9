//! Catalog-item endpoints: `GET /legoset`, multipart `POST /legoset/`.

use super::{classify, collect_ids, created_id, ApiError, IdRecord};
use crate::data::LegoSetDraft;
use crate::images::ImageFile;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;

/// How many image attachments each upload carries at most.
pub(crate) const MAX_ATTACHMENTS: usize = 3;

/// Fetch the ordered list of catalog-item ids.
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

/// Create a catalog item via multipart form upload. Form fields mirror the
/// service's create schema; the first three images ride along as `files`
/// parts. Returns the created id.
pub(crate) async fn create(
    client: &Client,
    url: &str,
    timeout: Duration,
    draft: &LegoSetDraft,
    images: &[ImageFile],
) -> Result<String, ApiError> {
    let mut form = Form::new()
        .text("name", draft.name.clone())
        .text("code_number", draft.code_number.clone())
        .text("description", draft.description.clone());
    if let Some(owner) = &draft.owner_id {
        form = form.text("owner_id", owner.clone());
    }
    for image in images.iter().take(MAX_ATTACHMENTS) {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime)?;
        form = form.part("files", part);
    }

    let response = client
        .post(url)
        .timeout(timeout)
        .multipart(form)
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
