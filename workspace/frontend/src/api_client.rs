pub mod heat_data;

use common::ApiError;
use gloo_net::http::Request;
use serde::Deserialize;
use crate::settings;

/// Common GET request handler
///
/// Transport failures, non-OK statuses and undecodable bodies are all reported
/// as [`ApiError::RequestFailed`].
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let err = ApiError::request_failed(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    if !response.ok() {
        let err = ApiError::request_failed(format!("HTTP error: {}", response.status()));
        log::error!("GET {} - {}", endpoint, err);
        return Err(err);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response
        .json()
        .await
        .map_err(|e| {
            let err = ApiError::request_failed(format!("Failed to parse response: {}", e));
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
