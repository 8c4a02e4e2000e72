pub mod activity;
pub mod user;

use common::ErrorBody;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Logical endpoint names mapped to their URL paths, relative to the
/// `/api/v1` prefix held in settings.
pub mod endpoints {
    /// List and create activities
    pub const ACTIVITIES: &str = "/activity/";
    /// List coaches for the activity-form picklist
    pub const COACHES: &str = "/user/coaches/";
    /// Create a client
    pub const USERS: &str = "/user/";
    /// List all clients
    pub const ALL_USERS: &str = "/users/all";

    /// Fetch one client by id
    pub fn user_detail(id: i32) -> String {
        format!("/user/{}", id)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_user_detail_path() {
            assert_eq!(user_detail(7), "/user/7");
        }
    }
}

/// Extract the error text from a non-2xx response. The backend puts a
/// human-readable `message` in the body; fall back to the HTTP status.
async fn error_text(response: gloo_net::http::Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("HTTP error: {}", status),
    }
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = error_text(response).await;
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

/// GET request handler for single-record lookups where HTTP 404 is an
/// expected outcome rather than a failure.
pub async fn get_optional<T>(endpoint: &str) -> Result<Option<T>, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if response.status() == 404 {
        log::info!("GET {} - Not found", endpoint);
        return Ok(None);
    }

    if !response.ok() {
        let error_msg = error_text(response).await;
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(Some(data))
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        let error_msg = error_text(response).await;
        log::error!("POST {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(data)
}
