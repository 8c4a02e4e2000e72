use common::{CreateUserRequest, UserDto};

use crate::api_client::{self, endpoints};

/// Get all clients
pub async fn get_all_users() -> Result<Vec<UserDto>, String> {
    log::trace!("Fetching all clients");
    let result: Result<Vec<UserDto>, String> = api_client::get(endpoints::ALL_USERS).await;
    match &result {
        Ok(users) => log::info!("Fetched {} clients", users.len()),
        Err(e) => log::error!("Failed to fetch clients: {}", e),
    }
    result
}

/// Get all coaches (picklist source for the activity form)
pub async fn get_coaches() -> Result<Vec<UserDto>, String> {
    log::trace!("Fetching coaches");
    let result: Result<Vec<UserDto>, String> = api_client::get(endpoints::COACHES).await;
    match &result {
        Ok(coaches) => log::info!("Fetched {} coaches", coaches.len()),
        Err(e) => log::error!("Failed to fetch coaches: {}", e),
    }
    result
}

/// Get a single client by ID. Returns `Ok(None)` when the backend reports 404.
pub async fn get_user(user_id: i32) -> Result<Option<UserDto>, String> {
    log::trace!("Fetching client with ID: {}", user_id);
    let result: Result<Option<UserDto>, String> =
        api_client::get_optional(&endpoints::user_detail(user_id)).await;
    match &result {
        Ok(Some(user)) => log::info!("Fetched client: {} (ID: {})", user.full_name(), user.id),
        Ok(None) => log::warn!("Client {} not found", user_id),
        Err(e) => log::error!("Failed to fetch client {}: {}", user_id, e),
    }
    result
}

/// Register a new client
pub async fn create_user(request: CreateUserRequest) -> Result<UserDto, String> {
    log::debug!(
        "Creating new client: {} {}",
        request.first_name,
        request.last_name
    );
    let result: Result<UserDto, String> = api_client::post(endpoints::USERS, &request).await;
    match &result {
        Ok(user) => log::info!(
            "Successfully created client: {} (ID: {})",
            user.full_name(),
            user.id
        ),
        Err(e) => log::error!(
            "Failed to create client '{} {}': {}",
            request.first_name,
            request.last_name,
            e
        ),
    }
    result
}
