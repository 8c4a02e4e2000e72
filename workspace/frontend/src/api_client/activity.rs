use common::{ActivityDto, CreateActivityRequest};

use crate::api_client::{self, endpoints};

/// Get all scheduled activities
pub async fn get_activities() -> Result<Vec<ActivityDto>, String> {
    log::trace!("Fetching all activities");
    let result: Result<Vec<ActivityDto>, String> = api_client::get(endpoints::ACTIVITIES).await;
    match &result {
        Ok(activities) => log::info!("Fetched {} activities", activities.len()),
        Err(e) => log::error!("Failed to fetch activities: {}", e),
    }
    result
}

/// Create a new activity
pub async fn create_activity(request: CreateActivityRequest) -> Result<ActivityDto, String> {
    log::debug!("Creating new activity: {}", request.name);
    let result: Result<ActivityDto, String> =
        api_client::post(endpoints::ACTIVITIES, &request).await;
    match &result {
        Ok(activity) => log::info!(
            "Successfully created activity: {} (ID: {})",
            activity.name,
            activity.id
        ),
        Err(e) => log::error!("Failed to create activity '{}': {}", request.name, e),
    }
    result
}
