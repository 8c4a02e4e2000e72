use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Activity response model (mirrors the backend ActivityResponse).
/// `spots_left` is derived server-side and is at most `max_capacity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub coach_id: i32,
    pub start_time: DateTime<Utc>,
    /// Duration in minutes.
    pub duration: i32,
    pub credits_required: i32,
    pub max_capacity: i32,
    pub spots_left: i32,
}

/// Request body for creating a new activity (mirrors the backend ActivityBase).
/// `start_time` goes over the wire as an ISO-8601 timestamp string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct CreateActivityRequest {
    #[validate(length(min = 1, max = 50, message = "Name is required (max 50 characters)"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 1, message = "Please select a coach"))]
    pub coach_id: i32,
    pub start_time: DateTime<Utc>,
    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    pub duration: i32,
    #[validate(range(min = 0, message = "Credits cannot be negative"))]
    pub credits_required: i32,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub max_capacity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_request() -> CreateActivityRequest {
        CreateActivityRequest {
            name: "Barbell Club".to_string(),
            description: "We will lift weights".to_string(),
            coach_id: 101,
            start_time: Utc.with_ymd_and_hms(2025, 6, 21, 7, 0, 0).unwrap(),
            duration: 60,
            credits_required: 15,
            max_capacity: 20,
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let mut request = valid_request();
        request.max_capacity = 0;

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("max_capacity"));
    }

    #[test]
    fn test_zero_credits_is_allowed() {
        let mut request = valid_request();
        request.credits_required = 0;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_negative_credits_is_rejected() {
        let mut request = valid_request();
        request.credits_required = -5;

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("credits_required"));
    }

    #[test]
    fn test_missing_coach_is_rejected() {
        let mut request = valid_request();
        request.coach_id = 0;

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("coach_id"));
    }

    #[test]
    fn test_empty_name_and_description_are_rejected() {
        let mut request = valid_request();
        request.name = String::new();
        request.description = String::new();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("description"));
    }

    #[test]
    fn test_start_time_serializes_as_iso8601() {
        let json = serde_json::to_value(valid_request()).unwrap();
        assert_eq!(json["start_time"], "2025-06-21T07:00:00Z");
        assert_eq!(json["duration"], 60);
    }

    #[test]
    fn test_activity_roundtrip_from_backend_shape() {
        let payload = r#"{
            "id": 7,
            "name": "Morning Yoga Flow",
            "description": "Vinyasa flow, all levels welcome",
            "coach_id": 101,
            "start_time": "2025-06-21T14:00:00Z",
            "duration": 60,
            "credits_required": 15,
            "max_capacity": 20,
            "spots_left": 8
        }"#;

        let activity: ActivityDto = serde_json::from_str(payload).unwrap();
        assert_eq!(activity.id, 7);
        assert_eq!(activity.spots_left, 8);
        assert!(activity.spots_left <= activity.max_capacity);
    }
}
