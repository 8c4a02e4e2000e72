use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_membership_status() -> String {
    "Active".to_string()
}

/// User response model (mirrors the backend UserResponse).
/// Clients and coaches share this shape; coaches only ever appear as
/// picklist entries in the activity form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default = "default_membership_status")]
    pub membership_status: String,
    #[serde(default)]
    pub credits_balance: i32,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
}

impl UserDto {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Request body for registering a new client (mirrors the backend UserBase).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 7, message = "Please enter a valid phone number"))]
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone: "+15551234567".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_short_phone_is_rejected() {
        let mut request = valid_request();
        request.phone = "12345".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_defaults_applied_for_missing_optional_fields() {
        let payload = r#"{
            "id": 3,
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane.doe@example.com",
            "phone": "+15551234567"
        }"#;

        let user: UserDto = serde_json::from_str(payload).unwrap();
        assert_eq!(user.membership_status, "Active");
        assert_eq!(user.credits_balance, 0);
        assert!(user.last_activity.is_none());
        assert_eq!(user.full_name(), "Jane Doe");
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let payload = r#"{
            "id": 3,
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane.doe@example.com",
            "phone": "+15551234567",
            "membership_status": "Suspended",
            "credits_balance": 42,
            "last_activity": "2025-06-01T10:30:00Z"
        }"#;

        let user: UserDto = serde_json::from_str(payload).unwrap();
        assert_eq!(user.membership_status, "Suspended");
        assert_eq!(user.credits_balance, 42);
        assert!(user.last_activity.is_some());
    }
}
