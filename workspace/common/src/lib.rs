//! Common transport-layer types shared between the GymDash backend and frontend.
//! These structs mirror the backend handlers' request/response payloads so the
//! frontend can deserialize API responses without duplicating shapes, and carry
//! the validation schemas the creation forms run before submitting.

mod activity;
mod user;

pub use activity::{ActivityDto, CreateActivityRequest};
pub use user::{CreateUserRequest, UserDto};

use serde::{Deserialize, Serialize};

/// Body shape of non-2xx responses from the backend.
/// The `message` field is what the forms surface to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub message: String,
}
