use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Each variant maps to one status code and one message so that clients see
/// the same `{"error": ...}` body regardless of which layer rejected the request.
#[derive(Debug)]
pub enum ApiError {
    /// Path segment is not a valid pet id
    InvalidPetId(String),
    /// Pet not found on retrieval
    PetNotFound(u64),
    /// Pet not found on update
    UpdateTargetNotFound(u64),
    /// Create body failed validation
    InvalidPetData,
    /// Update body failed validation
    InvalidUpdateData,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidPetId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid pet id: expected a non-negative integer, got '{}'", id),
            ),
            ApiError::PetNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Pet with id: {} was not found", id),
            ),
            ApiError::UpdateTargetNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Pet {} was not found", id),
            ),
            ApiError::InvalidPetData => (
                StatusCode::BAD_REQUEST,
                "Data is not valid".to_string(),
            ),
            ApiError::InvalidUpdateData => (
                StatusCode::BAD_REQUEST,
                "Pet data was not valid".to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

/// Parse a `/pets/{id}` path segment
///
/// Only plain ASCII digits are accepted; `u64::from_str` alone would also
/// take a leading `+`.
pub fn parse_pet_id(raw: &str) -> Result<u64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidPetId(raw.to_string()));
    }
    raw.parse::<u64>()
        .map_err(|_| ApiError::InvalidPetId(raw.to_string()))
}
