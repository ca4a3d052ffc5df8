use crate::error::{parse_pet_id, ApiError, ErrorResponse};
use crate::handlers::read_payload;
use crate::models::{Pet, PetPayload};
use crate::routes;
use crate::state::AppState;
use crate::store::StoreError;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value as JsonValue;

/// PUT /pets/{id} handler - Replace a pet's name and kind
///
/// Existence is checked before the body is validated, so an unknown id is a
/// 404 even when the body is also invalid.
#[utoipa::path(
    put,
    path = routes::PET_ITEM,
    params(
        ("id" = u64, Path, description = "Pet id")
    ),
    request_body = PetPayload,
    responses(
        (status = 200, description = "Pet updated", body = Pet),
        (status = 400, description = "Invalid pet id or pet data", body = ErrorResponse),
        (status = 404, description = "Pet not found", body = ErrorResponse)
    ),
    tag = "pets"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, Json<Pet>), ApiError> {
    let id = parse_pet_id(&id_str)?;

    match state.store.update(id, || read_payload(body)) {
        Ok(pet) => {
            tracing::info!("Updated pet with id: {}", id);
            Ok((StatusCode::OK, Json(pet)))
        }
        Err(StoreError::NotFound(id)) => {
            tracing::info!("Pet not found for update with id: {}", id);
            Err(ApiError::UpdateTargetNotFound(id))
        }
        Err(StoreError::InvalidInput(_)) => Err(ApiError::InvalidUpdateData),
    }
}
