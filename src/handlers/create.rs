use crate::error::{ApiError, ErrorResponse};
use crate::handlers::read_payload;
use crate::models::{Pet, PetPayload};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde_json::Value as JsonValue;

/// POST /pets handler - Create a pet
///
/// The new pet's id is assigned by the server. The response carries a
/// `Location` header pointing at the new pet.
#[utoipa::path(
    post,
    path = routes::PETS,
    request_body = PetPayload,
    responses(
        (status = 201, description = "Pet created", body = Pet,
            headers(("location" = String, description = "Location of the new pet"))),
        (status = 400, description = "Data is not valid", body = ErrorResponse)
    ),
    tag = "pets"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Pet>), ApiError> {
    let payload = read_payload(body).map_err(|_| ApiError::InvalidPetData)?;

    let pet = state.store.create(payload);

    tracing::info!("Created pet with id: {}", pet.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, routes::pet_location(pet.id))],
        Json(pet),
    ))
}
