use crate::error::{parse_pet_id, ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /pets/{id} handler - Delete a pet
///
/// Idempotent: deleting an unknown id also returns 204.
#[utoipa::path(
    delete,
    path = routes::PET_ITEM,
    params(
        ("id" = u64, Path, description = "Pet id")
    ),
    responses(
        (status = 204, description = "Pet deleted or already absent"),
        (status = 400, description = "Invalid pet id", body = ErrorResponse)
    ),
    tag = "pets"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_pet_id(&id_str)?;

    match state.store.delete(id) {
        Some(_) => tracing::info!("Deleted pet with id: {}", id),
        None => tracing::debug!("Delete of absent pet with id: {}", id),
    }

    Ok(StatusCode::NO_CONTENT)
}
