use crate::error::{parse_pet_id, ApiError, ErrorResponse};
use crate::models::Pet;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// GET /pets/{id} handler - Retrieve a pet
#[utoipa::path(
    get,
    path = routes::PET_ITEM,
    params(
        ("id" = u64, Path, description = "Pet id")
    ),
    responses(
        (status = 200, description = "Pet found", body = Pet),
        (status = 400, description = "Invalid pet id", body = ErrorResponse),
        (status = 404, description = "Pet not found", body = ErrorResponse)
    ),
    tag = "pets"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Pet>), ApiError> {
    let id = parse_pet_id(&id_str)?;

    match state.store.get(id) {
        Ok(pet) => {
            tracing::info!("Retrieved pet with id: {}", id);
            Ok((StatusCode::OK, Json(pet)))
        }
        Err(_) => {
            tracing::info!("Pet not found with id: {}", id);
            Err(ApiError::PetNotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{empty_request, read_json, setup_test_app};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_get_endpoint_success() {
        let (app, _) = setup_test_app();

        let response = app.oneshot(empty_request("GET", "/pets/2")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let pet: Pet = read_json(response).await;
        assert_eq!(pet, Pet { id: 2, name: "kitty".into(), kind: "cat".into() });
    }

    #[tokio::test]
    async fn test_get_endpoint_not_found() {
        let (app, _) = setup_test_app();

        let response = app.oneshot(empty_request("GET", "/pets/42")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error_response: ErrorResponse = read_json(response).await;
        assert_eq!(error_response.error, "Pet with id: 42 was not found");
    }

    #[tokio::test]
    async fn test_get_endpoint_zero_id_not_found() {
        let (app, _) = setup_test_app();

        let response = app.oneshot(empty_request("GET", "/pets/0")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error_response: ErrorResponse = read_json(response).await;
        assert_eq!(error_response.error, "Pet with id: 0 was not found");
    }

    #[tokio::test]
    async fn test_get_endpoint_rejects_signed_id() {
        let (app, _) = setup_test_app();

        let response = app.oneshot(empty_request("GET", "/pets/+2")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error_response: ErrorResponse = read_json(response).await;
        assert!(error_response.error.contains("Invalid pet id"));
    }

    #[tokio::test]
    async fn test_get_endpoint_invalid_id() {
        let (app, _) = setup_test_app();

        let response = app
            .oneshot(empty_request("GET", "/pets/not-a-number"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error_response: ErrorResponse = read_json(response).await;
        assert!(error_response.error.contains("Invalid pet id"));
        assert!(error_response.error.contains("not-a-number"));
    }
}
