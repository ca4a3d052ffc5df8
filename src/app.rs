use crate::api_doc::ApiDoc;
use crate::handlers::{
    create_handler, delete_handler, get_handler, health_handler, index_handler, list_handler,
    update_handler,
};
use crate::routes;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the application router with all routes, docs and request tracing
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::INDEX, get(index_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::PETS, get(list_handler).post(create_handler))
        .route(
            routes::PET_ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{empty_request, json_request, read_json, setup_test_app};
    use crate::models::Pet;
    use axum::http::{header, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    fn pet(id: u64, name: &str, kind: &str) -> Pet {
        Pet {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }

    #[tokio::test]
    async fn test_pet_lifecycle() {
        let (app, _) = setup_test_app();

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/pets?kind=cat"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let pets: Vec<Pet> = read_json(response).await;
        assert_eq!(pets, vec![pet(2, "kitty", "cat")]);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/pets", &json!({"name": "rex", "kind": "dog"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/pets/3");
        let created: Pet = read_json(response).await;
        assert_eq!(created, pet(3, "rex", "dog"));

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/pets/3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: Pet = read_json(response).await;
        assert_eq!(fetched, created);

        let response = app
            .clone()
            .oneshot(json_request("PUT", "/pets/3", &json!({"name": "rex", "kind": "wolf"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated: Pet = read_json(response).await;
        assert_eq!(updated, pet(3, "rex", "wolf"));

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/pets/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/pets/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(empty_request("GET", "/pets")).await.unwrap();
        let pets: Vec<Pet> = read_json(response).await;
        assert_eq!(pets, vec![pet(2, "kitty", "cat"), pet(3, "rex", "wolf")]);
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let (app, _) = setup_test_app();

        let response = app
            .oneshot(empty_request("GET", "/api-docs/openapi.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc: serde_json::Value = read_json(response).await;
        assert!(doc["paths"]["/pets/{id}"].is_object());
    }
}
