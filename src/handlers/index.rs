use crate::models::IndexResponse;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};

const SERVICE_NAME: &str = "Pet Store REST API Service";
const SERVICE_VERSION: &str = "1.0";

/// GET / handler - Service info
///
/// `url` is the absolute address of the pets collection, built from the
/// request's Host header (or the bind address when there is none).
#[utoipa::path(
    get,
    path = routes::INDEX,
    responses(
        (status = 200, description = "Service information", body = IndexResponse)
    ),
    tag = "info"
)]
pub async fn index_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (StatusCode, Json<IndexResponse>) {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| state.config.bind_addr());

    (
        StatusCode::OK,
        Json(IndexResponse {
            name: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            url: format!("http://{}{}", host, routes::PETS),
        }),
    )
}
