use crate::models::{ListQuery, Pet};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// GET /pets handler - List pets
///
/// Returns every pet in creation order. With `?kind=K` only pets whose kind
/// equals `K` exactly are returned; an empty `kind` is ignored. A repeated
/// `kind` uses its first value.
#[utoipa::path(
    get,
    path = routes::PETS,
    params(ListQuery),
    responses(
        (status = 200, description = "List of pets", body = Vec<Pet>)
    ),
    tag = "pets"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, Json<Vec<Pet>>) {
    let query = ListQuery::from_pairs(pairs);
    let pets = state.store.list(query.kind_filter());

    tracing::info!("Listed {} pets (kind: {:?})", pets.len(), query.kind_filter());

    (StatusCode::OK, Json(pets))
}
