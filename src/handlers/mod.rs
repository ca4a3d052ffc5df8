pub mod index;
pub mod health;
pub mod list;
pub mod get;
pub mod create;
pub mod update;
pub mod delete;

pub use index::index_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use get::get_handler;
pub use create::create_handler;
pub use update::update_handler;
pub use delete::delete_handler;

use crate::models::{PetPayload, ValidationError};
use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value as JsonValue;

/// Turn a raw JSON body extraction into a validated payload
///
/// Unparseable bodies and missing or wrong content types count as a
/// non-object payload, same as a JSON scalar.
pub(crate) fn read_payload(
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<PetPayload, ValidationError> {
    let Json(value) = body.map_err(|rejection| {
        tracing::warn!("Invalid Content Type error: {}", rejection.body_text());
        ValidationError::NotAnObject
    })?;

    PetPayload::from_json(&value).inspect_err(|err| match err {
        ValidationError::MissingField(_) => tracing::warn!("Missing parameter error: {}", err),
        _ => tracing::warn!("Invalid pet data: {}", err),
    })
}
