use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{IndexResponse, Pet, PetPayload};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Store REST API Service",
        version = "1.0.0",
        description = "CRUD operations over an in-memory collection of pets"
    ),
    paths(
        handlers::index::index_handler,
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Pet,
            PetPayload,
            IndexResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "info", description = "Service information"),
        (name = "health", description = "Health check operations"),
        (name = "pets", description = "Pet directory operations")
    )
)]
pub struct ApiDoc;
