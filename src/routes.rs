// Route path constants - single source of truth for all API paths

pub const INDEX: &str = "/";
pub const HEALTH: &str = "/health";
pub const PETS: &str = "/pets";
pub const PET_ITEM: &str = "/pets/{id}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Canonical location of a single pet
pub fn pet_location(id: u64) -> String {
    format!("{}/{}", PETS, id)
}
