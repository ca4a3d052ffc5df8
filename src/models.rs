use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A pet record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Pet {
    pub id: u64,
    pub name: String,
    pub kind: String,
}

/// Validated request body for create and update
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, utoipa::ToSchema)]
pub struct PetPayload {
    pub name: String,
    pub kind: String,
}

/// Reason a request body was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not a JSON object (scalar, array, unparseable, wrong content type)
    NotAnObject,
    /// Required key is absent
    MissingField(&'static str),
    /// Key is present but not a non-empty string
    InvalidField(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotAnObject => write!(f, "request body is not a JSON object"),
            ValidationError::MissingField(field) => write!(f, "missing field '{}'", field),
            ValidationError::InvalidField(field) => {
                write!(f, "field '{}' must be a non-empty string", field)
            }
        }
    }
}

impl PetPayload {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Validate an arbitrary JSON body against the `{name, kind}` schema
    ///
    /// Extra keys are ignored.
    pub fn from_json(value: &JsonValue) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let field = |key: &'static str| -> Result<String, ValidationError> {
            match object.get(key) {
                None => Err(ValidationError::MissingField(key)),
                Some(JsonValue::String(s)) if !s.is_empty() => Ok(s.clone()),
                Some(_) => Err(ValidationError::InvalidField(key)),
            }
        };

        Ok(Self {
            name: field("name")?,
            kind: field("kind")?,
        })
    }
}

/// Query parameters for list endpoint
#[derive(Debug, Default, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only return pets of this kind
    pub kind: Option<String>,
}

impl ListQuery {
    /// Build from raw query pairs. A repeated `kind` keeps its first value;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let kind = pairs
            .into_iter()
            .find(|(key, _)| key == "kind")
            .map(|(_, value)| value);
        Self { kind }
    }

    /// Kind filter, with an empty value treated as no filter
    pub fn kind_filter(&self) -> Option<&str> {
        self.kind.as_deref().filter(|k| !k.is_empty())
    }
}

/// Response type for the service index
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct IndexResponse {
    pub name: String,
    pub version: String,
    pub url: String,
}
