use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use serde_path_to_error::Segment;
use std::fmt;

/// Why a query parameter was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidQueryKind {
    /// A required parameter was absent
    Missing,
    /// A parameter could not be coerced to its declared type
    Invalid,
}

impl InvalidQueryKind {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Invalid => "invalid",
        }
    }
}

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Query string failed to deserialize into the endpoint's parameters
    InvalidQuery {
        field: Option<String>,
        kind: InvalidQueryKind,
        message: String,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuery { field: Some(field), message, .. } => {
                write!(f, "Invalid query parameter '{}': {}", field, message)
            }
            Self::InvalidQuery { field: None, message, .. } => {
                write!(f, "Invalid query string: {}", message)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidQuery { field, kind, message } => {
                let mut loc = vec!["query".to_string()];
                loc.extend(field);

                let body = Json(json!({
                    "detail": [{
                        "loc": loc,
                        "msg": message,
                        "type": kind.as_str(),
                    }]
                }));

                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
        }
    }
}

impl From<serde_path_to_error::Error<serde_urlencoded::de::Error>> for AppError {
    fn from(error: serde_path_to_error::Error<serde_urlencoded::de::Error>) -> Self {
        let message = error.inner().to_string();

        // Missing fields are reported by the enclosing struct, so the path stops short
        if let Some(field) = missing_field_name(&message) {
            return Self::InvalidQuery {
                field: Some(field),
                kind: InvalidQueryKind::Missing,
                message,
            };
        }

        let field = error
            .path()
            .iter()
            .filter_map(|segment| match segment {
                Segment::Map { key } => Some(key.clone()),
                _ => None,
            })
            .last();

        Self::InvalidQuery {
            field,
            kind: InvalidQueryKind::Invalid,
            message,
        }
    }
}

/// Extract `field` from serde's "missing field `field`" message
fn missing_field_name(message: &str) -> Option<String> {
    let rest = message.split("missing field `").nth(1)?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}
