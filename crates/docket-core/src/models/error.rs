use serde::{Deserialize, Serialize};
use std::fmt;

use utoipa::ToSchema;

#[cfg(feature = "actix")]
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct DocketError {
    pub error: String,
    pub error_description: Option<String>,
}

impl DocketError {
    pub fn new(error: &str, description: Option<&str>) -> Self {
        Self {
            error: error.to_string(),
            error_description: description.map(|s| s.to_string()),
        }
    }

    pub fn invalid_pattern(description: &str) -> Self {
        Self::new("invalid_pattern", Some(description))
    }

    pub fn invalid_configuration(description: &str) -> Self {
        Self::new("invalid_configuration", Some(description))
    }

    pub fn not_found(description: &str) -> Self {
        Self::new("not_found", Some(description))
    }
}

impl fmt::Display for DocketError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_description {
            Some(description) => write!(f, "{}: {}", self.error, description),
            None => f.write_str(&self.error),
        }
    }
}

impl std::error::Error for DocketError {}

#[cfg(feature = "actix")]
impl ResponseError for DocketError {
    fn status_code(&self) -> StatusCode {
        match self.error.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}
