//! # Boundary Error Mapper
//!
//! Turns a [`CatalogError`] into the body a client receives:
//!
//! ```json
//! { "status": 422, "issues": [{ "code": "MOVIE_TITLE_NULL", "message": "title must not be null" }] }
//! ```
//!
//! Every event of the rejected outcome becomes one issue, in order. A missing
//! resource uses the same shape with status 404.

use crate::error::{CatalogError, SERVICE_UNAVAILABLE};
use catalog_framework::InputError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub issues: Vec<Issue>,
}

impl ErrorResponse {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn codes(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.code.as_str()).collect()
    }
}

impl From<&InputError> for ErrorResponse {
    fn from(error: &InputError) -> Self {
        Self {
            status: error.status(),
            issues: error
                .events()
                .iter()
                .map(|event| Issue {
                    code: event.code.clone(),
                    message: event.message.clone(),
                })
                .collect(),
        }
    }
}

impl From<&CatalogError> for ErrorResponse {
    fn from(error: &CatalogError) -> Self {
        match error {
            CatalogError::Invalid(input) => Self::from(input),
            CatalogError::Unavailable(_) => Self {
                status: error.status(),
                issues: vec![Issue {
                    code: SERVICE_UNAVAILABLE.to_string(),
                    message: error.to_string(),
                }],
            },
        }
    }
}
