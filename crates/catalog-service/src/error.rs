//! Errors returned by the catalog facade.

use catalog_framework::{CatalogEntity, FrameworkError, InputError};

/// Code reported when the actor owning a resource is gone.
pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";

/// Status reported when the actor owning a resource is gone.
pub const UNAVAILABLE_STATUS: u16 = 503;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// The request was rejected: invalid input, an empty filter or a missing resource.
    #[error(transparent)]
    Invalid(#[from] InputError),
    /// The actor owning the resource is gone.
    #[error("{0} catalog is unavailable")]
    Unavailable(&'static str),
}

impl CatalogError {
    /// Maps a framework failure for resource `T`.
    ///
    /// Rejections pass through unchanged, an unknown id becomes `<KIND>_NOT_EXIST`.
    pub fn from_framework<T: CatalogEntity>(error: FrameworkError) -> Self {
        match error {
            FrameworkError::Rejected(input) => Self::Invalid(input),
            FrameworkError::NotFound(id) => Self::Invalid(InputError::not_found(T::KIND, id)),
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => Self::Unavailable(T::KIND),
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Self::Invalid(input) => input.status(),
            Self::Unavailable(_) => UNAVAILABLE_STATUS,
        }
    }

    /// The input error, when the request itself was at fault.
    pub fn as_input(&self) -> Option<&InputError> {
        match self {
            Self::Invalid(input) => Some(input),
            Self::Unavailable(_) => None,
        }
    }
}
