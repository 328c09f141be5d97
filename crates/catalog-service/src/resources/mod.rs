//! # Catalogue Resources
//!
//! Validators and [`CatalogEntity`] implementations for the model types.
//!
//! Every write is validated twice: by the facade, before any message is sent, and
//! by the entity itself when the actor builds or changes it. The second pass keeps
//! the store consistent for callers that talk to a [`ResourceClient`] directly.
//!
//! ## Dependencies
//!
//! | resource | context                                   | checked on create and update |
//! |----------|-------------------------------------------|------------------------------|
//! | book     | `(ResourceClient<Author>, ResourceClient<Publisher>)` | every author, the publisher |
//! | game     | `ResourceClient<Platform>`                | every platform               |
//! | music    | `ResourceClient<Artist>`                  | the artist                   |
//!
//! All other resources run with `Context = ()`.

mod account;
mod artist;
mod author;
mod book;
mod game;
mod genre;
mod movie;
mod music;
mod platform;
mod program;
mod publisher;
mod series;

pub use account::AccountValidator;
pub use artist::ArtistValidator;
pub use author::AuthorValidator;
pub use book::{BookContext, BookValidator};
pub use game::GameValidator;
pub use genre::GenreValidator;
pub use movie::MovieValidator;
pub use music::MusicValidator;
pub use platform::PlatformValidator;
pub use program::ProgramValidator;
pub use publisher::PublisherValidator;
pub use series::SeriesValidator;

use crate::error::{SERVICE_UNAVAILABLE, UNAVAILABLE_STATUS};
use catalog_framework::{
    CatalogEntity, Filter, InputError, Outcome, ResourceClient, Validator, NOT_FOUND_STATUS,
};

/// Latest year accepted by every dated resource.
pub const MAX_YEAR: i32 = 2100;

/// A catalogue resource: an entity together with its search filter and its validator.
pub trait Resource: CatalogEntity {
    type Filter: Filter<Self> + Default;
    type Validator: Validator<Self::Create> + Validator<Self::Update> + Default;
}

/// Collects the references a new or changed entity points to that do not exist.
///
/// Every missing id is reported, not only the first one.
#[derive(Debug, Default)]
pub(crate) struct References {
    outcome: Outcome,
}

impl References {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn require<T: CatalogEntity>(
        &mut self,
        client: &ResourceClient<T>,
        ids: impl IntoIterator<Item = T::Id>,
    ) -> Result<(), InputError> {
        for id in ids {
            match client.get(id.clone()).await {
                Ok(Some(_)) => {}
                Ok(None) => self
                    .outcome
                    .add_events(InputError::not_found(T::KIND, &id).into_outcome().into_events()),
                Err(e) => {
                    return Err(InputError::single(
                        SERVICE_UNAVAILABLE,
                        format!("{} catalog is unavailable: {e}", T::KIND.to_lowercase()),
                        UNAVAILABLE_STATUS,
                    ))
                }
            }
        }
        Ok(())
    }

    /// `<KIND>_NOT_EXIST` / 404 when anything was missing.
    pub(crate) fn finish(self) -> Result<(), InputError> {
        if self.outcome.is_error() {
            Err(InputError::with_status(self.outcome, NOT_FOUND_STATUS))
        } else {
            Ok(())
        }
    }
}
