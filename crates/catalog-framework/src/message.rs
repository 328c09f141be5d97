//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::CatalogEntity;
use crate::error::FrameworkError;
use crate::filter::Specification;
use crate::paging::{Page, PageRequest};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The Catalog Operations
/// The variants map to the operations every catalog resource supports:
///
/// - **Create**: Uses [`CatalogEntity::Create`] to initialize a new resource.
/// - **Get**: Fetches the current state of the resource by ID.
/// - **Update**: Uses [`CatalogEntity::Update`] to modify an existing resource.
/// - **Delete**: Removes the resource.
/// - **Search**: Runs the query executor with an optional compiled filter and a page request.
/// - **Duplicate**: Stores a copy of an existing resource under a fresh ID.
///
/// This type is generic over `T: CatalogEntity`, so a "Book Create" payload can never
/// reach a "Movie" actor.
#[derive(Debug)]
pub enum ResourceRequest<T: CatalogEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Search {
        spec: Option<Specification<T>>,
        page: PageRequest,
        respond_to: Response<Page<T>>,
    },
    Duplicate {
        id: T::Id,
        respond_to: Response<T::Id>,
    },
}
