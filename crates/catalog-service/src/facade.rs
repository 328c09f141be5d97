//! # Catalog Facade
//!
//! [`CatalogClient<T>`] is the entry point for one catalogue resource. It wraps the
//! actor's [`ResourceClient`] and adds what a caller expects from a catalogue:
//!
//! - writes are validated *before* a message is sent; a rejected request never
//!   reaches the actor
//! - searches take a filter plus 1-based paging; an empty filter lists everything
//! - lookups report a missing resource as `<KIND>_NOT_EXIST` / 404
//!
//! Configuration is read once, at construction: the default page size and the status
//! attached to validation failures.

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::resources::Resource;
use catalog_framework::{
    CatalogEntity, Filter, FrameworkError, InputError, Page, PageRequest, PagingFilter,
    ResourceClient, Sort, Validator, DEFAULT_PAGE_SIZE, DEFAULT_STATUS, NOT_FOUND_STATUS,
};
use tracing::{debug, info, instrument};

/// Validating client of one catalogue resource.
#[derive(Clone)]
pub struct CatalogClient<T: Resource> {
    inner: ResourceClient<T>,
    default_page_size: u32,
    rejection_status: u16,
}

impl<T: Resource> CatalogClient<T> {
    pub fn new(inner: ResourceClient<T>, config: &CatalogConfig) -> Self {
        Self {
            inner,
            default_page_size: config.paging.default_page_size,
            rejection_status: config.validation.default_status,
        }
    }

    /// A client using the built-in defaults (page size 50, status 422).
    pub fn with_defaults(inner: ResourceClient<T>) -> Self {
        Self {
            inner,
            default_page_size: DEFAULT_PAGE_SIZE,
            rejection_status: DEFAULT_STATUS,
        }
    }

    /// The underlying actor client, for wiring other actors.
    pub fn inner(&self) -> &ResourceClient<T> {
        &self.inner
    }

    fn validate_create(&self, request: &T::Create) -> Result<(), CatalogError> {
        let validator = T::Validator::default();
        let outcome = <T::Validator as Validator<T::Create>>::validate_with_status(
            &validator,
            request,
            self.rejection_status,
        )?;
        if !outcome.events().is_empty() {
            debug!(entity_type = T::KIND, codes = ?outcome.codes(), "Accepted with remarks");
        }
        Ok(())
    }

    fn validate_update(&self, request: &T::Update) -> Result<(), CatalogError> {
        let validator = T::Validator::default();
        let outcome = <T::Validator as Validator<T::Update>>::validate_with_status(
            &validator,
            request,
            self.rejection_status,
        )?;
        if !outcome.events().is_empty() {
            debug!(entity_type = T::KIND, codes = ?outcome.codes(), "Accepted with remarks");
        }
        Ok(())
    }

    fn map_error(error: FrameworkError) -> CatalogError {
        CatalogError::from_framework::<T>(error)
    }

    #[instrument(skip(self), fields(entity_type = T::KIND))]
    pub async fn add(&self, request: T::Create) -> Result<T::Id, CatalogError> {
        debug!("add called");
        self.validate_create(&request)?;
        let id = self.inner.create(request).await.map_err(Self::map_error)?;
        info!(%id, "Added");
        Ok(id)
    }

    /// Replaces the resource with the content of `request`.
    #[instrument(skip(self), fields(entity_type = T::KIND))]
    pub async fn change(&self, id: T::Id, request: T::Update) -> Result<T, CatalogError> {
        debug!("change called");
        self.validate_update(&request)?;
        self.inner.update(id, request).await.map_err(Self::map_error)
    }

    #[instrument(skip(self), fields(entity_type = T::KIND))]
    pub async fn remove(&self, id: T::Id) -> Result<(), CatalogError> {
        self.inner.delete(id).await.map_err(Self::map_error)
    }

    /// The resource with `id`, or `<KIND>_NOT_EXIST` / 404.
    #[instrument(skip(self), fields(entity_type = T::KIND))]
    pub async fn find(&self, id: T::Id) -> Result<T, CatalogError> {
        self.inner
            .get(id.clone())
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| InputError::not_found(T::KIND, &id).into())
    }

    /// One page of the resources matching `filter`. An empty filter matches everything.
    #[instrument(skip(self), fields(entity_type = T::KIND))]
    pub async fn search(
        &self,
        filter: &T::Filter,
        paging: PagingFilter,
        sort: Option<Sort>,
    ) -> Result<Page<T>, CatalogError> {
        let spec = filter.to_optional_specification()?;
        let page = paging.to_pageable_with(self.default_page_size, sort);
        debug!(?spec, ?page, "Searching");
        self.inner.search(spec, page).await.map_err(Self::map_error)
    }

    /// The first resource matching `filter`.
    ///
    /// An empty filter is rejected with `EMPTY_FILTER` / 422 instead of picking an
    /// arbitrary resource. No match is `<KIND>_NOT_EXIST` / 404.
    #[instrument(skip(self), fields(entity_type = T::KIND))]
    pub async fn find_one(&self, filter: &T::Filter) -> Result<T, CatalogError> {
        let spec = filter.to_specification()?;
        let terms = spec.terms().join(" AND ");
        let page = PageRequest {
            index: 0,
            size: 1,
            sort: None,
        };
        let found = self
            .inner
            .search(Some(spec), page)
            .await
            .map_err(Self::map_error)?;
        found.items.into_iter().next().ok_or_else(|| {
            InputError::single(
                format!("{}_NOT_EXIST", T::KIND),
                format!("no {} matches {terms}", T::KIND.to_lowercase()),
                NOT_FOUND_STATUS,
            )
            .into()
        })
    }

    /// Stores a copy of the resource with `id` and returns the id of the copy.
    #[instrument(skip(self), fields(entity_type = T::KIND))]
    pub async fn duplicate(&self, id: T::Id) -> Result<T::Id, CatalogError> {
        let copy = self.inner.duplicate(id).await.map_err(Self::map_error)?;
        info!(%copy, "Duplicated");
        Ok(copy)
    }
}
