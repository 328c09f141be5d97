//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the store of
//! one resource type and acts as its query executor. It implements the "Server"
//! side of the Actor Model, processing messages sequentially and ensuring
//! exclusive access to the store.

use crate::client::ResourceClient;
use crate::entity::CatalogEntity;
use crate::error::FrameworkError;
use crate::filter::Specification;
use crate::message::ResourceRequest;
use crate::paging::{Direction, Page, PageRequest};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages the collection of one catalog resource.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each actor processes its own messages
/// *sequentially*, so the store needs no `Mutex` or `RwLock`.
///
/// The store is ordered by id, which makes unsorted search results deterministic.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// # Operations
///
/// * **Create**: next id from the counter, `from_create_params`, `on_create`, insert.
///   The counter only advances on insert.
/// * **Get**: clone of the stored entity, or `None`.
/// * **Update**: `on_update` on the stored entity, returns the new state.
/// * **Delete**: `on_delete`, then removal.
/// * **Search**: filter with the specification (all entities when `None`), sort when
///   requested, then cut the requested page.
/// * **Duplicate**: `duplicate` under the next id, `on_create`, insert.
pub struct ResourceActor<T: CatalogEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: CatalogEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client
    /// calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// The id the next stored entity gets. Only [`store_new`](Self::store_new) consumes it,
    /// so rejected creates and duplicates leave no gaps.
    fn peek_id(&self) -> T::Id {
        T::Id::from(self.next_id)
    }

    fn store_new(&mut self, id: T::Id, item: T) {
        self.store.insert(id, item);
        self.next_id += 1;
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to reach other actors that were created *after* this one but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = T::KIND;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.peek_id();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                                continue;
                            }
                            self.store_new(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // Apply to a copy so a rejected update leaves the stored entity untouched.
                    let mut changed = item.clone();
                    if let Err(e) = changed.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                        continue;
                    }
                    *item = changed.clone();
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(changed));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Search {
                    spec,
                    page,
                    respond_to,
                } => {
                    debug!(entity_type, ?spec, ?page, "Search");
                    let result = self.search(spec.as_ref(), &page);
                    info!(
                        entity_type,
                        total = result.total,
                        returned = result.items.len(),
                        index = result.index,
                        "Searched"
                    );
                    let _ = respond_to.send(Ok(result));
                }
                ResourceRequest::Duplicate { id, respond_to } => {
                    debug!(entity_type, %id, "Duplicate");
                    let Some(original) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let copy_id = self.peek_id();
                    let mut copy = original.duplicate(copy_id.clone());
                    if let Err(e) = copy.on_create(&context).await {
                        warn!(entity_type, %id, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                        continue;
                    }
                    self.store_new(copy_id.clone(), copy);
                    info!(entity_type, %id, copy = %copy_id, size = self.store.len(), "Duplicated");
                    let _ = respond_to.send(Ok(copy_id));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn search(&self, spec: Option<&Specification<T>>, page: &PageRequest) -> Page<T> {
        let mut matches: Vec<&T> = self
            .store
            .values()
            .filter(|item| spec.map_or(true, |spec| spec.matches(item)))
            .collect();

        if let Some(sort) = &page.sort {
            // Stable sort: ties keep id order. Missing values always go last.
            matches.sort_by(|a, b| match (a.field(&sort.field), b.field(&sort.field)) {
                (Some(x), Some(y)) => match sort.direction {
                    Direction::Asc => x.cmp(&y),
                    Direction::Desc => y.cmp(&x),
                },
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }

        let total = matches.len();
        let items = matches
            .into_iter()
            .skip(page.offset())
            .take(page.size as usize)
            .cloned()
            .collect();

        Page {
            items,
            total,
            index: page.index,
            size: page.size,
        }
    }
}
