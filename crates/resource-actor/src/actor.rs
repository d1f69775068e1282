//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns an entity collection
//! and processes requests against it one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::EntityStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop, so every operation is
/// applied in a single total order. Two concurrent creates can never be handed the same
/// id, and a delete racing an update on the same id either lands after the update or makes
/// the update fail with `NotFound`. No `Mutex` is needed: the task exclusively owns the
/// store.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` (or `with_seed()`) returns the `actor` and a `client`.
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u64, text: String }
/// #[derive(Debug)] struct NoteUpdate(String);
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u64;
///     type Create = String;
///     type Update = NoteUpdate;
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> u64 { self.id }
///     fn from_create_params(id: u64, text: String) -> Result<Self, Self::Error> {
///         Ok(Self { id, text })
///     }
///     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), Self::Error> {
///         self.text = update.0;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: builds the entity with the next id via `T::from_create_params`, runs
///   `on_create`, appends it and advances the counter. Any failure leaves the counter alone.
/// * **List**: clones every record in insertion order.
/// * **Get**: clones the record or fails with `NotFound`.
/// * **Update**: runs `on_update` against a clone and swaps the clone in only on success.
/// * **Delete**: runs `on_delete`, then removes the record. Its id is retired.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: EntityStore<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an empty `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space. Must be greater than zero.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_store(buffer_size, EntityStore::new())
    }

    /// Creates a `ResourceActor` pre-populated with `seed`, in the given order.
    ///
    /// New ids continue from one past the highest seed id. Fails with
    /// [`FrameworkError::DuplicateId`] if two seed entities share an id, and with
    /// [`FrameworkError::IdSpaceExhausted`] if a seed id is `u64::MAX`.
    pub fn with_seed(
        buffer_size: usize,
        seed: impl IntoIterator<Item = T>,
    ) -> Result<(Self, ResourceClient<T>), FrameworkError> {
        let store = EntityStore::seeded(seed)?;
        Ok(Self::with_store(buffer_size, store))
    }

    fn with_store(buffer_size: usize, store: EntityStore<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "User" instead of "user_registry::model::user::User"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match self.store.next_id() {
                        Ok(id) => id,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };

                    match T::from_create_params(id, params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::List { respond_to } => {
                    let items = self.store.snapshot();
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let result = item.ok_or_else(|| FrameworkError::NotFound(id.to_string()));
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(mut draft) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = draft.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.replace(draft.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(draft));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
