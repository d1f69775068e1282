//! # Entity Store
//!
//! The state a `ResourceActor` owns: the records in insertion order, an id index, and the
//! monotonic id counter. Nothing here is shared; the actor task is the only owner.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use std::collections::{BTreeMap, HashMap};

/// Ordered, id-indexed collection of entities.
///
/// Records live in a `BTreeMap` keyed by an insertion sequence number, so iteration order
/// is insertion order and removal does not shift anything. `index` maps an entity id to
/// its sequence number.
///
/// Invariant: `next_id` is strictly greater than every id ever inserted, removed ones
/// included. Ids are therefore never handed out twice. `None` means an id of `u64::MAX`
/// has been inserted and no id is left to allocate.
#[derive(Debug)]
pub(crate) struct EntityStore<T: ActorEntity> {
    entries: BTreeMap<u64, T>,
    index: HashMap<T::Id, u64>,
    next_seq: u64,
    next_id: Option<u64>,
}

impl<T: ActorEntity> EntityStore<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 0,
            next_id: Some(1),
        }
    }

    /// Builds a store from seed records, keeping their order.
    ///
    /// The counter starts one past the highest seed id. A seed id of `u64::MAX` leaves
    /// nothing to allocate and is rejected with [`FrameworkError::IdSpaceExhausted`].
    pub(crate) fn seeded(seed: impl IntoIterator<Item = T>) -> Result<Self, FrameworkError> {
        let mut store = Self::new();
        for item in seed {
            let id = item.id();
            if store.index.contains_key(&id) {
                return Err(FrameworkError::DuplicateId(id.to_string()));
            }
            store.insert(item);
        }
        store.next_id()?;
        Ok(store)
    }

    /// The id the next successful create will receive. Does not advance the counter.
    pub(crate) fn next_id(&self) -> Result<T::Id, FrameworkError> {
        self.next_id
            .map(T::Id::from)
            .ok_or(FrameworkError::IdSpaceExhausted)
    }

    /// Appends `item` at the end of iteration order and advances the counter past its id.
    ///
    /// Callers must not insert an id that is already present.
    pub(crate) fn insert(&mut self, item: T) {
        let id = item.id();
        let raw: u64 = id.into();
        self.next_id = match (self.next_id, raw.checked_add(1)) {
            (Some(current), Some(after)) => Some(current.max(after)),
            _ => None,
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(id, seq);
        self.entries.insert(seq, item);
    }

    pub(crate) fn get(&self, id: &T::Id) -> Option<&T> {
        self.index.get(id).and_then(|seq| self.entries.get(seq))
    }

    /// Overwrites the record with the same id in place, keeping its position.
    /// Returns `false` if no such record exists.
    pub(crate) fn replace(&mut self, item: T) -> bool {
        match self.index.get(&item.id()) {
            Some(seq) => {
                self.entries.insert(*seq, item);
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: &T::Id) -> Option<T> {
        let seq = self.index.remove(id)?;
        self.entries.remove(&seq)
    }

    /// Owned copy of every record in insertion order.
    pub(crate) fn snapshot(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
