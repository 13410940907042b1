// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Identity mapping between external vertex ids and dense algorithm slots.
//!
//! Graph algorithms require dense integer indices (0..V) for efficient
//! array-based state storage. Source graphs carry arbitrary external ids
//! (0-based, 1-based, or sparse). This module provides bidirectional
//! mapping between the two representations, performed once at the
//! projection boundary.

use fxhash::FxHashMap;
use krona_common::VertexId;

/// Bidirectional mapping between external vertex ids and dense slots.
///
/// # Example
///
/// ```ignore
/// let mut id_map = IdMap::new();
/// id_map.insert(VertexId::new(10));  // slot 0
/// id_map.insert(VertexId::new(20));  // slot 1
///
/// assert_eq!(id_map.to_slot(VertexId::new(10)), Some(0));
/// assert_eq!(id_map.to_vertex_id(0), Some(VertexId::new(10)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    /// Dense slot -> external id
    slot_to_id: Vec<VertexId>,
    /// External id -> dense slot
    id_to_slot: FxHashMap<VertexId, u32>,
}

impl IdMap {
    /// Create an empty ID map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an ID map with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slot_to_id: Vec::with_capacity(capacity),
            id_to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert an id and return its slot.
    ///
    /// If the id already exists, returns the existing slot. Slots are
    /// allocated in insertion order.
    pub fn insert(&mut self, id: VertexId) -> u32 {
        if let Some(&slot) = self.id_to_slot.get(&id) {
            return slot;
        }

        let slot = self.slot_to_id.len() as u32;
        self.slot_to_id.push(id);
        self.id_to_slot.insert(id, slot);
        slot
    }

    /// Get the slot for an id.
    #[inline]
    pub fn to_slot(&self, id: VertexId) -> Option<u32> {
        self.id_to_slot.get(&id).copied()
    }

    /// Get the id for a slot.
    #[inline]
    pub fn to_vertex_id(&self, slot: u32) -> Option<VertexId> {
        self.slot_to_id.get(slot as usize).copied()
    }

    /// Get the id for a slot (panics if out of bounds).
    #[inline]
    pub fn to_vertex_id_unchecked(&self, slot: u32) -> VertexId {
        self.slot_to_id[slot as usize]
    }

    /// Number of mapped vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.slot_to_id.len()
    }

    /// Whether the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot_to_id.is_empty()
    }

    /// Iterate over all (slot, id) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, VertexId)> + '_ {
        self.slot_to_id
            .iter()
            .enumerate()
            .map(|(slot, &id)| (slot as u32, id))
    }
}

impl FromIterator<VertexId> for IdMap {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let mut map = Self::with_capacity(upper.unwrap_or(lower));

        for id in iter {
            map.insert(id);
        }

        map
    }
}
