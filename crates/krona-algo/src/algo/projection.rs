// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Dense projection of a source graph for algorithm execution.
//!
//! A `GraphProjection` is a materialized, algorithm-optimized view of one
//! source graph. It provides:
//! - Dense vertex indexing (0..V) for efficient array-based state
//! - Per-vertex neighbor sets (parallel edges collapse by construction)
//! - The declared edge count and directedness flag for arithmetic filters

use crate::algo::IdMap;
use fxhash::FxHashSet;
use krona_common::{Graph, KronaError, Result, VertexId};

/// Algorithm-facing adjacency view of one source graph.
///
/// Built fresh for every check and owning all of its state, so concurrent
/// checks on independent graphs cannot interfere.
#[derive(Debug)]
pub struct GraphProjection {
    /// Number of vertices in the projection
    vertex_count: usize,

    /// Edge count as declared by the source graph (undirected edges
    /// counted once, not doubled).
    edge_count: usize,

    /// Directedness flag carried over from the source graph.
    directed: bool,

    /// Neighbor sets indexed by slot.
    neighbors: Vec<FxHashSet<u32>>,

    /// Identity mapping
    id_map: IdMap,
}

impl GraphProjection {
    /// Build a projection from a source graph.
    ///
    /// Every declared vertex is registered before any edge is added, so a
    /// vertex with no incident edges still gets an (empty) neighbor set.
    /// For each edge the target joins the source's neighbor set; for
    /// undirected graphs the reverse direction is inserted as well.
    /// Self-loops and parallel edges are not rejected here: a parallel
    /// edge collapses in the set while still counting toward the declared
    /// edge total, and a self-loop flows through to the structural checks
    /// downstream.
    ///
    /// # Errors
    ///
    /// [`KronaError::UnknownVertex`] if an edge endpoint was never
    /// declared in the vertex collection. That is a contract violation by
    /// the upstream loader, kept apart from any "not a crown graph"
    /// outcome.
    pub fn build(graph: &Graph) -> Result<Self> {
        let mut id_map = IdMap::with_capacity(graph.vertices.len());
        for vertex in &graph.vertices {
            id_map.insert(vertex.id);
        }
        let vertex_count = id_map.len();
        let mut neighbors = vec![FxHashSet::default(); vertex_count];

        for edge in &graph.edges {
            let src = id_map
                .to_slot(edge.source)
                .ok_or(KronaError::UnknownVertex { id: edge.source })?;
            let dst = id_map
                .to_slot(edge.target)
                .ok_or(KronaError::UnknownVertex { id: edge.target })?;

            neighbors[src as usize].insert(dst);
            if !graph.directed {
                neighbors[dst as usize].insert(src);
            }
        }

        Ok(Self {
            vertex_count,
            edge_count: graph.edge_count,
            directed: graph.directed,
            neighbors,
            id_map,
        })
    }

    /// Number of vertices in the projection.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Edge count as declared by the source graph.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the source graph was directed.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Neighbor set of a vertex (by slot).
    #[inline]
    pub fn neighbors(&self, slot: u32) -> &FxHashSet<u32> {
        &self.neighbors[slot as usize]
    }

    /// Degree of a vertex (by slot).
    #[inline]
    pub fn degree(&self, slot: u32) -> usize {
        self.neighbors[slot as usize].len()
    }

    /// Map slot back to external id.
    #[inline]
    pub fn to_vertex_id(&self, slot: u32) -> VertexId {
        self.id_map.to_vertex_id_unchecked(slot)
    }

    /// Map external id to slot.
    #[inline]
    pub fn to_slot(&self, id: VertexId) -> Option<u32> {
        self.id_map.to_slot(id)
    }

    /// Iterate over all vertices as (slot, id).
    pub fn vertices(&self) -> impl Iterator<Item = (u32, VertexId)> + '_ {
        self.id_map.iter()
    }
}
