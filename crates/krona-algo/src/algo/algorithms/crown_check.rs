// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Crown Graph Detection.
//!
//! A crown graph on 2n vertices is the complete bipartite graph K(n,n)
//! with a perfect matching removed: each vertex of one part is adjacent
//! to all but exactly one vertex of the other part, and the missing
//! partners form a bijection.
//!
//! Stages, short-circuiting on the first failure:
//! 1. directed inputs are rejected outright (crown graphs are undirected);
//! 2. arithmetic filter: even non-zero vertex count, exactly n*(n-1) edges;
//! 3. bipartition via [`BipartiteCheck`];
//! 4. equal part sizes;
//! 5. structure walk: degree n-1 per vertex, pairwise-distinct missing
//!    partners.

use crate::algo::GraphProjection;
use crate::algo::algorithms::{
    Algorithm, BipartiteCheck, BipartiteCheckConfig, BipartiteCheckResult,
};
use fxhash::FxHashMap;
use krona_common::VertexId;

pub struct CrownCheck;

#[derive(Debug, Clone, Default)]
pub struct CrownCheckConfig {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrownCheckResult {
    pub is_crown: bool,
}

impl Algorithm for CrownCheck {
    type Config = CrownCheckConfig;
    type Result = CrownCheckResult;

    fn name() -> &'static str {
        "crown_check"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        CrownCheckResult {
            is_crown: check(graph),
        }
    }
}

fn check(graph: &GraphProjection) -> bool {
    // Crown graphs are defined over undirected graphs only.
    if graph.is_directed() {
        return false;
    }

    if !passes_basic_conditions(graph) {
        return false;
    }

    let (part_a, part_b) = match BipartiteCheck::run(graph, BipartiteCheckConfig::default()) {
        BipartiteCheckResult::Bipartite { part_a, part_b } => (part_a, part_b),
        BipartiteCheckResult::OddCycle => return false,
    };

    // The structure walk below assumes |A| == |B| == n.
    if part_a.len() != part_b.len() {
        return false;
    }

    has_crown_structure(graph, &part_a, &part_b)
}

/// Cheap arithmetic necessary conditions, run before any traversal: an
/// even, non-zero vertex count and exactly n*(n-1) declared edges, the
/// edge count of K(n,n) minus a perfect matching.
fn passes_basic_conditions(graph: &GraphProjection) -> bool {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 || vertex_count % 2 != 0 {
        return false;
    }
    let n = vertex_count / 2;
    graph.edge_count() == n * (n - 1)
}

/// Verify the complement-minus-one structure over an equal-size
/// bipartition: every vertex of part A has exactly n-1 neighbors, misses
/// exactly one vertex of part B, and no two A-vertices miss the same one
/// (the removed edges form a perfect matching).
fn has_crown_structure(
    graph: &GraphProjection,
    part_a: &[VertexId],
    part_b: &[VertexId],
) -> bool {
    let n = part_a.len();

    // Part-B slots with their positions, for the missing-partner
    // bookkeeping below.
    let mut b_positions: FxHashMap<u32, usize> = FxHashMap::default();
    for (position, &id) in part_b.iter().enumerate() {
        let slot = graph
            .to_slot(id)
            .expect("partition ids come from this projection");
        b_positions.insert(slot, position);
    }

    let mut used = vec![false; n];

    for &id in part_a {
        let slot = graph
            .to_slot(id)
            .expect("partition ids come from this projection");
        let neighbors = graph.neighbors(slot);

        // A crown vertex is adjacent to all of the opposite part but one.
        if neighbors.len() != n - 1 {
            return false;
        }

        // Exactly one part-B vertex must be missing from the neighbor set.
        let mut missing = None;
        for (&b_slot, &position) in &b_positions {
            if !neighbors.contains(&b_slot) {
                if missing.is_some() {
                    return false;
                }
                missing = Some(position);
            }
        }
        let Some(position) = missing else {
            return false;
        };

        // No partner may be missed twice.
        if used[position] {
            return false;
        }
        used[position] = true;
    }

    true
}
