// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algo::GraphProjection;
use krona_common::{Edge, Graph, Vertex, VertexId};

/// Assemble a graph value from bare ids and id pairs.
pub fn build_graph(ids: &[u32], edges: &[(u32, u32)], directed: bool) -> Graph {
    let vertices = ids
        .iter()
        .map(|&id| Vertex::new(VertexId::new(id)))
        .collect();
    let edges = edges
        .iter()
        .map(|&(source, target)| Edge::new(VertexId::new(source), VertexId::new(target)))
        .collect();
    Graph::new(directed, vertices, edges)
}

pub fn build_projection(ids: &[u32], edges: &[(u32, u32)], directed: bool) -> GraphProjection {
    GraphProjection::build(&build_graph(ids, edges, directed)).expect("test graph is consistent")
}

/// K(n,n) minus a perfect matching on parts {0..n} and {n..2n}, with
/// vertex i missing partner n + i.
pub fn crown_graph(n: u32) -> Graph {
    let ids: Vec<u32> = (0..2 * n).collect();
    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i != j {
                edges.push((i, n + j));
            }
        }
    }
    build_graph(&ids, &edges, false)
}
