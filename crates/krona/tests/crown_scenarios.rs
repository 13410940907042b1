// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! End-to-end crown detection scenarios on in-memory graph values.

use krona::{Edge, Graph, KronaError, Vertex, VertexId, is_crown_graph};

fn graph(directed: bool, ids: &[u32], pairs: &[(u32, u32)]) -> Graph {
    let vertices = ids
        .iter()
        .map(|&id| Vertex::new(VertexId::new(id)))
        .collect();
    let edges = pairs
        .iter()
        .map(|&(s, t)| Edge::new(VertexId::new(s), VertexId::new(t)))
        .collect();
    Graph::new(directed, vertices, edges)
}

/// K(n,n) minus a perfect matching on 1-based ids: parts {1..=n} and
/// {n+1..=2n}, vertex i missing partner n + i.
fn crown(n: u32) -> Graph {
    let ids: Vec<u32> = (1..=2 * n).collect();
    let mut pairs = Vec::new();
    for i in 1..=n {
        for j in 1..=n {
            if i != j {
                pairs.push((i, n + j));
            }
        }
    }
    graph(false, &ids, &pairs)
}

#[test]
fn empty_graph_is_not_a_crown() {
    assert!(!is_crown_graph(&graph(false, &[], &[])).unwrap());
}

#[test]
fn two_vertices_without_edges_are_a_crown() {
    // K(1,1) minus its only matching edge.
    assert!(is_crown_graph(&graph(false, &[1, 2], &[])).unwrap());
}

#[test]
fn four_vertex_crown() {
    // K(2,2) on parts {1,2} / {3,4} minus the matching {1-3, 2-4}.
    let g = graph(false, &[1, 2, 3, 4], &[(1, 4), (2, 3)]);
    assert!(is_crown_graph(&g).unwrap());
}

#[test]
fn extra_edge_beyond_the_crown_count_is_rejected() {
    let g = graph(false, &[1, 2, 3, 4], &[(1, 4), (2, 3), (1, 3)]);
    assert!(!is_crown_graph(&g).unwrap());
}

#[test]
fn odd_vertex_counts_are_always_rejected() {
    let cases: [&[u32]; 3] = [&[1], &[1, 2, 3], &[1, 2, 3, 4, 5]];
    for ids in cases {
        assert!(!is_crown_graph(&graph(false, ids, &[])).unwrap());
    }
}

#[test]
fn wrong_edge_count_is_rejected_before_traversal() {
    // 6 vertices want n*(n-1) = 6 edges; C6 alone has 6 but a path has 5.
    let g = graph(false, &[1, 2, 3, 4, 5, 6], &[(1, 2), (2, 3), (3, 4), (4, 5)]);
    assert!(!is_crown_graph(&g).unwrap());
}

#[test]
fn non_bipartite_graph_is_rejected() {
    // Two triangles: 6 vertices, 6 edges, odd cycles.
    let g = graph(
        false,
        &[1, 2, 3, 4, 5, 6],
        &[(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)],
    );
    assert!(!is_crown_graph(&g).unwrap());
}

#[test]
fn directed_graph_with_crown_skeleton_is_rejected() {
    let g = graph(true, &[1, 2, 3, 4], &[(1, 4), (2, 3)]);
    assert!(!is_crown_graph(&g).unwrap());
}

#[test]
fn crown_graphs_hold_for_every_small_n() {
    for n in 2..=10 {
        assert!(is_crown_graph(&crown(n)).unwrap(), "n = {n}");
    }
}

#[test]
fn six_vertex_crown_is_the_hexagon() {
    // K(3,3) minus a perfect matching is C6.
    let g = graph(
        false,
        &[1, 2, 3, 4, 5, 6],
        &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1)],
    );
    assert!(is_crown_graph(&g).unwrap());
}

#[test]
fn permuting_vertex_ids_preserves_the_result() {
    // crown(4) relabeled through an arbitrary bijection.
    let relabel = |id: u32| id * 13 % 23 + 100;
    let base = crown(4);
    let ids: Vec<u32> = base.vertices.iter().map(|v| relabel(v.id.as_u32())).collect();
    let pairs: Vec<(u32, u32)> = base
        .edges
        .iter()
        .map(|e| (relabel(e.source.as_u32()), relabel(e.target.as_u32())))
        .collect();
    assert!(is_crown_graph(&graph(false, &ids, &pairs)).unwrap());
}

#[test]
fn degree_deficient_vertex_is_rejected() {
    // Bipartite with equal parts and the right edge total, but vertex 1
    // misses two of the opposite part instead of one.
    let g = graph(
        false,
        &[1, 2, 3, 4, 5, 6],
        &[(1, 4), (2, 4), (2, 5), (2, 6), (3, 5), (3, 6)],
    );
    assert!(!is_crown_graph(&g).unwrap());
}

#[test]
fn shared_missing_partner_is_rejected() {
    // Vertices 1 and 2 both miss 6; the removed edges are not a matching.
    let g = graph(
        false,
        &[1, 2, 3, 4, 5, 6],
        &[(1, 4), (1, 5), (2, 4), (2, 5), (3, 5), (3, 6)],
    );
    assert!(!is_crown_graph(&g).unwrap());
}

#[test]
fn isolated_vertices_beyond_the_trivial_crown_are_rejected() {
    // 4 isolated vertices: wants 2 edges, has none.
    assert!(!is_crown_graph(&graph(false, &[1, 2, 3, 4], &[])).unwrap());
}

#[test]
fn inconsistent_structure_is_a_fault_not_a_verdict() {
    let g = graph(false, &[1, 2], &[(1, 7)]);
    match is_crown_graph(&g) {
        Err(KronaError::UnknownVertex { id }) => assert_eq!(id, VertexId::new(7)),
        other => panic!("expected UnknownVertex fault, got {:?}", other),
    }
}

#[test]
fn self_loop_fails_the_check_without_crashing() {
    // 4 vertices, declared edge total matches n*(n-1) = 2, one edge is a
    // self-loop.
    let g = graph(false, &[1, 2, 3, 4], &[(1, 1), (2, 3)]);
    assert!(!is_crown_graph(&g).unwrap());
}

#[test]
fn parallel_edges_fail_the_check_without_crashing() {
    // The duplicate collapses in adjacency but still counts toward the
    // declared total, so the structure walk sees a missing edge.
    let g = graph(false, &[1, 2, 3, 4], &[(1, 4), (1, 4)]);
    assert!(!is_crown_graph(&g).unwrap());
}
