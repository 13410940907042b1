// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Algorithm Engine
//!
//! This module provides the algorithm implementations for krona.
//!
//! # Architecture
//!
//! Algorithms never touch the source [`Graph`](krona_common::Graph)
//! directly. A [`GraphProjection`] is materialized first: external vertex
//! ids are mapped to dense slots (0..V) and the edge list becomes
//! per-vertex neighbor sets. Every algorithm state array is indexed by
//! slot; results are mapped back to external ids on the way out.
//!
//! # Example
//!
//! ```ignore
//! use krona_algo::{Algorithm, CrownCheck, CrownCheckConfig, GraphProjection};
//!
//! let projection = GraphProjection::build(&graph)?;
//! let result = CrownCheck::run(&projection, CrownCheckConfig::default());
//! ```

mod id_map;
pub mod projection;

pub mod algorithms;

pub use id_map::IdMap;
pub use projection::GraphProjection;

#[cfg(test)]
pub mod test_utils;

use algorithms::{Algorithm, CrownCheck, CrownCheckConfig};
use krona_common::{Graph, Result};

/// Check whether a graph is a crown graph.
///
/// A crown graph on 2n vertices is the complete bipartite graph K(n,n)
/// with a perfect matching removed. Every structurally disqualifying
/// input (empty, odd vertex count, wrong edge count, directed,
/// non-bipartite, unequal parts) yields `Ok(false)`, never an error.
///
/// # Errors
///
/// [`KronaError::UnknownVertex`](krona_common::KronaError) if an edge
/// references a vertex id absent from the vertex collection. That is a
/// contract violation by the upstream loader and is deliberately kept
/// apart from the legitimate `Ok(false)` outcome.
pub fn is_crown_graph(graph: &Graph) -> Result<bool> {
    let projection = GraphProjection::build(graph)?;
    let result = CrownCheck::run(&projection, CrownCheckConfig::default());
    Ok(result.is_crown)
}
