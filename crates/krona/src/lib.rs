// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! # Krona - Crown Graph Recognition
//!
//! Krona determines whether a graph is a crown graph: a graph on 2n
//! vertices isomorphic to the complete bipartite graph K(n,n) with a
//! perfect matching removed.
//!
//! ```no_run
//! # fn main() -> krona::Result<()> {
//! let graph = krona::load_graph_from_file("graph.txt")?;
//! if krona::is_crown_graph(&graph)? {
//!     println!("crown graph");
//! }
//! # Ok(())
//! # }
//! ```

pub use krona_algo::{
    Algorithm, BipartiteCheck, BipartiteCheckConfig, BipartiteCheckResult, CrownCheck,
    CrownCheckConfig, CrownCheckResult, GraphProjection, IdMap, is_crown_graph,
};
pub use krona_common::{Color, Edge, Graph, KronaError, Result, Vertex, VertexId};
pub use krona_load::{graph_from_json_str, load_graph_from_file, load_graph_from_json, parse_graph};

// Re-export crates
pub use krona_algo as algo;
pub use krona_common as common;
pub use krona_load as load;
