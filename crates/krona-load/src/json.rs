// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! JSON loader.
//!
//! Deserializes the JSON equivalent of the text format into a
//! [`Graph`](krona_common::Graph). The document carries `vertexCount`,
//! `edgeCount`, `isDirect`, `vertexList`, and `edgeList`; extra envelope
//! fields (`id`, `isNamed`, `name`) are ignored.

use krona_common::{Graph, KronaError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a graph from a JSON file.
pub fn load_graph_from_json(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let graph = graph_from_json_str(&text)?;
    debug!(
        path = %path.display(),
        vertices = graph.vertex_count,
        edges = graph.edge_count,
        directed = graph.directed,
        "loaded graph from JSON file"
    );
    Ok(graph)
}

/// Parse a graph from an in-memory JSON document.
pub fn graph_from_json_str(text: &str) -> Result<Graph> {
    serde_json::from_str(text).map_err(|e| KronaError::Parse {
        message: format!("invalid graph JSON: {}", e),
        line: Some(e.line()).filter(|&l| l > 0),
    })
}
