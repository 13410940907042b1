// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Plain data holders for a source graph.
//!
//! These types mirror the wire formats the loaders consume: declared
//! vertex/edge counts, a directedness flag, and vertex/edge collections
//! with cosmetic attributes. The declared counts are assumed, not
//! re-validated, to match the supplied collections. No algorithm
//! interprets the cosmetic fields.

use crate::core::id::VertexId;
use serde::{Deserialize, Serialize};

/// Cosmetic color tag on vertices and edges.
///
/// Parsed and carried through for fidelity with the source format,
/// ignored by every algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    #[serde(alias = "GRAY")]
    Gray,
    #[serde(alias = "RED")]
    Red,
    #[serde(alias = "BLUE")]
    Blue,
    #[serde(alias = "GREEN")]
    Green,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vertex {
    pub id: VertexId,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub weight: Option<i32>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub x_coordinate: f64,
    #[serde(default)]
    pub y_coordinate: f64,
}

impl Vertex {
    /// A vertex with default cosmetic attributes.
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            color: Color::default(),
            weight: None,
            label: String::new(),
            x_coordinate: 0.0,
            y_coordinate: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub weight: Option<i32>,
    #[serde(default)]
    pub label: String,
}

impl Edge {
    /// An edge with default cosmetic attributes.
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Self {
            source,
            target,
            color: Color::default(),
            weight: None,
            label: String::new(),
        }
    }
}

/// A fully-materialized source graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    pub vertex_count: usize,
    pub edge_count: usize,
    #[serde(rename = "isDirect")]
    pub directed: bool,
    #[serde(rename = "vertexList")]
    pub vertices: Vec<Vertex>,
    #[serde(rename = "edgeList")]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph whose declared counts match the supplied collections.
    pub fn new(directed: bool, vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self {
            vertex_count: vertices.len(),
            edge_count: edges.len(),
            directed,
            vertices,
            edges,
        }
    }

    pub fn undirected(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self::new(false, vertices, edges)
    }
}
