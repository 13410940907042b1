// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph loaders.
//!
//! Two entry points produce the same fully-materialized
//! [`Graph`](krona_common::Graph) value: a line-oriented text format and
//! an equivalent JSON document. The checker downstream is agnostic to
//! which loader supplied the graph.

pub mod json;
pub mod text;

pub use json::{graph_from_json_str, load_graph_from_json};
pub use text::{load_graph_from_file, parse_graph};
