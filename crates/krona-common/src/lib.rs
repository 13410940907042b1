// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod core {
    pub mod id;
}

pub mod graph {
    pub mod model;
}

// Re-exports for convenience
pub use api::error::{KronaError, Result};
pub use core::id::VertexId;
pub use graph::model::{Color, Edge, Graph, Vertex};
