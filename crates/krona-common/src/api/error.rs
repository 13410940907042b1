// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::core::id::VertexId;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KronaError {
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        line: Option<usize>,
    },

    /// An edge references a vertex id absent from the vertex collection.
    ///
    /// This is a contract violation by the upstream loader, not a property
    /// of the graph: callers must treat it as a fault, never as "not a
    /// crown graph".
    #[error("Inconsistent graph structure: edge references unknown vertex {id}")]
    UnknownVertex { id: VertexId },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, KronaError>;
