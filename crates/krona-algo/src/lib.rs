// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::algorithms::{
    Algorithm, BipartiteCheck, BipartiteCheckConfig, BipartiteCheckResult, CrownCheck,
    CrownCheckConfig, CrownCheckResult,
};
pub use algo::projection::GraphProjection;
pub use algo::{IdMap, is_crown_graph};
