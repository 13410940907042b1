// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// External vertex identifier.
///
/// Ids are opaque to every algorithm: the projection layer maps them
/// bijectively to a dense 0-based slot range once, at the boundary, so no
/// algorithm code ever treats the numeric value as an array index. Loaders
/// pass ids through unshifted regardless of whether a source file numbers
/// its vertices from 0 or from 1.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for VertexId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VertexId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let id: u32 = s
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid vertex id '{}': {}", s, e))?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let id: VertexId = "42".parse().unwrap();
        assert_eq!(id.as_u32(), 42);

        // Round-trip through Display and FromStr
        let original = VertexId::new(7);
        let s = original.to_string();
        let parsed: VertexId = s.parse().unwrap();
        assert_eq!(original, parsed);

        // Error cases
        assert!("abc".parse::<VertexId>().is_err());
        assert!("-1".parse::<VertexId>().is_err());
        assert!("".parse::<VertexId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let id = VertexId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");

        let back: VertexId = serde_json::from_str("3").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ordering() {
        assert!(VertexId::new(1) < VertexId::new(2));
    }
}
