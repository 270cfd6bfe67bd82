//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// World-space placement coordinate (x, y, z)
///
/// The ground plane is y = 0; the engine stores whatever the caller hands it.
pub type Position = glam::Vec3;

/// Unique building identifier
///
/// Allocated from a per-engine counter that is never rewound, so ids stay
/// unique even across a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BuildingId(pub u64);

impl BuildingId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BuildingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::str::FromStr for BuildingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse::<u64>().map(BuildingId)
    }
}
