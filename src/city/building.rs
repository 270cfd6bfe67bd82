//! Building types and placed building instances

use serde::{Deserialize, Serialize};

use crate::city::stockpile::ResourceDelta;
use crate::core::error::VillageError;
use crate::core::types::{BuildingId, Position};

/// Health a freshly placed building starts with
pub const FULL_HEALTH: f64 = 100.0;

/// Type of building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    Home,
    Farm,
    Workshop,
    Well,
}

impl BuildingType {
    pub const ALL: [BuildingType; 4] = [
        BuildingType::Home,
        BuildingType::Farm,
        BuildingType::Workshop,
        BuildingType::Well,
    ];

    /// Materials paid once when the building is placed
    pub fn default_cost(&self) -> BuildingCost {
        match self {
            BuildingType::Home => BuildingCost::new(20.0, 10.0, 0.0),
            BuildingType::Farm => BuildingCost::new(15.0, 5.0, 0.0),
            BuildingType::Workshop => BuildingCost::new(25.0, 15.0, 0.0),
            BuildingType::Well => BuildingCost::new(10.0, 20.0, 0.0),
        }
    }

    /// Per-tick contribution of one built instance
    pub fn default_benefit(&self) -> ResourceDelta {
        match self {
            BuildingType::Home => ResourceDelta {
                population: 5.0,
                happiness: 2.0,
                ..Default::default()
            },
            BuildingType::Farm => ResourceDelta {
                food: 10.0,
                ..Default::default()
            },
            BuildingType::Workshop => ResourceDelta {
                wood: 3.0,
                stone: 2.0,
                ..Default::default()
            },
            BuildingType::Well => ResourceDelta {
                happiness: 5.0,
                ..Default::default()
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuildingType::Home => "home",
            BuildingType::Farm => "farm",
            BuildingType::Workshop => "workshop",
            BuildingType::Well => "well",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingType::Home => "Home",
            BuildingType::Farm => "Farm",
            BuildingType::Workshop => "Workshop",
            BuildingType::Well => "Well",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BuildingType::Home => "Houses +5 people",
            BuildingType::Farm => "Produces food",
            BuildingType::Workshop => "Generates wood and stone",
            BuildingType::Well => "Increases happiness",
        }
    }
}

impl std::fmt::Display for BuildingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BuildingType {
    type Err = VillageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" | "house" => Ok(BuildingType::Home),
            "farm" => Ok(BuildingType::Farm),
            "workshop" => Ok(BuildingType::Workshop),
            "well" => Ok(BuildingType::Well),
            _ => Err(VillageError::UnknownBuildingType(s.to_string())),
        }
    }
}

/// One-time price of a building
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingCost {
    pub wood: f64,
    pub stone: f64,
    pub food: f64,
}

impl BuildingCost {
    pub fn new(wood: f64, stone: f64, food: f64) -> Self {
        Self { wood, stone, food }
    }

    pub fn is_non_negative(&self) -> bool {
        self.wood >= 0.0 && self.stone >= 0.0 && self.food >= 0.0
    }
}

/// A placed building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub building_type: BuildingType,
    pub position: Position,
    /// Always true once placed; only built buildings produce
    pub built: bool,
    /// Reserved for damage/decay; nothing reads or decrements it yet
    pub health: f64,
}

impl Building {
    pub fn new(id: BuildingId, building_type: BuildingType, position: Position) -> Self {
        Self {
            id,
            building_type,
            position,
            built: true,
            health: FULL_HEALTH,
        }
    }
}
