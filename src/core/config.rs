//! Settlement configuration
//!
//! Every tuning constant of the simulation lives here. `Default` carries the
//! stock Heritage Village values; a TOML file can override any section.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::city::building::{BuildingCost, BuildingType};
use crate::city::stockpile::{ResourceDelta, ResourcePool, MAX_HAPPINESS};
use crate::core::error::{Result, VillageError};

/// Day/night clock settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Time of day at start/reset, in [0, 1)
    pub initial_time_of_day: f64,
    /// Season advance per completed day
    pub season_step: f64,
    /// Fraction of a day that passes per second of frame time
    ///
    /// At 0.02 a full day takes 50 seconds.
    pub day_speed: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            initial_time_of_day: 0.25,
            season_step: 0.01,
            day_speed: 0.02,
        }
    }
}

/// Resource economy constants used by the tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Scales summed benefits into per-tick accrual (k)
    pub accrual_rate: f64,
    /// Food eaten per unit of population, before scaling by k
    pub food_per_capita: f64,
    /// Happiness with no happiness-producing buildings
    pub base_happiness: f64,
    /// Happiness gained per point of summed happiness benefit
    pub happiness_weight: f64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            accrual_rate: 0.01,
            food_per_capita: 0.5,
            base_happiness: 50.0,
            happiness_weight: 0.5,
        }
    }
}

/// Ground grid used by the input layer to snap placements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub cell_size: f32,
    /// Placements must satisfy |x| < half_extent and |z| < half_extent
    pub half_extent: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            cell_size: 2.0,
            half_extent: 40.0,
        }
    }
}

/// Cost and benefit of one building type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingSpec {
    pub cost: BuildingCost,
    pub benefit: ResourceDelta,
}

impl BuildingSpec {
    pub fn of(building_type: BuildingType) -> Self {
        Self {
            cost: building_type.default_cost(),
            benefit: building_type.default_benefit(),
        }
    }
}

/// Cost/benefit table, one entry per building type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingTable {
    pub home: BuildingSpec,
    pub farm: BuildingSpec,
    pub workshop: BuildingSpec,
    pub well: BuildingSpec,
}

impl Default for BuildingTable {
    fn default() -> Self {
        Self {
            home: BuildingSpec::of(BuildingType::Home),
            farm: BuildingSpec::of(BuildingType::Farm),
            workshop: BuildingSpec::of(BuildingType::Workshop),
            well: BuildingSpec::of(BuildingType::Well),
        }
    }
}

impl BuildingTable {
    pub fn get(&self, building_type: BuildingType) -> &BuildingSpec {
        match building_type {
            BuildingType::Home => &self.home,
            BuildingType::Farm => &self.farm,
            BuildingType::Workshop => &self.workshop,
            BuildingType::Well => &self.well,
        }
    }
}

/// Full configuration of a settlement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementConfig {
    /// Resource pool at start/reset
    pub start: ResourcePool,
    pub clock: ClockConfig,
    pub economy: EconomyConfig,
    pub placement: PlacementConfig,
    pub buildings: BuildingTable,
}

impl SettlementConfig {
    pub fn cost(&self, building_type: BuildingType) -> BuildingCost {
        self.buildings.get(building_type).cost
    }

    pub fn benefit(&self, building_type: BuildingType) -> ResourceDelta {
        self.buildings.get(building_type).benefit
    }

    /// Load and validate a configuration from a TOML file
    pub fn load_from_toml(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a configuration from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: SettlementConfig =
            toml::from_str(content).map_err(|e| VillageError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| VillageError::ConfigParse(e.to_string()))
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let start = &self.start;
        let start_fields = [
            ("start.wood", start.wood),
            ("start.stone", start.stone),
            ("start.food", start.food),
            ("start.population", start.population),
            ("start.happiness", start.happiness),
        ];
        for (name, value) in start_fields {
            if !is_non_negative(value) {
                return invalid(format!("{name} must be non-negative, got {value}"));
            }
        }
        if start.happiness > MAX_HAPPINESS {
            return invalid(format!(
                "start.happiness must be at most {MAX_HAPPINESS}, got {}",
                start.happiness
            ));
        }

        let t = self.clock.initial_time_of_day;
        if !(0.0..1.0).contains(&t) {
            return invalid(format!("clock.initial_time_of_day must be in [0, 1), got {t}"));
        }
        if !is_non_negative(self.clock.season_step) || !is_non_negative(self.clock.day_speed) {
            return invalid("clock rates must be non-negative".to_string());
        }

        let economy = &self.economy;
        let economy_fields = [
            ("economy.accrual_rate", economy.accrual_rate),
            ("economy.food_per_capita", economy.food_per_capita),
            ("economy.base_happiness", economy.base_happiness),
            ("economy.happiness_weight", economy.happiness_weight),
        ];
        for (name, value) in economy_fields {
            if !is_non_negative(value) {
                return invalid(format!("{name} must be non-negative, got {value}"));
            }
        }

        if self.placement.cell_size.is_nan() || self.placement.cell_size <= 0.0 {
            return invalid(format!(
                "placement.cell_size must be positive, got {}",
                self.placement.cell_size
            ));
        }
        if self.placement.half_extent.is_nan() || self.placement.half_extent <= 0.0 {
            return invalid(format!(
                "placement.half_extent must be positive, got {}",
                self.placement.half_extent
            ));
        }

        for building_type in BuildingType::ALL {
            let spec = self.buildings.get(building_type);
            if !spec.cost.is_non_negative() {
                return invalid(format!("buildings.{building_type}.cost must be non-negative"));
            }
            if !spec.benefit.is_non_negative() {
                return invalid(format!(
                    "buildings.{building_type}.benefit must be non-negative"
                ));
            }
        }

        Ok(())
    }
}

fn is_non_negative(value: f64) -> bool {
    !value.is_nan() && value >= 0.0
}

fn invalid(message: String) -> Result<()> {
    Err(VillageError::InvalidConfig(message))
}
