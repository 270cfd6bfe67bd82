//! Stockpile - settlement-level resource pool

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use crate::city::building::BuildingCost;

/// Upper bound on happiness; every other field is unbounded above
pub const MAX_HAPPINESS: f64 = 100.0;

/// The five tracked quantities of a settlement
///
/// Invariant: every field >= 0 and `happiness` <= MAX_HAPPINESS. All
/// mutators re-establish it before returning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePool {
    pub wood: f64,
    pub stone: f64,
    pub food: f64,
    pub population: f64,
    pub happiness: f64,
}

impl Default for ResourcePool {
    fn default() -> Self {
        Self {
            wood: 50.0,
            stone: 30.0,
            food: 40.0,
            population: 5.0,
            happiness: 50.0,
        }
    }
}

/// Signed change to a pool, also used for per-building benefits
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceDelta {
    pub wood: f64,
    pub stone: f64,
    pub food: f64,
    pub population: f64,
    pub happiness: f64,
}

impl AddAssign for ResourceDelta {
    fn add_assign(&mut self, rhs: Self) {
        self.wood += rhs.wood;
        self.stone += rhs.stone;
        self.food += rhs.food;
        self.population += rhs.population;
        self.happiness += rhs.happiness;
    }
}

impl ResourceDelta {
    pub fn is_non_negative(&self) -> bool {
        self.wood >= 0.0
            && self.stone >= 0.0
            && self.food >= 0.0
            && self.population >= 0.0
            && self.happiness >= 0.0
    }
}

impl ResourcePool {
    pub fn new(wood: f64, stone: f64, food: f64, population: f64, happiness: f64) -> Self {
        let mut pool = Self {
            wood,
            stone,
            food,
            population,
            happiness,
        };
        pool.clamp();
        pool
    }

    /// Check if the pool holds at least the wood, stone and food in `cost`
    pub fn can_afford(&self, cost: &BuildingCost) -> bool {
        self.wood >= cost.wood && self.stone >= cost.stone && self.food >= cost.food
    }

    /// What is still missing to afford `cost` (all zero when affordable)
    pub fn shortfall(&self, cost: &BuildingCost) -> BuildingCost {
        BuildingCost {
            wood: (cost.wood - self.wood).max(0.0),
            stone: (cost.stone - self.stone).max(0.0),
            food: (cost.food - self.food).max(0.0),
        }
    }

    /// Pay `cost` in full, returns false and leaves the pool untouched if
    /// it cannot be afforded
    pub fn spend(&mut self, cost: &BuildingCost) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.wood -= cost.wood;
        self.stone -= cost.stone;
        self.food -= cost.food;
        true
    }

    /// Add a signed delta to every field, then clamp
    pub fn apply_delta(&mut self, delta: &ResourceDelta) {
        self.wood += delta.wood;
        self.stone += delta.stone;
        self.food += delta.food;
        self.population += delta.population;
        self.happiness += delta.happiness;
        self.clamp();
    }

    /// Restore the pool invariant
    pub fn clamp(&mut self) {
        self.wood = non_negative(self.wood);
        self.stone = non_negative(self.stone);
        self.food = non_negative(self.food);
        self.population = non_negative(self.population);
        self.happiness = non_negative(self.happiness).min(MAX_HAPPINESS);
    }

    pub fn is_valid(&self) -> bool {
        self.wood >= 0.0
            && self.stone >= 0.0
            && self.food >= 0.0
            && self.population >= 0.0
            && (0.0..=MAX_HAPPINESS).contains(&self.happiness)
    }
}

/// `max(0)` that also maps NaN to zero
fn non_negative(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}
