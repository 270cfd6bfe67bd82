//! Resource-generation tick
//!
//! One call per rendered frame. Wood, stone and food accrue slowly from the
//! summed building benefits; population and happiness are recomputed from
//! scratch every tick rather than accumulated.

use serde::{Deserialize, Serialize};

use crate::city::building::Building;
use crate::city::stockpile::{ResourceDelta, ResourcePool, MAX_HAPPINESS};
use crate::core::config::SettlementConfig;

/// What a single tick computed, for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Benefits summed across all built buildings (unscaled)
    pub production: ResourceDelta,
    /// Food eaten by the population present before the tick (unscaled)
    pub food_consumed: f64,
    /// `production.food - food_consumed` (unscaled)
    pub net_food: f64,
}

/// Sum the per-tick benefit of every built building
pub fn sum_benefits<'a>(
    buildings: impl IntoIterator<Item = &'a Building>,
    config: &SettlementConfig,
) -> ResourceDelta {
    let mut total = ResourceDelta::default();
    for building in buildings.into_iter().filter(|b| b.built) {
        total += config.benefit(building.building_type);
    }
    total
}

/// Run one resource tick against `pool`
///
/// 1. sum benefits of built buildings
/// 2. consumption = population (pre-tick) * food_per_capita
/// 3. wood/stone/food += benefit * k (food uses the net of consumption)
/// 4. population := summed population benefit (overwrite)
/// 5. happiness := clamp(base + summed happiness * weight, 0, 100)
pub fn run_resource_tick(
    pool: &mut ResourcePool,
    buildings: &[Building],
    config: &SettlementConfig,
) -> TickReport {
    let economy = &config.economy;
    let k = economy.accrual_rate;

    let production = sum_benefits(buildings, config);
    let food_consumed = pool.population * economy.food_per_capita;
    let net_food = production.food - food_consumed;

    pool.wood += production.wood * k;
    pool.stone += production.stone * k;
    pool.food += net_food * k;
    pool.population = production.population;
    pool.happiness = (economy.base_happiness + production.happiness * economy.happiness_weight)
        .clamp(0.0, MAX_HAPPINESS);
    pool.clamp();

    tracing::trace!(
        wood = production.wood,
        stone = production.stone,
        food = production.food,
        population = production.population,
        net_food,
        "resource tick"
    );

    TickReport {
        production,
        food_consumed,
        net_food,
    }
}
