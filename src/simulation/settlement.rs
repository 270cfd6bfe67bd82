//! Settlement engine - sole owner of simulation state
//!
//! Every operation is total. The only refusal is an unaffordable placement,
//! reported through `PlacementOutcome` rather than a silent no-op.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::city::building::{Building, BuildingCost, BuildingType};
use crate::city::stockpile::{ResourceDelta, ResourcePool};
use crate::core::calendar::{DayClock, DayPeriod};
use crate::core::config::SettlementConfig;
use crate::core::types::{BuildingId, Position};
use crate::simulation::tick::{run_resource_tick, TickReport};

/// Sustainability score on start/reset; nothing modifies it yet
pub const INITIAL_SUSTAINABILITY: f64 = 100.0;

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Whether the driving loop should be running frames at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
}

/// Result of a placement attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    Placed(BuildingId),
    /// Nothing changed; `missing` is what the pool lacked
    InsufficientResources { missing: BuildingCost },
}

impl PlacementOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed(_))
    }

    pub fn building_id(&self) -> Option<BuildingId> {
        match self {
            PlacementOutcome::Placed(id) => Some(*id),
            PlacementOutcome::InsufficientResources { .. } => None,
        }
    }
}

/// State changes recorded for the UI layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettlementEvent {
    Reset,
    PhaseChanged {
        from: GamePhase,
        to: GamePhase,
    },
    SelectionChanged(Option<BuildingType>),
    BuildingPlaced {
        id: BuildingId,
        building_type: BuildingType,
        position: Position,
    },
    PlacementRejected {
        building_type: BuildingType,
        missing: BuildingCost,
    },
    BuildingRemoved {
        id: BuildingId,
        building_type: BuildingType,
    },
    /// The clock wrapped past midnight `days` times in one advance
    DayCompleted { days: u64, season: f64 },
}

/// Read-only view of the engine, consistent as of the last mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementSnapshot {
    pub phase: GamePhase,
    pub resources: ResourcePool,
    pub buildings: Vec<Building>,
    pub time_of_day: f64,
    pub season: f64,
    pub selected_building_type: Option<BuildingType>,
    pub sustainability_score: f64,
}

/// The settlement simulation engine
#[derive(Debug, Clone)]
pub struct Settlement {
    config: SettlementConfig,
    phase: GamePhase,
    resources: ResourcePool,
    buildings: Vec<Building>,
    clock: DayClock,
    selected: Option<BuildingType>,
    sustainability_score: f64,
    next_building_id: u64,
    events: VecDeque<SettlementEvent>,
}

impl Default for Settlement {
    fn default() -> Self {
        Self::new()
    }
}

impl Settlement {
    /// Engine with the stock configuration
    pub fn new() -> Self {
        Self::with_config(SettlementConfig::default())
    }

    pub fn with_config(config: SettlementConfig) -> Self {
        let mut resources = config.start;
        resources.clamp();
        let clock = DayClock::new(config.clock.initial_time_of_day, config.clock.season_step);
        Self {
            config,
            phase: GamePhase::Menu,
            resources,
            buildings: Vec::new(),
            clock,
            selected: None,
            sustainability_score: INITIAL_SUSTAINABILITY,
            next_building_id: 0,
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
        }
    }

    /// Restore starting values, drop all buildings and go back to the menu
    ///
    /// Building ids keep counting up so ids from before the reset are never
    /// reused.
    pub fn reset(&mut self) {
        let mut resources = self.config.start;
        resources.clamp();
        self.resources = resources;
        self.buildings.clear();
        self.clock = DayClock::new(
            self.config.clock.initial_time_of_day,
            self.config.clock.season_step,
        );
        self.selected = None;
        self.phase = GamePhase::Menu;
        self.sustainability_score = INITIAL_SUSTAINABILITY;
        self.push_event(SettlementEvent::Reset);
        tracing::info!("Settlement reset");
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        let from = self.phase;
        self.phase = phase;
        if from != phase {
            tracing::info!(?from, to = ?phase, "Phase changed");
        }
        self.push_event(SettlementEvent::PhaseChanged { from, to: phase });
    }

    /// Flip between playing and paused; does nothing from the menu
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => self.set_phase(GamePhase::Paused),
            GamePhase::Paused => self.set_phase(GamePhase::Playing),
            GamePhase::Menu => {}
        }
    }

    /// Set the pending building type; affordability is not checked here
    pub fn select_building_type(&mut self, building_type: Option<BuildingType>) {
        self.selected = building_type;
        self.push_event(SettlementEvent::SelectionChanged(building_type));
    }

    pub fn can_afford(&self, building_type: BuildingType) -> bool {
        self.resources.can_afford(&self.config.cost(building_type))
    }

    /// Place a building if affordable, paying its full cost and clearing
    /// the selection
    pub fn place_building(
        &mut self,
        building_type: BuildingType,
        position: Position,
    ) -> PlacementOutcome {
        let cost = self.config.cost(building_type);
        if !self.resources.spend(&cost) {
            let missing = self.resources.shortfall(&cost);
            tracing::debug!(%building_type, ?missing, "Cannot afford building");
            self.push_event(SettlementEvent::PlacementRejected {
                building_type,
                missing,
            });
            return PlacementOutcome::InsufficientResources { missing };
        }

        let id = self.allocate_id();
        self.buildings.push(Building::new(id, building_type, position));
        self.selected = None;

        tracing::info!(%id, %building_type, ?position, "Placed building");
        self.push_event(SettlementEvent::BuildingPlaced {
            id,
            building_type,
            position,
        });
        PlacementOutcome::Placed(id)
    }

    /// Remove a building by id, returning it if it existed; no refund
    pub fn remove_building(&mut self, id: BuildingId) -> Option<Building> {
        let index = self.buildings.iter().position(|b| b.id == id)?;
        let removed = self.buildings.remove(index);
        tracing::info!(%id, building_type = %removed.building_type, "Removed building");
        self.push_event(SettlementEvent::BuildingRemoved {
            id,
            building_type: removed.building_type,
        });
        Some(removed)
    }

    /// Add a signed delta to the pool, clamping to the pool invariant
    pub fn update_resources(&mut self, delta: &ResourceDelta) {
        self.resources.apply_delta(delta);
    }

    /// Advance the clock by `delta` days; returns completed day count
    ///
    /// A non-finite delta is ignored.
    pub fn advance_time(&mut self, delta: f64) -> u64 {
        if !delta.is_finite() {
            tracing::debug!(delta, "Ignoring non-finite time delta");
            return 0;
        }
        let days = self.clock.advance(delta);
        if days > 0 {
            let season = self.clock.season();
            tracing::debug!(season, days, "Day completed");
            self.push_event(SettlementEvent::DayCompleted { days, season });
        }
        days
    }

    /// Per-frame resource generation
    pub fn tick(&mut self) -> TickReport {
        run_resource_tick(&mut self.resources, &self.buildings, &self.config)
    }

    /// Driver helper: advance time by `elapsed_secs * day_speed` and tick,
    /// but only while playing
    pub fn advance_frame(&mut self, elapsed_secs: f64) -> Option<TickReport> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        self.advance_time(elapsed_secs * self.config.clock.day_speed);
        Some(self.tick())
    }

    /// Drain the events recorded since the last call
    ///
    /// At most `MAX_PENDING_EVENTS` are kept; older ones are dropped first.
    pub fn take_events(&mut self) -> Vec<SettlementEvent> {
        self.events.drain(..).collect()
    }

    pub fn snapshot(&self) -> SettlementSnapshot {
        SettlementSnapshot {
            phase: self.phase,
            resources: self.resources,
            buildings: self.buildings.clone(),
            time_of_day: self.clock.time_of_day(),
            season: self.clock.season(),
            selected_building_type: self.selected,
            sustainability_score: self.sustainability_score,
        }
    }

    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn resources(&self) -> &ResourcePool {
        &self.resources
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    pub fn time_of_day(&self) -> f64 {
        self.clock.time_of_day()
    }

    pub fn season(&self) -> f64 {
        self.clock.season()
    }

    pub fn day_period(&self) -> DayPeriod {
        self.clock.period()
    }

    pub fn selected_building_type(&self) -> Option<BuildingType> {
        self.selected
    }

    pub fn sustainability_score(&self) -> f64 {
        self.sustainability_score
    }

    fn push_event(&mut self, event: SettlementEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn allocate_id(&mut self) -> BuildingId {
        self.next_building_id += 1;
        BuildingId(self.next_building_id)
    }
}
