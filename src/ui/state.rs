//! Headless HUD model
//!
//! Everything a front end needs to draw the resource bar, clock badge and
//! build menu, computed from the engine each frame.

use std::fmt;

use crate::city::building::{BuildingCost, BuildingType};
use crate::core::astronomy::Daylight;
use crate::core::calendar::DayPeriod;
use crate::simulation::settlement::{GamePhase, Settlement};

/// One entry in the build menu
#[derive(Debug, Clone, PartialEq)]
pub struct BuildButton {
    pub building_type: BuildingType,
    pub label: &'static str,
    pub description: &'static str,
    pub cost: BuildingCost,
    pub affordable: bool,
    pub selected: bool,
    /// A selected type stays clickable so it can be deselected
    pub enabled: bool,
}

/// Game HUD state
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub wood: u64,
    pub stone: u64,
    pub food: u64,
    pub population: u64,
    pub happiness: u64,
    pub period: DayPeriod,
    pub sun_intensity: f32,
    pub building_count: usize,
    pub build_menu: Vec<BuildButton>,
    pub prompt: &'static str,
    pub pause_label: &'static str,
}

impl Hud {
    pub fn from_settlement(settlement: &Settlement) -> Self {
        let pool = settlement.resources();
        let selected = settlement.selected_building_type();

        let build_menu = BuildingType::ALL
            .iter()
            .map(|&building_type| {
                let affordable = settlement.can_afford(building_type);
                let is_selected = selected == Some(building_type);
                BuildButton {
                    building_type,
                    label: building_type.display_name(),
                    description: building_type.description(),
                    cost: settlement.config().cost(building_type),
                    affordable,
                    selected: is_selected,
                    enabled: affordable || is_selected,
                }
            })
            .collect();

        Self {
            wood: pool.wood.floor() as u64,
            stone: pool.stone.floor() as u64,
            food: pool.food.floor() as u64,
            population: pool.population.floor() as u64,
            happiness: pool.happiness.floor() as u64,
            period: settlement.day_period(),
            sun_intensity: Daylight::at(settlement.time_of_day()).intensity,
            building_count: settlement.buildings().len(),
            build_menu,
            prompt: if selected.is_some() {
                "Click on the terrain to place"
            } else {
                "Select a building to place"
            },
            pause_label: if settlement.phase() == GamePhase::Paused {
                "Resume"
            } else {
                "Pause"
            },
        }
    }
}

impl fmt::Display for Hud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "wood {} | stone {} | food {} | people {} | happiness {}",
            self.wood, self.stone, self.food, self.population, self.happiness
        )?;
        writeln!(
            f,
            "{} (sun {:.2}) | {} buildings",
            self.period, self.sun_intensity, self.building_count
        )?;
        for button in &self.build_menu {
            let marker = if button.selected {
                '>'
            } else if button.enabled {
                ' '
            } else {
                'x'
            };
            writeln!(
                f,
                " {marker} {:<9} wood {:>3} stone {:>3}  {}",
                button.label, button.cost.wood, button.cost.stone, button.description
            )?;
        }
        write!(f, "{}", self.prompt)
    }
}

/// Build-menu click: selecting the already-selected type clears the
/// selection
pub fn toggle_selection(settlement: &mut Settlement, building_type: BuildingType) {
    if settlement.selected_building_type() == Some(building_type) {
        settlement.select_building_type(None);
    } else {
        settlement.select_building_type(Some(building_type));
    }
}
