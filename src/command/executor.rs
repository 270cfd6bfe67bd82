//! Applies parsed commands to a settlement

use std::fmt::Write as _;

use crate::command::{Command, HELP};
use crate::core::error::Result;
use crate::core::types::Position;
use crate::simulation::settlement::{
    GamePhase, PlacementOutcome, Settlement, SettlementEvent,
};
use crate::ui::state::Hud;
use crate::world::placement::PlacementGrid;

/// Default frame length: 60 frames per second
pub const DEFAULT_FRAME_SECS: f64 = 1.0 / 60.0;

/// Executes commands against a settlement
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    pub grid: PlacementGrid,
    /// Elapsed seconds fed to `advance_frame` per simulated frame
    pub frame_secs: f64,
}

/// Result of executing a command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionResult {
    pub output: String,
    pub quit: bool,
}

impl ExecutionResult {
    fn say(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

impl CommandExecutor {
    pub fn new(grid: PlacementGrid, frame_secs: f64) -> Self {
        Self { grid, frame_secs }
    }

    pub fn for_settlement(settlement: &Settlement) -> Self {
        Self::new(
            PlacementGrid::from_config(&settlement.config().placement),
            DEFAULT_FRAME_SECS,
        )
    }

    pub fn execute(&self, settlement: &mut Settlement, command: &Command) -> Result<ExecutionResult> {
        let result = match command {
            Command::Start => {
                settlement.set_phase(GamePhase::Playing);
                ExecutionResult::say("Building started.")
            }
            Command::Pause => {
                settlement.toggle_pause();
                ExecutionResult::say(format!("Phase: {:?}", settlement.phase()))
            }
            Command::Menu => {
                settlement.set_phase(GamePhase::Menu);
                ExecutionResult::say("Back at the menu.")
            }
            Command::Select(selection) => {
                settlement.select_building_type(*selection);
                match selection {
                    Some(kind) if !settlement.can_afford(*kind) => ExecutionResult::say(format!(
                        "Selected {kind} (not affordable yet)."
                    )),
                    Some(kind) => ExecutionResult::say(format!("Selected {kind}.")),
                    None => ExecutionResult::say("Selection cleared."),
                }
            }
            Command::Click { x, z } => {
                match self.grid.click(settlement, Position::new(*x, 0.0, *z)) {
                    Some(outcome) => ExecutionResult::say(describe_outcome(settlement, &outcome)),
                    None if settlement.selected_building_type().is_none() => {
                        ExecutionResult::say("Nothing selected.")
                    }
                    None => ExecutionResult::say("Out of bounds."),
                }
            }
            Command::Build {
                building_type,
                x,
                z,
            } => {
                let outcome =
                    settlement.place_building(*building_type, Position::new(*x, 0.0, *z));
                ExecutionResult::say(describe_outcome(settlement, &outcome))
            }
            Command::Remove(id) => match settlement.remove_building(*id) {
                Some(building) => {
                    ExecutionResult::say(format!("Removed {} {}.", building.building_type, id))
                }
                None => ExecutionResult::say(format!("No building {id}.")),
            },
            Command::Run(frames) => {
                if settlement.phase() != GamePhase::Playing {
                    ExecutionResult::say(format!(
                        "Not playing ({:?}); frames skipped.",
                        settlement.phase()
                    ))
                } else {
                    for _ in 0..*frames {
                        settlement.advance_frame(self.frame_secs);
                    }
                    ExecutionResult::say(format!("Ran {frames} frame(s)."))
                }
            }
            Command::Status => ExecutionResult::say(Hud::from_settlement(settlement).to_string()),
            Command::Events => {
                let events = settlement.take_events();
                let mut output = String::new();
                for event in &events {
                    let _ = writeln!(output, "{}", describe_event(event));
                }
                if events.is_empty() {
                    output.push_str("No new events.");
                }
                ExecutionResult::say(output.trim_end())
            }
            Command::Snapshot => {
                ExecutionResult::say(serde_json::to_string_pretty(&settlement.snapshot())?)
            }
            Command::Reset => {
                settlement.reset();
                ExecutionResult::say("Settlement reset.")
            }
            Command::Help => ExecutionResult::say(HELP),
            Command::Quit => ExecutionResult {
                output: String::new(),
                quit: true,
            },
        };
        Ok(result)
    }
}

fn describe_outcome(settlement: &Settlement, outcome: &PlacementOutcome) -> String {
    match outcome {
        PlacementOutcome::Placed(id) => match settlement.building(*id) {
            Some(b) => format!(
                "Placed {} {} at ({}, {}).",
                b.building_type, id, b.position.x, b.position.z
            ),
            None => format!("Placed {id}."),
        },
        PlacementOutcome::InsufficientResources { missing } => format!(
            "Cannot afford: missing wood {} stone {} food {}.",
            missing.wood, missing.stone, missing.food
        ),
    }
}

fn describe_event(event: &SettlementEvent) -> String {
    match event {
        SettlementEvent::Reset => "reset".to_string(),
        SettlementEvent::PhaseChanged { from, to } => format!("phase {from:?} -> {to:?}"),
        SettlementEvent::SelectionChanged(Some(kind)) => format!("selected {kind}"),
        SettlementEvent::SelectionChanged(None) => "selection cleared".to_string(),
        SettlementEvent::BuildingPlaced {
            id, building_type, ..
        } => format!("placed {building_type} {id}"),
        SettlementEvent::PlacementRejected { building_type, .. } => {
            format!("could not afford {building_type}")
        }
        SettlementEvent::BuildingRemoved { id, building_type } => {
            format!("removed {building_type} {id}")
        }
        SettlementEvent::DayCompleted { days: 1, season } => {
            format!("new day (season {season:.2})")
        }
        SettlementEvent::DayCompleted { days, season } => {
            format!("{days} days passed (season {season:.2})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::building::BuildingType;

    fn run(executor: &CommandExecutor, s: &mut Settlement, line: &str) -> ExecutionResult {
        let command: Command = line.parse().unwrap();
        executor.execute(s, &command).unwrap()
    }

    #[test]
    fn test_scripted_session() {
        let mut s = Settlement::new();
        let executor = CommandExecutor::for_settlement(&s);

        run(&executor, &mut s, "start");
        run(&executor, &mut s, "select farm");
        let placed = run(&executor, &mut s, "click 0.4 0.4");
        assert!(placed.output.starts_with("Placed farm"));

        run(&executor, &mut s, "run 10");
        assert_eq!(s.buildings().len(), 1);
        assert!(s.time_of_day() > 0.25);

        let quit = run(&executor, &mut s, "quit");
        assert!(quit.quit);
    }

    #[test]
    fn test_run_skipped_outside_playing() {
        let mut s = Settlement::new();
        let executor = CommandExecutor::for_settlement(&s);
        let result = run(&executor, &mut s, "run 5");
        assert!(result.output.starts_with("Not playing"));
        assert_eq!(s.time_of_day(), 0.25);
    }

    #[test]
    fn test_click_without_selection() {
        let mut s = Settlement::new();
        let executor = CommandExecutor::for_settlement(&s);
        assert_eq!(run(&executor, &mut s, "click 0 0").output, "Nothing selected.");
    }

    #[test]
    fn test_build_reports_shortfall() {
        let mut s = Settlement::new();
        let executor = CommandExecutor::for_settlement(&s);
        run(&executor, &mut s, "build workshop 0 0");
        run(&executor, &mut s, "build workshop 2 0");
        let result = run(&executor, &mut s, "build workshop 4 0");
        assert!(result.output.starts_with("Cannot afford"));
        assert_eq!(
            s.buildings()
                .iter()
                .filter(|b| b.building_type == BuildingType::Workshop)
                .count(),
            2
        );
    }

    #[test]
    fn test_events_listing_drains() {
        let mut s = Settlement::new();
        let executor = CommandExecutor::for_settlement(&s);
        run(&executor, &mut s, "build well 0 0");
        let events = run(&executor, &mut s, "events");
        assert!(events.output.contains("placed well #1"));
        assert_eq!(run(&executor, &mut s, "events").output, "No new events.");
    }

    #[test]
    fn test_snapshot_is_json() {
        let mut s = Settlement::new();
        let executor = CommandExecutor::for_settlement(&s);
        let result = run(&executor, &mut s, "snapshot");
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(value["resources"]["wood"], 50.0);
    }
}
