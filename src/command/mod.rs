//! Text command pipeline for the headless driver
//!
//! input line -> Command (parse) -> CommandExecutor -> ExecutionResult

pub mod executor;

pub use executor::{CommandExecutor, ExecutionResult};

use crate::city::building::BuildingType;
use crate::core::error::{Result, VillageError};
use crate::core::types::BuildingId;

/// A parsed driver command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Leave the menu and start playing
    Start,
    /// Toggle playing/paused
    Pause,
    /// Back to the menu without resetting
    Menu,
    Select(Option<BuildingType>),
    /// Click on the ground; placement goes through the snapping grid
    Click { x: f32, z: f32 },
    /// Place at an exact position, bypassing the grid
    Build {
        building_type: BuildingType,
        x: f32,
        z: f32,
    },
    Remove(BuildingId),
    /// Run this many frames
    Run(u32),
    Status,
    Events,
    Snapshot,
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  start                 - Leave the menu and start playing
  pause                 - Pause / resume
  menu                  - Return to the menu
  select <type|none>    - Choose a building (home, farm, workshop, well)
  click <x> <z>         - Place the selected building at the snapped cell
  build <type> <x> <z>  - Place a building at an exact position
  remove <id>           - Remove a building (no refund)
  tick / t              - Run one frame
  run <n>               - Run n frames
  status / s            - Show the HUD
  events                - Show events since the last call
  snapshot              - Print the full state as JSON
  reset                 - Restore the starting state
  quit / q              - Exit";

impl std::str::FromStr for Command {
    type Err = VillageError;

    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.split_whitespace();
        let Some(head) = parts.next() else {
            return Err(VillageError::InvalidCommand("empty input".into()));
        };
        let args: Vec<&str> = parts.collect();

        let command = match (head.to_lowercase().as_str(), args.as_slice()) {
            ("start", []) => Command::Start,
            ("pause" | "resume" | "p", []) => Command::Pause,
            ("menu", []) => Command::Menu,
            ("select", ["none"]) => Command::Select(None),
            ("select", [kind]) => Command::Select(Some(kind.parse()?)),
            ("click", [x, z]) => Command::Click {
                x: parse_coord(x)?,
                z: parse_coord(z)?,
            },
            ("build", [kind, x, z]) => Command::Build {
                building_type: kind.parse()?,
                x: parse_coord(x)?,
                z: parse_coord(z)?,
            },
            ("remove", [id]) => Command::Remove(
                id.parse()
                    .map_err(|_| VillageError::InvalidCommand(format!("bad building id '{id}'")))?,
            ),
            ("tick" | "t", []) => Command::Run(1),
            ("run", [n]) => Command::Run(
                n.parse()
                    .map_err(|_| VillageError::InvalidCommand(format!("bad frame count '{n}'")))?,
            ),
            ("status" | "s", []) => Command::Status,
            ("events", []) => Command::Events,
            ("snapshot", []) => Command::Snapshot,
            ("reset", []) => Command::Reset,
            ("help" | "h" | "?", []) => Command::Help,
            ("quit" | "q" | "exit", []) => Command::Quit,
            _ => {
                return Err(VillageError::InvalidCommand(format!(
                    "unrecognised '{}' (try 'help')",
                    input.trim()
                )))
            }
        };
        Ok(command)
    }
}

fn parse_coord(value: &str) -> Result<f32> {
    value
        .parse::<f32>()
        .map_err(|_| VillageError::InvalidCommand(format!("bad coordinate '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("start".parse::<Command>().unwrap(), Command::Start);
        assert_eq!("t".parse::<Command>().unwrap(), Command::Run(1));
        assert_eq!("run 60".parse::<Command>().unwrap(), Command::Run(60));
        assert_eq!("  q ".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_placement_commands() {
        assert_eq!(
            "select farm".parse::<Command>().unwrap(),
            Command::Select(Some(BuildingType::Farm))
        );
        assert_eq!("select none".parse::<Command>().unwrap(), Command::Select(None));
        assert_eq!(
            "click 3.5 -2".parse::<Command>().unwrap(),
            Command::Click { x: 3.5, z: -2.0 }
        );
        assert_eq!(
            "build well 4 6".parse::<Command>().unwrap(),
            Command::Build {
                building_type: BuildingType::Well,
                x: 4.0,
                z: 6.0
            }
        );
        assert_eq!(
            "remove #3".parse::<Command>().unwrap(),
            Command::Remove(BuildingId(3))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<Command>(),
            Err(VillageError::InvalidCommand(_))
        ));
        assert!(matches!(
            "select castle".parse::<Command>(),
            Err(VillageError::UnknownBuildingType(_))
        ));
        assert!("click 1".parse::<Command>().is_err());
        assert!("run many".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
    }
}
