pub mod astronomy;
pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use astronomy::{Daylight, LightTint};
pub use calendar::{DayClock, DayPeriod};
pub use config::SettlementConfig;
pub use error::{Result, VillageError};
pub use types::{BuildingId, Position};
