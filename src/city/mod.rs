//! City layer - building types and the resource pool

pub mod building;
pub mod stockpile;

pub use building::{Building, BuildingCost, BuildingType};
pub use stockpile::{ResourceDelta, ResourcePool};
