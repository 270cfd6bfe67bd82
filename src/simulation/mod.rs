pub mod settlement;
pub mod shared;
pub mod tick;

pub use settlement::{
    GamePhase, PlacementOutcome, Settlement, SettlementEvent, SettlementSnapshot,
};
pub use shared::SharedSettlement;
pub use tick::{run_resource_tick, sum_benefits, TickReport};
