//! Ground plane and building placement

pub mod placement;

pub use placement::PlacementGrid;
