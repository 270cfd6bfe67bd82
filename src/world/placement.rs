//! Ground-plane placement grid
//!
//! The engine accepts any position. Snapping to the grid and keeping
//! buildings inside the playable square happen here, in the input layer.

use crate::core::config::PlacementConfig;
use crate::core::types::Position;
use crate::simulation::settlement::{PlacementOutcome, Settlement};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementGrid {
    pub cell_size: f32,
    pub half_extent: f32,
}

impl Default for PlacementGrid {
    fn default() -> Self {
        Self::from_config(&PlacementConfig::default())
    }
}

impl PlacementGrid {
    pub fn from_config(config: &PlacementConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            half_extent: config.half_extent,
        }
    }

    /// Snap a ground-plane hit point to the nearest grid cell
    ///
    /// Halves round up (towards +inf). Returns `None` outside the playable
    /// square.
    pub fn snap(&self, point: Position) -> Option<Position> {
        let x = snap_axis(point.x, self.cell_size);
        let z = snap_axis(point.z, self.cell_size);
        if x.abs() < self.half_extent && z.abs() < self.half_extent {
            Some(Position::new(x, 0.0, z))
        } else {
            None
        }
    }

    /// Handle a click on the ground at `point`
    ///
    /// Places the currently selected building type at the snapped cell.
    /// Returns `None` when nothing is selected or the point is out of
    /// bounds; the engine is left untouched in that case.
    pub fn click(&self, settlement: &mut Settlement, point: Position) -> Option<PlacementOutcome> {
        let building_type = settlement.selected_building_type()?;
        let cell = self.snap(point)?;
        Some(settlement.place_building(building_type, cell))
    }
}

fn snap_axis(value: f32, cell: f32) -> f32 {
    let snapped = (value / cell + 0.5).floor() * cell;
    // Avoid -0.0 leaking into positions
    snapped + 0.0
}
