//! UI module - headless HUD model for any front end

pub mod state;

pub use state::{toggle_selection, BuildButton, Hud};
