//! Sun model derived from the time of day
//!
//! Pure functions of `time_of_day`; nothing here feeds back into the
//! resource economy.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Radius of the sun's orbit around the village centre (world units)
pub const SUN_ORBIT_RADIUS: f32 = 20.0;

/// Height the orbit is lifted above the ground plane
pub const SUN_ORBIT_LIFT: f32 = 10.0;

/// Floor on sun intensity so the scene never goes fully dark
pub const MIN_SUN_INTENSITY: f32 = 0.3;

/// Colour family of the directional light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightTint {
    /// Cool blue moonlight
    Night,
    /// Warm orange near sunrise/sunset
    Sunset,
    /// Neutral white
    Day,
}

impl LightTint {
    pub fn from_time_of_day(time: f32) -> Self {
        if !(0.25..=0.75).contains(&time) {
            LightTint::Night
        } else if time < 0.3 || time > 0.7 {
            LightTint::Sunset
        } else {
            LightTint::Day
        }
    }
}

/// Sun state at a given time of day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Daylight {
    pub sun_position: glam::Vec3,
    /// Light intensity (MIN_SUN_INTENSITY..=1.0)
    pub intensity: f32,
    pub tint: LightTint,
}

impl Daylight {
    pub fn at(time_of_day: f64) -> Self {
        let time = time_of_day as f32;
        let angle = time * TAU;
        let (sin, cos) = angle.sin_cos();

        Self {
            sun_position: glam::Vec3::new(
                cos * SUN_ORBIT_RADIUS,
                sin * SUN_ORBIT_RADIUS + SUN_ORBIT_LIFT,
                sin * SUN_ORBIT_RADIUS,
            ),
            intensity: sin.max(MIN_SUN_INTENSITY),
            tint: LightTint::from_time_of_day(time),
        }
    }
}
