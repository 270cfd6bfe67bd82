//! Heritage Village - settlement-building simulation core
//!
//! A village grows on a flat grid. Buildings cost wood, stone and food and
//! produce benefits every tick; a day/night clock drives the season.

pub mod city;
pub mod command;
pub mod core;
pub mod simulation;
pub mod ui;
pub mod world;
