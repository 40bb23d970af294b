//! Simulation systems.
//!
//! Submodules overview
//! - [`collision`] – minimum-translation push-out against static obstacles
//! - [`gameconfig`] – apply [`GameConfig`](crate::resources::gameconfig::GameConfig) changes to resources
//! - [`player`] – tick every player against obstacles and targets, emit hit events
//! - [`time`] – update simulation time and delta

pub mod collision;
pub mod gameconfig;
pub mod player;
pub mod time;
