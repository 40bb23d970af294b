//! Emmy shooter simulation library.
//!
//! This module exposes the simulation core (geometry, the bounded capability,
//! player and projectile logic) and its ECS components, resources, systems
//! and events for use in integration tests and by the headless driver.

pub mod components;
pub mod error;
pub mod events;
pub mod geometry;
pub mod resources;
pub mod script;
pub mod systems;
