//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `gameconfig` – INI-backed configuration for viewport, player, weapon and driver
//! - `hittally` – running count of projectile hits per target
//! - `input` – per-frame device state and the active input mode
//! - `screensize` – current viewport dimensions
//! - `worldtime` – simulation time and delta
pub mod gameconfig;
pub mod hittally;
pub mod input;
pub mod screensize;
pub mod worldtime;
