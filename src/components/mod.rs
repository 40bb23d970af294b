//! ECS components for entities.
//!
//! This module groups the component types attached to entities in the
//! simulation world, together with the plain data types they are built from.
//!
//! Submodules overview:
//! - [`bounds`] – the [`Bounded`](bounds::Bounded) capability and a rectangle-backed entity
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`mapposition`] – world-space position (top-left) for an entity
//! - [`obstacle`] – obstacle and target markers plus a standalone obstacle type
//! - [`player`] – the controllable entity and its per-tick orchestration
//! - [`projectile`] – a single moving projectile
//! - [`projectilemanager`] – cooldown-gated firing, projectile updates and hit reports

pub mod bounds;
pub mod boxcollider;
pub mod mapposition;
pub mod obstacle;
pub mod player;
pub mod projectile;
pub mod projectilemanager;
