//! Event types and observers.
//!
//! Submodules:
//! - [`projectilehit`] – a projectile overlapped a target entity
pub mod projectilehit;
