//! Cooldown-gated projectile launcher.
//!
//! The [`ProjectileManager`] owns every projectile its player has fired.
//! Each tick it:
//!
//! 1. advances all live projectiles and disables the ones that left the
//!    viewport,
//! 2. tests the remaining ones against the supplied targets and records a
//!    [`ProjectileHit`] for every overlapping (projectile, target) pair,
//! 3. drops the disabled projectiles.
//!
//! Spawning goes through [`ProjectileManager::try_fire`], which refuses to
//! spawn more than once per cooldown window.
//!
//! # First shot
//!
//! Whether the very first shot is allowed at time zero is a policy choice,
//! see [`FirstShotPolicy`].
//!
//! Timestamps are `f64` seconds on the owner's game clock, so a clock summed
//! from many small `f32` deltas still opens the cooldown on the exact tick.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::components::bounds::Bounded;
use crate::components::projectile::{Projectile, ProjectileId};
use crate::error::{self, ConfigError};
use crate::geometry::{Rectangle, Vec2};

const DEFAULT_BULLET_SPEED: f32 = 600.0;
const DEFAULT_BULLET_SIZE: f32 = 8.0;
const DEFAULT_COOLDOWN: f32 = 0.25;

/// When the first shot after construction may be fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstShotPolicy {
    /// Fire is allowed on the first tick (`last_fire = -cooldown`).
    #[default]
    Immediate,
    /// The first shot waits a full cooldown (`last_fire = 0`).
    AfterCooldown,
}

impl FromStr for FirstShotPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "after_cooldown" | "after-cooldown" => Ok(Self::AfterCooldown),
            _ => Err(ConfigError::UnknownFirstShotPolicy {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FirstShotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate => write!(f, "immediate"),
            Self::AfterCooldown => write!(f, "after_cooldown"),
        }
    }
}

/// Construction parameters for a [`ProjectileManager`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LauncherConfig {
    /// Projectile speed in world units per second.
    pub bullet_speed: f32,
    /// Projectile rectangle size.
    pub bullet_size: Vec2,
    /// Minimum time between two shots, in seconds.
    pub cooldown: f32,
    pub first_shot: FirstShotPolicy,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            bullet_speed: DEFAULT_BULLET_SPEED,
            bullet_size: Vec2::splat(DEFAULT_BULLET_SIZE),
            cooldown: DEFAULT_COOLDOWN,
            first_shot: FirstShotPolicy::Immediate,
        }
    }
}

impl LauncherConfig {
    /// Validated constructor.
    pub fn new(
        bullet_speed: f32,
        bullet_size: Vec2,
        cooldown: f32,
        first_shot: FirstShotPolicy,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            bullet_speed: error::positive("bullet_speed", bullet_speed)?,
            bullet_size: Vec2::new(
                error::positive("bullet_width", bullet_size.x)?,
                error::positive("bullet_height", bullet_size.y)?,
            ),
            cooldown: error::non_negative("cooldown", cooldown)?,
            first_shot,
        })
    }
}

/// A projectile overlapping a target during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileHit {
    pub projectile: ProjectileId,
    /// Projectile rectangle at the moment of the hit.
    pub bounds: Rectangle,
    /// Index of the target in the slice passed to [`ProjectileManager::update`].
    pub target: usize,
}

#[derive(Debug, Clone)]
pub struct ProjectileManager {
    config: LauncherConfig,
    last_fire: f64,
    next_id: u64,
    projectiles: Vec<Projectile>,
}

impl Default for ProjectileManager {
    fn default() -> Self {
        Self::new(LauncherConfig::default())
    }
}

impl ProjectileManager {
    pub fn new(config: LauncherConfig) -> Self {
        let last_fire = match config.first_shot {
            FirstShotPolicy::Immediate => -f64::from(config.cooldown),
            FirstShotPolicy::AfterCooldown => 0.0,
        };
        Self {
            config,
            last_fire,
            next_id: 0,
            projectiles: Vec::new(),
        }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Game-clock timestamp of the last successful shot.
    pub fn last_fire(&self) -> f64 {
        self.last_fire
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// True when the cooldown window since the last shot has passed at `now`.
    pub fn can_fire(&self, now: f64) -> bool {
        now - self.last_fire >= f64::from(self.config.cooldown)
    }

    /// Spawn a projectile at `origin` travelling along `aim`.
    ///
    /// `aim` is expected to be a unit vector; a zero vector fires to the
    /// right. Returns `None` while the cooldown is running.
    pub fn try_fire(&mut self, now: f64, origin: Vec2, aim: Vec2) -> Option<ProjectileId> {
        if !self.can_fire(now) {
            return None;
        }

        let mut velocity = aim * self.config.bullet_speed;
        if velocity == Vec2::ZERO {
            velocity = Vec2::X * self.config.bullet_speed;
        }

        let id = ProjectileId(self.next_id);
        self.next_id += 1;
        self.projectiles
            .push(Projectile::new(id, origin, velocity, self.config.bullet_size));
        self.last_fire = now;

        debug!(
            "Projectile {:?} fired at ({:.1}, {:.1}) with velocity ({:.1}, {:.1})",
            id, origin.x, origin.y, velocity.x, velocity.y
        );
        Some(id)
    }

    /// Advance, hit-test and cull all projectiles for one tick.
    ///
    /// Projectiles that leave the viewport during this tick are not
    /// hit-tested. Hits are ordered by projectile, then by target index.
    pub fn update<T: Bounded>(
        &mut self,
        delta: f32,
        viewport: &Rectangle,
        targets: &[T],
    ) -> Vec<ProjectileHit> {
        let mut hits = Vec::new();

        for projectile in self.projectiles.iter_mut() {
            projectile.update(delta, viewport);
            if !projectile.is_enabled() {
                continue;
            }
            let bounds = projectile.bounds();
            for (index, target) in targets.iter().enumerate() {
                if bounds.intersects(&target.bounds()) {
                    hits.push(ProjectileHit {
                        projectile: projectile.id(),
                        bounds,
                        target: index,
                    });
                }
            }
        }

        let before = self.projectiles.len();
        self.projectiles.retain(Projectile::is_enabled);
        let culled = before - self.projectiles.len();
        if culled > 0 {
            debug!(
                "Culled {} projectile(s), {} still live",
                culled,
                self.projectiles.len()
            );
        }

        hits
    }
}
