//! Read-only snapshot of the playfield for rendering.
//!
//! A [`FrameView`] is the only thing a renderer needs once per frame: the
//! ship pose, one entry per live projectile and asteroid, and the two
//! end-of-game flags. It owns its data, so it can be kept, compared or
//! serialized after the simulation moves on.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::arena::Arena;
use crate::entity::{AsteroidTier, EntityId, Kinematic, Ship};

/// Pose of the ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    /// Position in screen units
    pub position: Vec2,
    /// Orientation in degrees
    pub angle: f32,
    /// False once an asteroid has hit the ship
    pub alive: bool,
}

/// A live projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Registry handle
    pub id: EntityId,
    /// Position in screen units
    pub position: Vec2,
    /// Angle to draw the sprite at
    pub angle: f32,
}

/// A live asteroid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    /// Registry handle
    pub id: EntityId,
    /// Position in screen units
    pub position: Vec2,
    /// Cosmetic rotation in degrees
    pub angle: f32,
    /// Size class, for sprite selection
    pub tier: AsteroidTier,
}

/// Everything a renderer draws for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    /// Ticks completed so far
    pub tick: u64,
    /// The ship
    pub ship: ShipView,
    /// Live projectiles in id order
    pub projectiles: Vec<ProjectileView>,
    /// Live asteroids in id order
    pub asteroids: Vec<AsteroidView>,
    /// The ship has been destroyed
    pub ship_destroyed: bool,
    /// No asteroids remain
    pub field_cleared: bool,
}

impl FrameView {
    /// Captures the current state of `arena` and `ship`.
    ///
    /// Dead entities still awaiting reclamation are left out.
    #[must_use]
    pub fn capture(arena: &Arena, ship: &Ship) -> Self {
        let projectiles = arena
            .projectiles()
            .filter(|(_, projectile)| projectile.is_alive())
            .map(|(id, projectile)| ProjectileView {
                id,
                position: projectile.position(),
                angle: projectile.sprite_angle(),
            })
            .collect();

        let asteroids = arena
            .asteroids()
            .filter(|(_, asteroid)| asteroid.is_alive())
            .map(|(id, asteroid)| AsteroidView {
                id,
                position: asteroid.position(),
                angle: asteroid.angle(),
                tier: asteroid.tier(),
            })
            .collect();

        Self {
            tick: arena.current_tick(),
            ship: ShipView {
                position: ship.position(),
                angle: ship.angle(),
                alive: ship.is_alive(),
            },
            projectiles,
            asteroids,
            ship_destroyed: !ship.is_alive(),
            field_cleared: arena.is_field_cleared(),
        }
    }

    /// Number of live asteroids of `tier`.
    #[must_use]
    pub fn count_tier(&self, tier: AsteroidTier) -> usize {
        self.asteroids.iter().filter(|a| a.tier == tier).count()
    }
}
