//! Projectiles fired by the ship.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{heading_vector, Body};
use super::{EntityKind, Kinematic};
use crate::config::{ProjectileConfig, SimConfig};

/// A shot with a fixed life budget.
///
/// A projectile copies the ship's angle and position at the instant it is
/// created, then [`fire`](Projectile::fire) gives it a muzzle velocity on top
/// of the ship's own velocity. It dies when its countdown runs out or when it
/// hits an asteroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    body: Body,
    remaining_life: i32,
}

impl Projectile {
    /// Creates a stationary projectile at `position` facing `angle` degrees.
    #[must_use]
    pub fn spawn(angle: f32, position: Vec2, config: &ProjectileConfig) -> Self {
        let mut body = Body::new(position, Vec2::ZERO, config.radius);
        body.angle = angle;
        Self {
            body,
            remaining_life: config.life,
        }
    }

    /// Launches the projectile a quarter turn counter-clockwise from its
    /// angle, inheriting the ship's momentum.
    pub fn fire(&mut self, ship_velocity: Vec2, muzzle_speed: f32) {
        self.body.velocity = heading_vector(self.body.angle + 90.0) * muzzle_speed + ship_velocity;
    }

    /// Ticks left before the projectile expires.
    #[must_use]
    pub const fn remaining_life(&self) -> i32 {
        self.remaining_life
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    /// Angle the sprite is drawn at: the direction of travel relative to a
    /// stationary ship.
    #[must_use]
    pub fn sprite_angle(&self) -> f32 {
        self.body.angle + 90.0
    }
}

impl Kinematic for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Projectile
    }

    fn advance(&mut self, config: &SimConfig) {
        if !self.body.is_alive() {
            return;
        }
        self.body.advance(&config.bounds);
        self.remaining_life -= 1;
        if self.remaining_life <= 0 {
            self.body.kill();
        }
    }
}
