//! The player's ship.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::{EntityKind, Kinematic};
use crate::config::{ShipConfig, SimConfig};

/// The player-controlled ship.
///
/// Maneuvers are impulses applied once per tick while the matching command is
/// held. Thrust accumulates without a speed cap or drag. A dead ship ignores
/// every maneuver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    body: Body,
}

impl Ship {
    /// Spawns a stationary ship at the centre of the playfield, pointing at
    /// angle 0.
    #[must_use]
    pub fn spawn(config: &SimConfig) -> Self {
        Self::at_position(config.bounds.center(), config)
    }

    /// Spawns a stationary ship at `position`.
    #[must_use]
    pub fn at_position(position: Vec2, config: &SimConfig) -> Self {
        Self {
            body: Body::new(position, Vec2::ZERO, config.ship.radius),
        }
    }

    /// Rotates counter-clockwise by the configured turn rate.
    pub fn turn_left(&mut self, config: &ShipConfig) {
        if self.body.is_alive() {
            self.body.angle += config.turn_rate;
        }
    }

    /// Rotates clockwise by the configured turn rate.
    pub fn turn_right(&mut self, config: &ShipConfig) {
        if self.body.is_alive() {
            self.body.angle -= config.turn_rate;
        }
    }

    /// Adds one tick of forward impulse.
    pub fn thrust(&mut self, config: &ShipConfig) {
        if self.body.is_alive() {
            self.body.velocity += thrust_impulse(self.body.angle, config.thrust);
        }
    }

    /// Adds one tick of backward impulse.
    pub fn reverse(&mut self, config: &ShipConfig) {
        if self.body.is_alive() {
            self.body.velocity -= thrust_impulse(self.body.angle, config.thrust);
        }
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }
}

/// Forward impulse for a ship facing `angle` degrees: the nose points along
/// `(-sin, cos)`, a quarter turn counter-clockwise from the heading vector.
fn thrust_impulse(angle: f32, acceleration: f32) -> Vec2 {
    let (sin, cos) = angle.to_radians().sin_cos();
    Vec2::new(-sin * acceleration, cos * acceleration)
}

impl Kinematic for Ship {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Ship
    }

    fn advance(&mut self, config: &SimConfig) {
        self.body.advance(&config.bounds);
    }
}
