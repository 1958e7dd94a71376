//! Kinematic state shared by every entity, and toroidal wrapping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ScreenBounds;

/// Unit vector pointing along `degrees`, measured counter-clockwise from +x.
#[must_use]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(cos, sin)
}

/// Position, velocity and orientation of a moving entity.
///
/// Motion is purely additive per tick: one [`advance`](Body::advance) adds the
/// velocity to the position once. Nothing is scaled by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Position in screen units
    pub position: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    /// Orientation in degrees (unbounded)
    pub angle: f32,
    radius: f32,
    alive: bool,
}

impl Body {
    /// Creates a live body with angle 0.
    ///
    /// `radius` must be positive; [`SimConfig::validate`](crate::config::SimConfig::validate)
    /// guarantees this for every configured variant.
    #[must_use]
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self {
            position,
            velocity,
            angle: 0.0,
            radius,
            alive: true,
        }
    }

    /// Collision radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns true until [`kill`](Body::kill) is called.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Marks the body dead.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Re-enters a body that has left the playfield from the opposite edge.
    ///
    /// Each axis is checked on its own: past the upper bound resets to zero,
    /// below zero resets to the upper bound.
    pub fn wrap(&mut self, bounds: &ScreenBounds) {
        let p = &mut self.position;
        if p.x > bounds.width {
            p.x = 0.0;
        }
        if p.x < 0.0 {
            p.x = bounds.width;
        }
        if p.y > bounds.height {
            p.y = 0.0;
        }
        if p.y < 0.0 {
            p.y = bounds.height;
        }
    }

    /// Wraps using the pre-tick position, then adds the velocity.
    ///
    /// Wrapping before translating means a body crossing an edge is drawn one
    /// frame past it before it reappears on the other side.
    pub fn advance(&mut self, bounds: &ScreenBounds) {
        if !self.alive {
            return;
        }
        self.wrap(bounds);
        self.position += self.velocity;
    }
}
