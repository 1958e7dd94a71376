//! Tuning values for the simulation.
//!
//! All speeds, radii, spin rates and spawn ranges live in one immutable
//! [`SimConfig`] that is built once, validated, and handed to the
//! [`Simulation`](crate::simulation::Simulation). Every operation that needs a
//! tuning value receives the config (or one of its sections) by reference.
//!
//! The defaults reproduce the classic tuning: a 1000x800 playfield, five large
//! asteroids spawned near the lower-left corner, and a ship parked at the
//! centre of the screen.
//!
//! # Example
//!
//! ```
//! use rockfield_core::config::SimConfig;
//!
//! let config = SimConfig::from_json_str(r#"{ "field": { "initial_asteroids": 2 } }"#)
//!     .expect("valid config");
//!
//! assert_eq!(config.field.initial_asteroids, 2);
//! // Sections that were not mentioned keep their defaults.
//! assert_eq!(config.bounds.width, 1000.0);
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entity::AsteroidTier;
use crate::error::ConfigError;

// =============================================================================
// Sections
// =============================================================================

/// Size of the toroidal playfield. Coordinates wrap at `[0, width]` and
/// `[0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenBounds {
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl ScreenBounds {
    /// Creates bounds of the given size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Centre of the playfield, where the ship spawns.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self::new(1000.0, 800.0)
    }
}

/// Ship handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Collision radius
    pub radius: f32,
    /// Degrees turned per tick while a turn command is held
    pub turn_rate: f32,
    /// Impulse added per tick while thrust (or reverse) is held
    pub thrust: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            radius: 30.0,
            turn_rate: 3.0,
            thrust: 0.25,
        }
    }
}

/// Projectile ballistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Collision radius
    pub radius: f32,
    /// Muzzle speed, added on top of the ship's velocity
    pub speed: f32,
    /// Ticks before the projectile expires
    pub life: i32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            radius: 30.0,
            speed: 10.0,
            life: 60,
        }
    }
}

/// Per-tier asteroid constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Collision radius
    pub radius: f32,
    /// Base speed magnitude
    pub speed: f32,
    /// Degrees added to the sprite angle every tick (cosmetic)
    pub spin: f32,
}

/// Constants for all three asteroid tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierTable {
    /// Large asteroids, spawned at start
    pub large: TierConfig,
    /// Medium asteroids, produced by large splits
    pub medium: TierConfig,
    /// Small asteroids, produced by large and medium splits
    pub small: TierConfig,
}

impl TierTable {
    /// Returns the constants for `tier`.
    #[must_use]
    pub const fn get(&self, tier: AsteroidTier) -> &TierConfig {
        match tier {
            AsteroidTier::Large => &self.large,
            AsteroidTier::Medium => &self.medium,
            AsteroidTier::Small => &self.small,
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            large: TierConfig {
                radius: 15.0,
                speed: 1.5,
                spin: 1.0,
            },
            medium: TierConfig {
                radius: 5.0,
                speed: 1.5,
                spin: -2.0,
            },
            small: TierConfig {
                radius: 2.0,
                speed: 1.5,
                spin: 5.0,
            },
        }
    }
}

/// Inclusive integer range sampled by the field spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRange {
    /// Smallest value drawn
    pub min: i32,
    /// Largest value drawn
    pub max: i32,
}

impl SpawnRange {
    /// Creates the range `min..=max`.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies in the range.
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Initial asteroid field layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of large asteroids spawned at start
    pub initial_asteroids: usize,
    /// Spawn x coordinate range
    pub spawn_x: SpawnRange,
    /// Spawn y coordinate range
    pub spawn_y: SpawnRange,
    /// Initial heading range in degrees
    pub heading_degrees: SpawnRange,
    /// Heading of a freshly built split child before the split adjusts it
    pub child_heading_degrees: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            initial_asteroids: 5,
            spawn_x: SpawnRange::new(1, 50),
            spawn_y: SpawnRange::new(1, 150),
            heading_degrees: SpawnRange::new(1, 50),
            child_heading_degrees: 1.0,
        }
    }
}

// =============================================================================
// SimConfig
// =============================================================================

/// Complete, immutable tuning for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Playfield size
    pub bounds: ScreenBounds,
    /// Ship handling
    pub ship: ShipConfig,
    /// Projectile ballistics
    pub projectile: ProjectileConfig,
    /// Asteroid tier constants
    pub asteroids: TierTable,
    /// Initial field layout
    pub field: FieldConfig,
}

impl SimConfig {
    /// Parses a JSON document and validates the result.
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any validation
    /// error reported by [`SimConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the simulation relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: non-positive bounds or radii,
    /// a projectile life below one tick, a non-finite tuning value, or an
    /// empty spawn range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScreenBounds { width, height } = self.bounds;
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ConfigError::NonPositiveBounds { width, height });
        }

        let radii = [
            ("ship", self.ship.radius),
            ("projectile", self.projectile.radius),
            ("large asteroid", self.asteroids.large.radius),
            ("medium asteroid", self.asteroids.medium.radius),
            ("small asteroid", self.asteroids.small.radius),
        ];
        for (entity, radius) in radii {
            if !(radius > 0.0) || !radius.is_finite() {
                return Err(ConfigError::NonPositiveRadius { entity, radius });
            }
        }

        if self.projectile.life < 1 {
            return Err(ConfigError::NonPositiveLife {
                life: self.projectile.life,
            });
        }

        let finite = [
            ("ship.turn_rate", self.ship.turn_rate),
            ("ship.thrust", self.ship.thrust),
            ("projectile.speed", self.projectile.speed),
            ("asteroids.large.speed", self.asteroids.large.speed),
            ("asteroids.large.spin", self.asteroids.large.spin),
            ("asteroids.medium.speed", self.asteroids.medium.speed),
            ("asteroids.medium.spin", self.asteroids.medium.spin),
            ("asteroids.small.speed", self.asteroids.small.speed),
            ("asteroids.small.spin", self.asteroids.small.spin),
            ("field.child_heading_degrees", self.field.child_heading_degrees),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let ranges = [
            ("spawn_x", self.field.spawn_x),
            ("spawn_y", self.field.spawn_y),
            ("heading_degrees", self.field.heading_degrees),
        ];
        for (axis, range) in ranges {
            if range.min > range.max {
                return Err(ConfigError::InvalidSpawnRange {
                    axis,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        Ok(())
    }

    /// Returns the constants for an asteroid tier.
    #[must_use]
    pub const fn tier(&self, tier: AsteroidTier) -> &TierConfig {
        self.asteroids.get(tier)
    }
}

// =============================================================================
// Tests
// =============================================================================
