//! Asteroids and the split policy.
//!
//! Asteroids come in three tiers. Shooting one destroys it and, unless it is
//! already the smallest tier, leaves fragments at its position:
//!
//! | Destroyed | Fragments |
//! |-----------|-----------|
//! | Large     | 2 Medium + 1 Small |
//! | Medium    | 2 Small |
//! | Small     | none |
//!
//! A fragment starts from its tier's default velocity, then the split
//! overrides some components relative to the parent. Medium fragments
//! default to the tier speed along the configured child heading; small
//! fragments default to rest.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::body::{heading_vector, Body};
use super::{EntityKind, Kinematic};
use crate::config::SimConfig;

/// `dy` offset given to the two medium fragments of a large asteroid.
const LARGE_SPLIT_MEDIUM_DY: f32 = 2.0;
/// `dy` offset given to the small fragment of a large asteroid.
const LARGE_SPLIT_SMALL_DY: f32 = 5.0;
/// Offset subtracted on both axes from a medium asteroid's velocity for its
/// first fragment.
const MEDIUM_SPLIT_OFFSET: f32 = 2.0;

/// Asteroid size class.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AsteroidTier {
    /// Spawned at the start of the game
    Large,
    /// Produced by splitting a large asteroid
    Medium,
    /// Produced by splitting a large or medium asteroid; leaves nothing behind
    Small,
}

impl AsteroidTier {
    /// All tiers, largest first.
    pub const ALL: [Self; 3] = [Self::Large, Self::Medium, Self::Small];

    /// Number of fragments a destroyed asteroid of this tier leaves.
    #[must_use]
    pub const fn fragment_count(self) -> usize {
        match self {
            Self::Large => 3,
            Self::Medium => 2,
            Self::Small => 0,
        }
    }
}

impl fmt::Display for AsteroidTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Large => write!(f, "Large"),
            Self::Medium => write!(f, "Medium"),
            Self::Small => write!(f, "Small"),
        }
    }
}

/// A drifting, spinning asteroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    body: Body,
    tier: AsteroidTier,
}

impl Asteroid {
    /// Creates an asteroid with an explicit velocity.
    #[must_use]
    pub fn new(tier: AsteroidTier, position: Vec2, velocity: Vec2, config: &SimConfig) -> Self {
        Self {
            body: Body::new(position, velocity, config.tier(tier).radius),
            tier,
        }
    }

    /// Creates an asteroid with its tier's default fragment velocity.
    #[must_use]
    pub fn with_default_velocity(tier: AsteroidTier, position: Vec2, config: &SimConfig) -> Self {
        Self::new(tier, position, default_velocity(tier, config), config)
    }

    /// Creates a large asteroid with a position and heading drawn from the
    /// configured spawn ranges.
    ///
    /// # Panics
    ///
    /// Panics if a spawn range is empty (`min > max`).
    #[must_use]
    pub fn random_large<R: Rng + ?Sized>(rng: &mut R, config: &SimConfig) -> Self {
        let field = &config.field;
        #[allow(clippy::cast_precision_loss)]
        let (x, y, heading) = (
            rng.gen_range(field.spawn_x.min..=field.spawn_x.max) as f32,
            rng.gen_range(field.spawn_y.min..=field.spawn_y.max) as f32,
            rng.gen_range(field.heading_degrees.min..=field.heading_degrees.max) as f32,
        );
        let speed = config.tier(AsteroidTier::Large).speed;
        Self::new(
            AsteroidTier::Large,
            Vec2::new(x, y),
            heading_vector(heading) * speed,
            config,
        )
    }

    /// Size class.
    #[must_use]
    pub const fn tier(&self) -> AsteroidTier {
        self.tier
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    /// Destroys this asteroid and appends its fragments to `fragments`.
    ///
    /// Returns the number of fragments appended. Splitting an asteroid that is
    /// already dead does nothing and returns zero, so a split can never be
    /// applied twice.
    pub fn split(&mut self, config: &SimConfig, fragments: &mut Vec<Asteroid>) -> usize {
        if !self.body.is_alive() {
            return 0;
        }

        let position = self.body.position;
        let parent = self.body.velocity;
        let start = fragments.len();

        match self.tier {
            AsteroidTier::Large => {
                let mut upper = Self::with_default_velocity(AsteroidTier::Medium, position, config);
                upper.body.velocity.y = parent.y + LARGE_SPLIT_MEDIUM_DY;

                let mut lower = Self::with_default_velocity(AsteroidTier::Medium, position, config);
                lower.body.velocity.y = parent.y - LARGE_SPLIT_MEDIUM_DY;

                let mut chip = Self::with_default_velocity(AsteroidTier::Small, position, config);
                chip.body.velocity.y = parent.y + LARGE_SPLIT_SMALL_DY;

                fragments.extend([upper, lower, chip]);
            }
            AsteroidTier::Medium => {
                // Only the first fragment is offset; the second keeps the
                // small-tier default velocity.
                let mut first = Self::with_default_velocity(AsteroidTier::Small, position, config);
                first.body.velocity = parent - Vec2::splat(MEDIUM_SPLIT_OFFSET);

                let second = Self::with_default_velocity(AsteroidTier::Small, position, config);

                fragments.extend([first, second]);
            }
            AsteroidTier::Small => {}
        }

        self.body.kill();
        fragments.len() - start
    }
}

/// Velocity a freshly built fragment of `tier` starts with.
fn default_velocity(tier: AsteroidTier, config: &SimConfig) -> Vec2 {
    match tier {
        AsteroidTier::Large | AsteroidTier::Medium => {
            heading_vector(config.field.child_heading_degrees) * config.tier(tier).speed
        }
        AsteroidTier::Small => Vec2::ZERO,
    }
}

impl Kinematic for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Asteroid(self.tier)
    }

    fn advance(&mut self, config: &SimConfig) {
        if !self.body.is_alive() {
            return;
        }
        self.body.advance(&config.bounds);
        self.body.angle += config.tier(self.tier).spin;
    }
}
