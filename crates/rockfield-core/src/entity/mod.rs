//! Entities of the asteroid field.
//!
//! Every moving thing in the game is a concrete variant struct built around a
//! shared [`Body`]:
//! - [`Ship`]: the player's craft, a singleton owned by the simulation
//! - [`Projectile`]: a shot with a limited life
//! - [`Asteroid`]: a rock of one of three [`AsteroidTier`]s that splits when hit
//!
//! The variants share behaviour through the [`Kinematic`] capability trait
//! rather than a common base type. [`EntityKind`] is the tag a renderer uses to
//! pick a sprite.
//!
//! # Example
//!
//! ```
//! use rockfield_core::config::SimConfig;
//! use rockfield_core::entity::{Asteroid, AsteroidTier, EntityKind, Kinematic};
//! use glam::Vec2;
//!
//! let config = SimConfig::default();
//! let mut rock = Asteroid::new(
//!     AsteroidTier::Medium,
//!     Vec2::new(100.0, 100.0),
//!     Vec2::new(1.0, 0.0),
//!     &config,
//! );
//!
//! rock.advance(&config);
//!
//! assert_eq!(rock.kind(), EntityKind::Asteroid(AsteroidTier::Medium));
//! assert_eq!(rock.position(), Vec2::new(101.0, 100.0));
//! ```

pub mod asteroid;
pub mod body;
pub mod projectile;
pub mod ship;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SimConfig;

pub use asteroid::{Asteroid, AsteroidTier};
pub use body::Body;
pub use projectile::Projectile;
pub use ship::Ship;

/// Stable handle for an entity held by the [`Arena`](crate::arena::Arena).
///
/// Ids are handed out in increasing order and never reused, so a handle taken
/// before a split or a reclamation pass stays meaningful afterwards: it either
/// still names the same entity or names nothing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Which variant an entity is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player's ship
    Ship,
    /// A fired shot
    Projectile,
    /// An asteroid of the given tier
    Asteroid(AsteroidTier),
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ship => write!(f, "Ship"),
            Self::Projectile => write!(f, "Projectile"),
            Self::Asteroid(tier) => write!(f, "{tier} asteroid"),
        }
    }
}

/// Capabilities shared by every moving entity.
///
/// Implementors only supply access to their [`Body`], their [`EntityKind`]
/// and their per-tick [`advance`](Kinematic::advance); the rest is derived
/// from the body.
pub trait Kinematic {
    /// Shared kinematic state.
    fn body(&self) -> &Body;

    /// Mutable access to the shared kinematic state.
    fn body_mut(&mut self) -> &mut Body;

    /// Variant tag.
    fn kind(&self) -> EntityKind;

    /// Moves the entity forward by one tick. A dead entity does not move.
    fn advance(&mut self, config: &SimConfig);

    /// Returns true until the entity has been killed.
    fn is_alive(&self) -> bool {
        self.body().is_alive()
    }

    /// Collision radius.
    fn radius(&self) -> f32 {
        self.body().radius()
    }

    /// Current position.
    fn position(&self) -> Vec2 {
        self.body().position
    }

    /// Current angle in degrees.
    fn angle(&self) -> f32 {
        self.body().angle
    }

    /// Marks the entity dead. Dead entities never come back.
    fn kill(&mut self) {
        self.body_mut().kill();
    }
}
