//! Arena: the registry that owns every asteroid and projectile.
//!
//! The Arena provides:
//! - Asteroid and projectile storage with deterministic iteration order (`BTreeMap`)
//! - Stable [`EntityId`] handles that survive splits and reclamation
//! - The split operation that kills an asteroid and inserts its fragments
//! - Deferred removal of dead entities ([`Arena::reclaim`])
//! - Simulation tick tracking
//!
//! # Deferred Removal
//!
//! Nothing is removed while a pass is iterating. Entities are killed in place
//! and stay in the arena, inert, until the reclamation pass at the end of the
//! tick drops them with `retain`. Passes that may insert entities while
//! scanning (a split adds fragments) iterate over an id snapshot taken from
//! [`Arena::asteroid_ids`] rather than over the live map.
//!
//! # Example
//!
//! ```
//! use rockfield_core::arena::Arena;
//! use rockfield_core::config::SimConfig;
//! use rockfield_core::entity::{Asteroid, AsteroidTier, Kinematic};
//! use glam::Vec2;
//!
//! let config = SimConfig::default();
//! let mut arena = Arena::new();
//!
//! let rock = arena.spawn_asteroid(Asteroid::new(
//!     AsteroidTier::Large,
//!     Vec2::new(100.0, 100.0),
//!     Vec2::ZERO,
//!     &config,
//! ));
//!
//! let fragments = arena.split_asteroid(rock, &config);
//! assert_eq!(fragments.len(), 3);
//!
//! // The parent is dead but still present until reclamation.
//! assert!(!arena.asteroid(rock).unwrap().is_alive());
//! let reclaimed = arena.reclaim();
//! assert_eq!(reclaimed.asteroids, 1);
//! assert!(arena.asteroid(rock).is_none());
//! assert_eq!(arena.asteroid_count(), 3);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::entity::{Asteroid, EntityId, Kinematic, Projectile};

/// Counts of entities removed by one [`Arena::reclaim`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reclaimed {
    /// Dead projectiles removed
    pub projectiles: usize,
    /// Dead asteroids removed
    pub asteroids: usize,
}

impl Reclaimed {
    /// Total number of entities removed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.projectiles + self.asteroids
    }
}

/// Registry owning the asteroid and projectile collections.
///
/// The ship is not stored here; it is a singleton owned by the
/// [`Simulation`](crate::simulation::Simulation).
///
/// # Determinism
///
/// Both collections are `BTreeMap`s keyed by monotonically assigned ids, so
/// iteration always visits entities in spawn order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arena {
    /// Next id to hand out. Shared by both collections.
    next_id: u64,
    asteroids: BTreeMap<EntityId, Asteroid>,
    projectiles: BTreeMap<EntityId, Projectile>,
    tick: u64,
}

impl Arena {
    /// Creates an empty arena at tick 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            asteroids: BTreeMap::new(),
            projectiles: BTreeMap::new(),
            tick: 0,
        }
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        id
    }

    // ========================================================================
    // Asteroids
    // ========================================================================

    /// Takes ownership of an asteroid and returns its handle.
    pub fn spawn_asteroid(&mut self, asteroid: Asteroid) -> EntityId {
        let id = self.allocate_id();
        self.asteroids.insert(id, asteroid);
        id
    }

    /// Returns the asteroid with the given id, dead or alive.
    #[must_use]
    pub fn asteroid(&self, id: EntityId) -> Option<&Asteroid> {
        self.asteroids.get(&id)
    }

    /// Returns a mutable reference to an asteroid.
    #[must_use]
    pub fn asteroid_mut(&mut self, id: EntityId) -> Option<&mut Asteroid> {
        self.asteroids.get_mut(&id)
    }

    /// Snapshot of all asteroid ids in iteration order.
    ///
    /// Safe to walk while the arena is mutated: ids of entities inserted
    /// later are not included.
    #[must_use]
    pub fn asteroid_ids(&self) -> Vec<EntityId> {
        self.asteroids.keys().copied().collect()
    }

    /// Iterates over asteroids in id order.
    pub fn asteroids(&self) -> impl Iterator<Item = (EntityId, &Asteroid)> + '_ {
        self.asteroids.iter().map(|(id, asteroid)| (*id, asteroid))
    }

    /// Iterates mutably over asteroids in id order.
    pub fn asteroids_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Asteroid)> + '_ {
        self.asteroids.iter_mut().map(|(id, asteroid)| (*id, asteroid))
    }

    /// Number of asteroids held, including dead ones awaiting reclamation.
    #[must_use]
    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    /// Destroys an asteroid and inserts its fragments.
    ///
    /// The parent is killed and every fragment is inserted in the same call,
    /// so a caller never observes a half-applied split. Returns the ids of
    /// the fragments; the result is empty for a small asteroid, for an
    /// asteroid that is already dead, and for an unknown id.
    pub fn split_asteroid(&mut self, id: EntityId, config: &SimConfig) -> Vec<EntityId> {
        let mut fragments = Vec::new();
        match self.asteroids.get_mut(&id) {
            Some(asteroid) => {
                asteroid.split(config, &mut fragments);
            }
            None => return Vec::new(),
        }
        fragments
            .into_iter()
            .map(|fragment| self.spawn_asteroid(fragment))
            .collect()
    }

    // ========================================================================
    // Projectiles
    // ========================================================================

    /// Takes ownership of a projectile and returns its handle.
    pub fn spawn_projectile(&mut self, projectile: Projectile) -> EntityId {
        let id = self.allocate_id();
        self.projectiles.insert(id, projectile);
        id
    }

    /// Returns the projectile with the given id, dead or alive.
    #[must_use]
    pub fn projectile(&self, id: EntityId) -> Option<&Projectile> {
        self.projectiles.get(&id)
    }

    /// Returns a mutable reference to a projectile.
    #[must_use]
    pub fn projectile_mut(&mut self, id: EntityId) -> Option<&mut Projectile> {
        self.projectiles.get_mut(&id)
    }

    /// Snapshot of all projectile ids in iteration order.
    #[must_use]
    pub fn projectile_ids(&self) -> Vec<EntityId> {
        self.projectiles.keys().copied().collect()
    }

    /// Iterates over projectiles in id order.
    pub fn projectiles(&self) -> impl Iterator<Item = (EntityId, &Projectile)> + '_ {
        self.projectiles.iter().map(|(id, projectile)| (*id, projectile))
    }

    /// Iterates mutably over projectiles in id order.
    pub fn projectiles_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Projectile)> + '_ {
        self.projectiles.iter_mut().map(|(id, projectile)| (*id, projectile))
    }

    /// Number of projectiles held, including dead ones awaiting reclamation.
    #[must_use]
    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Removes every dead asteroid and projectile.
    ///
    /// Must not be called while another pass holds an iterator over the
    /// arena; the simulation runs it as the last phase of each tick.
    pub fn reclaim(&mut self) -> Reclaimed {
        let projectiles_before = self.projectiles.len();
        let asteroids_before = self.asteroids.len();

        self.projectiles.retain(|_, projectile| projectile.is_alive());
        self.asteroids.retain(|_, asteroid| asteroid.is_alive());

        Reclaimed {
            projectiles: projectiles_before - self.projectiles.len(),
            asteroids: asteroids_before - self.asteroids.len(),
        }
    }

    /// Returns true when no asteroids remain.
    #[must_use]
    pub fn is_field_cleared(&self) -> bool {
        self.asteroids.is_empty()
    }

    /// Returns the current simulation tick.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Advances the tick counter by one.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }
}

// =============================================================================
// Tests
// =============================================================================
