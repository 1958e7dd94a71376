//! Events emitted by a simulation tick.
//!
//! Events describe what happened during a [`step`](crate::simulation::Simulation::step)
//! so a renderer can trigger effects. They are a record only; nothing in the
//! simulation reads them back.

use serde::{Deserialize, Serialize};

use crate::arena::Reclaimed;
use crate::entity::{AsteroidTier, EntityId};

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    /// The ship fired a projectile.
    ProjectileFired {
        /// The new projectile
        projectile: EntityId,
    },
    /// A projectile destroyed an asteroid.
    AsteroidSplit {
        /// The destroyed asteroid
        parent: EntityId,
        /// Tier of the destroyed asteroid
        tier: AsteroidTier,
        /// Fragments inserted in its place (empty for a small asteroid)
        children: Vec<EntityId>,
        /// The projectile that hit it
        by: EntityId,
    },
    /// A projectile ran out of life without hitting anything.
    ProjectileExpired {
        /// The expired projectile
        projectile: EntityId,
    },
    /// An asteroid hit the ship.
    ShipDestroyed {
        /// The asteroid that hit it
        by: EntityId,
    },
    /// The last asteroid was removed.
    FieldCleared,
}

/// Everything a single tick produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tick the report belongs to (the value before the counter advanced)
    pub tick: u64,
    /// Events in the order they happened
    pub events: Vec<SimEvent>,
    /// Entities removed by reclamation at the end of the tick
    pub reclaimed: Reclaimed,
}

impl TickReport {
    /// Creates an empty report for `tick`.
    #[must_use]
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            ..Self::default()
        }
    }

    /// Records an event.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Returns true if an event matching `predicate` was recorded.
    pub fn any(&self, predicate: impl Fn(&SimEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }

    /// Iterates over the split events.
    pub fn splits(&self) -> impl Iterator<Item = &SimEvent> + '_ {
        self.events
            .iter()
            .filter(|event| matches!(event, SimEvent::AsteroidSplit { .. }))
    }
}
