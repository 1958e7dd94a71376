//! Resolvers: the fixed phases of a simulation tick.
//!
//! After input has been applied to the ship, each tick runs the resolvers in
//! order. Every resolver mutates the arena and the ship in place and records
//! what happened in the tick report.
//!
//! # Invariants
//!
//! - Resolvers MUST be deterministic given the same state and config
//! - Resolvers MUST visit entities in id order
//! - Only [`ReclaimResolver`] removes entities; the others kill in place
//!
//! # Available Resolvers
//!
//! - [`KinematicsResolver`]: Advances every body by one tick
//! - [`CollisionResolver`]: Projectile/asteroid splits and ship destruction
//! - [`ReclaimResolver`]: Removes dead entities at the end of the tick

mod collision;
mod kinematics;
mod reclaim;

pub use collision::{boxes_overlap, CollisionResolver};
pub use kinematics::KinematicsResolver;
pub use reclaim::ReclaimResolver;

use crate::arena::Arena;
use crate::config::SimConfig;
use crate::entity::Ship;
use crate::event::TickReport;

/// One phase of the per-tick pipeline.
///
/// The phases a simulation runs are fixed by [`Pipeline`]; the trait gives
/// them a uniform call shape and lets tests drive a single phase.
///
/// # Example
///
/// ```
/// use rockfield_core::arena::Arena;
/// use rockfield_core::config::SimConfig;
/// use rockfield_core::entity::Ship;
/// use rockfield_core::event::TickReport;
/// use rockfield_core::resolver::{ReclaimResolver, Resolver};
///
/// let config = SimConfig::default();
/// let mut arena = Arena::new();
/// let mut ship = Ship::spawn(&config);
/// let mut report = TickReport::new(arena.current_tick());
///
/// let phase = ReclaimResolver::new();
/// assert_eq!(phase.name(), "reclaim");
/// phase.resolve(&mut arena, &mut ship, &config, &mut report);
/// ```
pub trait Resolver {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Runs this phase against the world.
    ///
    /// # Invariants
    ///
    /// - Must be deterministic given the same inputs
    /// - Must not remove entities from the arena unless it is the reclamation phase
    fn resolve(&self, arena: &mut Arena, ship: &mut Ship, config: &SimConfig, report: &mut TickReport);
}

/// The per-tick phases in their fixed execution order.
///
/// Reclamation always runs last, so nothing killed during a tick survives
/// into the frame view.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    kinematics: KinematicsResolver,
    collision: CollisionResolver,
    reclaim: ReclaimResolver,
}

impl Pipeline {
    /// Creates the standard pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The phases in execution order.
    #[must_use]
    pub fn phases(&self) -> [&dyn Resolver; 3] {
        [&self.kinematics, &self.collision, &self.reclaim]
    }

    /// Runs every phase once.
    pub fn run(&self, arena: &mut Arena, ship: &mut Ship, config: &SimConfig, report: &mut TickReport) {
        for phase in self.phases() {
            phase.resolve(arena, ship, config, report);
        }
    }
}
