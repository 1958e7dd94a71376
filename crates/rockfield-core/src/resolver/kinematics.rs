//! Kinematics resolver: moves everything by one tick.
//!
//! Bodies are advanced in a fixed order: every asteroid, then the ship, then
//! every projectile. Motion is per tick, not per second; there is no timestep
//! scaling. Projectiles whose life runs out during the advance are reported
//! as expired.

use tracing::debug;

use crate::arena::Arena;
use crate::config::SimConfig;
use crate::entity::{Kinematic, Ship};
use crate::event::{SimEvent, TickReport};

use super::Resolver;

/// Resolver that advances every live body.
///
/// # Example
///
/// ```
/// use rockfield_core::resolver::{KinematicsResolver, Resolver};
///
/// let resolver = KinematicsResolver::new();
/// assert_eq!(resolver.name(), "kinematics");
/// ```
#[derive(Debug, Clone, Default)]
pub struct KinematicsResolver;

impl KinematicsResolver {
    /// Creates a new kinematics resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for KinematicsResolver {
    fn name(&self) -> &'static str {
        "kinematics"
    }

    fn resolve(&self, arena: &mut Arena, ship: &mut Ship, config: &SimConfig, report: &mut TickReport) {
        for (_, asteroid) in arena.asteroids_mut() {
            asteroid.advance(config);
        }

        ship.advance(config);

        for (id, projectile) in arena.projectiles_mut() {
            if !projectile.is_alive() {
                continue;
            }
            projectile.advance(config);
            if !projectile.is_alive() {
                debug!(projectile = %id, "projectile expired");
                report.push(SimEvent::ProjectileExpired { projectile: id });
            }
        }
    }
}
