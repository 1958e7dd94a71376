//! Collision resolver: projectile hits and ship destruction.
//!
//! Collision is an axis-aligned box test, not a circle test: two bodies touch
//! when their centres are closer than the sum of their radii on *both* axes
//! (see [`boxes_overlap`]). Points on the diagonal that lie outside the
//! circle but inside the square still collide.
//!
//! # Pass Order
//!
//! 1. For each live projectile (id order), scan the asteroids (id order). The
//!    first live asteroid it overlaps is split and the projectile dies. The
//!    asteroid ids are snapshotted when each projectile's scan starts, so
//!    fragments from an earlier hit in the same tick can be hit by later
//!    projectiles.
//! 2. For each live asteroid (id order), if the ship is alive and overlaps it,
//!    the ship dies. The asteroid is not split.

use glam::Vec2;
use tracing::{debug, info};

use crate::arena::Arena;
use crate::config::SimConfig;
use crate::entity::{EntityId, Kinematic, Ship};
use crate::event::{SimEvent, TickReport};

use super::Resolver;

/// Returns true if the boxes of half-size `ra` around `a` and `rb` around `b`
/// overlap.
///
/// The test is strict: bodies exactly `ra + rb` apart on either axis do not
/// collide.
///
/// # Example
///
/// ```
/// use rockfield_core::resolver::boxes_overlap;
/// use glam::Vec2;
///
/// assert!(boxes_overlap(Vec2::ZERO, 30.0, Vec2::new(40.0, 40.0), 15.0));
/// assert!(!boxes_overlap(Vec2::ZERO, 30.0, Vec2::new(45.0, 0.0), 15.0));
/// ```
#[must_use]
pub fn boxes_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    let delta = (a - b).abs();
    delta.x < reach && delta.y < reach
}

fn touches<A: Kinematic, B: Kinematic>(a: &A, b: &B) -> bool {
    boxes_overlap(a.position(), a.radius(), b.position(), b.radius())
}

/// Resolver for every collision that changes state.
#[derive(Debug, Clone, Default)]
pub struct CollisionResolver;

impl CollisionResolver {
    /// Creates a new collision resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Finds the first live asteroid that `projectile` overlaps, splits it and
    /// kills the projectile.
    fn resolve_projectile(arena: &mut Arena, projectile: EntityId, config: &SimConfig, report: &mut TickReport) {
        let Some(shot) = arena.projectile(projectile) else {
            return;
        };
        if !shot.is_alive() {
            return;
        }

        let target = arena.asteroid_ids().into_iter().find(|id| {
            arena
                .asteroid(*id)
                .is_some_and(|asteroid| asteroid.is_alive() && touches(shot, asteroid))
        });
        let Some(target) = target else {
            return;
        };

        let Some(tier) = arena.asteroid(target).map(|asteroid| asteroid.tier()) else {
            return;
        };
        let children = arena.split_asteroid(target, config);
        if let Some(shot) = arena.projectile_mut(projectile) {
            shot.kill();
        }

        debug!(
            asteroid = %target,
            %tier,
            fragments = children.len(),
            by = %projectile,
            "asteroid split"
        );
        report.push(SimEvent::AsteroidSplit {
            parent: target,
            tier,
            children,
            by: projectile,
        });
    }

    /// Kills the ship if any live asteroid overlaps it.
    fn resolve_ship(arena: &Arena, ship: &mut Ship, report: &mut TickReport) {
        for (id, asteroid) in arena.asteroids() {
            if !ship.is_alive() {
                return;
            }
            if asteroid.is_alive() && touches(&*ship, asteroid) {
                ship.kill();
                info!(by = %id, tick = report.tick, "ship destroyed");
                report.push(SimEvent::ShipDestroyed { by: id });
            }
        }
    }
}

impl Resolver for CollisionResolver {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn resolve(&self, arena: &mut Arena, ship: &mut Ship, config: &SimConfig, report: &mut TickReport) {
        for projectile in arena.projectile_ids() {
            Self::resolve_projectile(arena, projectile, config, report);
        }
        Self::resolve_ship(arena, ship, report);
    }
}
