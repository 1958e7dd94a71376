//! Test helper functions for setting up simulations and scenarios.
//!
//! This module provides factory functions and setup utilities that make
//! writing tests more ergonomic and consistent.

use glam::Vec2;

use crate::config::SimConfig;
use crate::entity::{Asteroid, AsteroidTier, EntityId};
use crate::event::TickReport;
use crate::input::FrameInput;
use crate::simulation::Simulation;

// =============================================================================
// Scenario Setup
// =============================================================================

/// Creates a simulation with the default config, a ship at the centre and no
/// asteroids.
pub fn empty_sim() -> Simulation {
    Simulation::without_field(SimConfig::default())
}

/// Places a stationary asteroid of `tier` at `position`.
///
/// # Returns
///
/// The id of the new asteroid.
pub fn place_rock(sim: &mut Simulation, tier: AsteroidTier, position: Vec2) -> EntityId {
    place_moving_rock(sim, tier, position, Vec2::ZERO)
}

/// Places an asteroid of `tier` at `position` moving with `velocity`.
pub fn place_moving_rock(
    sim: &mut Simulation,
    tier: AsteroidTier,
    position: Vec2,
    velocity: Vec2,
) -> EntityId {
    let asteroid = Asteroid::new(tier, position, velocity, sim.config());
    sim.arena_mut().spawn_asteroid(asteroid)
}

/// Sets up the shooting gallery: an empty field with one stationary large
/// asteroid 200 units straight ahead of the ship.
///
/// # Returns
///
/// A tuple of (simulation, asteroid id).
pub fn setup_shooting_gallery() -> (Simulation, EntityId) {
    let mut sim = empty_sim();
    let target = place_rock(&mut sim, AsteroidTier::Large, Vec2::new(500.0, 600.0));
    (sim, target)
}

// =============================================================================
// Stepping
// =============================================================================

/// Runs `n` steps with the same input and returns every report.
pub fn step_n(sim: &mut Simulation, input: &FrameInput, n: usize) -> Vec<TickReport> {
    (0..n).map(|_| sim.step(input)).collect()
}

/// Steps with `input` until `done` accepts a report, at most `max_steps` times.
///
/// # Returns
///
/// The accepting report, or `None` if the limit was reached first.
pub fn step_until(
    sim: &mut Simulation,
    input: &FrameInput,
    max_steps: usize,
    done: impl Fn(&TickReport) -> bool,
) -> Option<TickReport> {
    for _ in 0..max_steps {
        let report = sim.step(input);
        if done(&report) {
            return Some(report);
        }
    }
    None
}

/// Number of live asteroids of `tier`.
pub fn count_tier(sim: &Simulation, tier: AsteroidTier) -> usize {
    sim.view().count_tier(tier)
}
