//! Integration tests for the full simulation pipeline.
//!
//! These tests drive [`Simulation::step`] end to end, testing:
//! - Firing, projectile flight and expiry
//! - Asteroid splitting through the collision pass
//! - Ship destruction and the terminal display states
//! - Wrapping of bodies at the playfield edges

use glam::Vec2;

use crate::entity::{AsteroidTier, Kinematic};
use crate::event::SimEvent;
use crate::input::{FrameInput, HeldCommands};
use crate::simulation::Simulation;

use super::helpers::{
    count_tier, empty_sim, place_moving_rock, place_rock, setup_shooting_gallery, step_n,
    step_until,
};

fn is_split(event: &SimEvent) -> bool {
    matches!(event, SimEvent::AsteroidSplit { .. })
}

// =============================================================================
// Splitting
// =============================================================================

/// One large asteroid straight ahead of a stationary ship: the shot reaches
/// it on tick 15 and leaves exactly the three fragments behind.
#[test]
fn shot_large_asteroid_leaves_three_fragments() {
    let (mut sim, target) = setup_shooting_gallery();

    let fired = sim.step(&FrameInput::fire_once());
    assert!(fired.any(|e| matches!(e, SimEvent::ProjectileFired { .. })));

    let hit = step_until(&mut sim, &FrameInput::default(), 60, |r| r.any(is_split))
        .expect("projectile should reach the asteroid");

    assert_eq!(hit.tick, 15);
    assert_eq!(hit.reclaimed.asteroids, 1);
    assert_eq!(hit.reclaimed.projectiles, 1);

    assert!(sim.arena().asteroid(target).is_none());
    assert_eq!(sim.arena().asteroid_count(), 3);
    assert_eq!(count_tier(&sim, AsteroidTier::Medium), 2);
    assert_eq!(count_tier(&sim, AsteroidTier::Small), 1);
    assert_eq!(sim.arena().projectile_count(), 0);
    assert!(!sim.is_ship_destroyed());
    assert!(!sim.is_field_cleared());

    // Fragments start at the parent's position.
    for (_, fragment) in sim.arena().asteroids() {
        assert_eq!(fragment.position(), Vec2::new(500.0, 600.0));
    }
}

#[test]
fn shot_medium_asteroid_leaves_two_small() {
    let mut sim = empty_sim();
    let target = place_rock(&mut sim, AsteroidTier::Medium, Vec2::new(500.0, 450.0));

    sim.step(&FrameInput::fire_once());
    let hit = step_until(&mut sim, &FrameInput::default(), 10, |r| r.any(is_split))
        .expect("projectile should reach the asteroid");

    let children = match &hit.events[..] {
        [SimEvent::AsteroidSplit { parent, tier, children, .. }] => {
            assert_eq!(*parent, target);
            assert_eq!(*tier, AsteroidTier::Medium);
            children.clone()
        }
        other => panic!("unexpected events: {other:?}"),
    };

    assert_eq!(children.len(), 2);
    assert_eq!(count_tier(&sim, AsteroidTier::Small), 2);
    let first = sim.arena().asteroid(children[0]).unwrap();
    let second = sim.arena().asteroid(children[1]).unwrap();
    assert_eq!(first.velocity(), Vec2::new(-2.0, -2.0));
    assert_eq!(second.velocity(), Vec2::ZERO);
}

#[test]
fn shot_last_small_asteroid_clears_field() {
    let mut sim = empty_sim();
    place_rock(&mut sim, AsteroidTier::Small, Vec2::new(500.0, 450.0));

    sim.step(&FrameInput::fire_once());
    let report = step_until(&mut sim, &FrameInput::default(), 10, |r| {
        r.any(|e| *e == SimEvent::FieldCleared)
    })
    .expect("field should clear");

    assert!(report.any(is_split));
    assert!(sim.is_field_cleared());
    assert!(sim.view().field_cleared);

    // Terminal states are display-only.
    step_n(&mut sim, &FrameInput::holding(HeldCommands::TURN_LEFT), 3);
    assert_eq!(sim.ship().angle(), 9.0);
}

// =============================================================================
// Ship
// =============================================================================

#[test]
fn asteroid_contact_destroys_ship_without_split() {
    let mut sim = empty_sim();
    let rock = place_rock(&mut sim, AsteroidTier::Large, Vec2::new(520.0, 400.0));

    let report = sim.step(&FrameInput::default());
    assert_eq!(report.events, vec![SimEvent::ShipDestroyed { by: rock }]);
    assert!(sim.is_ship_destroyed());
    assert!(sim.view().ship_destroyed);
    assert_eq!(sim.arena().asteroid_count(), 1);

    // Stepping continues; the wreck ignores input and stays put.
    let position = sim.ship().position();
    let reports = step_n(
        &mut sim,
        &FrameInput::holding(HeldCommands::THRUST | HeldCommands::TURN_LEFT).with_fire(1),
        10,
    );
    assert!(reports.iter().all(|r| r.events.is_empty()));
    assert_eq!(sim.tick(), 11);
    assert_eq!(sim.ship().position(), position);
    assert_eq!(sim.ship().angle(), 0.0);
    assert_eq!(sim.arena().projectile_count(), 0);
}

#[test]
fn thrust_and_turn_compose_in_one_tick() {
    let mut sim = empty_sim();
    sim.step(&FrameInput::holding(HeldCommands::TURN_RIGHT | HeldCommands::THRUST));

    // Angle -3 degrees: the nose points slightly to +x.
    let velocity = sim.ship().velocity();
    assert_eq!(sim.ship().angle(), -3.0);
    assert!(velocity.x > 0.0);
    assert!((velocity.length() - 0.25).abs() < 1e-6);
}

// =============================================================================
// Projectiles and wrapping
// =============================================================================

#[test]
fn unobstructed_projectile_expires_after_its_life() {
    let mut sim = empty_sim();
    sim.step(&FrameInput::fire_once());

    let report = step_until(&mut sim, &FrameInput::default(), 100, |r| {
        r.any(|e| matches!(e, SimEvent::ProjectileExpired { .. }))
    })
    .expect("projectile should expire");

    // Fired and first advanced on tick 0, so the 60th advance is tick 59.
    assert_eq!(report.tick, 59);
    assert_eq!(report.reclaimed.projectiles, 1);
    assert_eq!(sim.arena().projectile_count(), 0);
}

#[test]
fn projectile_wraps_across_top_edge() {
    let mut sim = empty_sim();
    sim.step(&FrameInput::fire_once());
    // From y=410 the shot passes y=800 after 40 more ticks and reappears low.
    step_n(&mut sim, &FrameInput::default(), 41);

    let (_, shot) = sim.arena().projectiles().next().unwrap();
    assert!(shot.is_alive());
    assert!(shot.position().y < 400.0);
}

#[test]
fn asteroid_wraps_across_right_edge() {
    let mut sim = empty_sim();
    let rock = place_moving_rock(
        &mut sim,
        AsteroidTier::Large,
        Vec2::new(999.0, 100.0),
        Vec2::new(5.0, 0.0),
    );

    step_n(&mut sim, &FrameInput::default(), 2);
    assert_eq!(sim.arena().asteroid(rock).unwrap().position(), Vec2::new(5.0, 100.0));
}

#[test]
fn fire_between_frames_joins_next_report() {
    let mut sim = Simulation::new(crate::config::SimConfig::default(), 9);
    let shot = sim.fire().unwrap();
    let report = sim.step(&FrameInput::default());
    assert_eq!(report.events.first(), Some(&SimEvent::ProjectileFired { projectile: shot }));
}
