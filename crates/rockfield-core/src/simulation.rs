//! Simulation module with the per-tick execution loop.
//!
//! The `Simulation` owns the configuration, the arena, the ship and the
//! fixed resolver pipeline, and advances them one tick per [`Simulation::step`]:
//!
//! 1. **FIRE**: Each fire press spawns a projectile from the ship's current pose
//! 2. **INPUT**: Held commands become ship maneuvers (turn left, turn right,
//!    thrust, reverse)
//! 3. **RESOLUTION**: The resolvers run in order (kinematics, collision,
//!    reclamation)
//! 4. **APPLY**: The tick counter advances and the report is returned
//!
//! # Determinism
//!
//! The only randomness is the placement of the initial field, drawn from a
//! `ChaCha8Rng` seeded with the caller's seed. Everything after that is a
//! pure function of the inputs:
//! - Entities are iterated in id order (via `BTreeMap`)
//! - Held commands are applied in a fixed order
//! - Resolvers run in a fixed order
//!
//! # Example
//!
//! ```
//! use rockfield_core::config::SimConfig;
//! use rockfield_core::entity::Kinematic;
//! use rockfield_core::input::{FrameInput, HeldCommands};
//! use rockfield_core::simulation::Simulation;
//!
//! let mut sim = Simulation::new(SimConfig::default(), 42);
//! assert_eq!(sim.arena().asteroid_count(), 5);
//!
//! let report = sim.step(&FrameInput::holding(HeldCommands::TURN_LEFT).with_fire(1));
//! assert_eq!(report.tick, 0);
//! assert_eq!(sim.tick(), 1);
//! assert_eq!(sim.ship().angle(), 3.0);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use tracing::{debug, info, trace};

use crate::arena::Arena;
use crate::config::SimConfig;
use crate::entity::{Asteroid, EntityId, Kinematic, Projectile, Ship};
use crate::error::ConfigError;
use crate::event::{SimEvent, TickReport};
use crate::input::{FrameInput, HeldCommands};
use crate::resolver::{Pipeline, Resolver};
use crate::view::FrameView;

// =============================================================================
// Simulation
// =============================================================================

/// The main simulation orchestrator.
///
/// `Simulation` manages:
/// - The immutable tuning config
/// - The arena holding asteroids and projectiles
/// - The ship singleton
/// - The fixed pipeline of per-tick phases
///
/// Reaching a terminal state (ship destroyed or field cleared) does not stop
/// the simulation; both are display states and `step` keeps working.
pub struct Simulation {
    /// Tuning values, fixed for the lifetime of the simulation.
    config: SimConfig,
    /// Asteroids and projectiles.
    arena: Arena,
    /// The player's ship.
    ship: Ship,
    /// Per-tick phases, run in order.
    pipeline: Pipeline,
    /// Seed the initial field was drawn from, if any.
    seed: Option<u64>,
    /// Events raised between ticks, reported by the next step.
    pending: Vec<SimEvent>,
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("arena", &self.arena)
            .field("ship", &self.ship)
            .field("pipeline", &self.pipeline.phases().map(|phase| phase.name()))
            .field("seed", &self.seed)
            .field("pending", &self.pending)
            .finish()
    }
}

impl Simulation {
    /// Creates a simulation with the initial field drawn from `seed`.
    ///
    /// `config` is trusted; use [`Simulation::try_new`] for untrusted input.
    ///
    /// # Panics
    ///
    /// Panics if one of the field's spawn ranges is empty (`min > max`).
    /// [`SimConfig::validate`] rejects such configs.
    ///
    /// # Example
    ///
    /// ```
    /// use rockfield_core::config::SimConfig;
    /// use rockfield_core::simulation::Simulation;
    ///
    /// let sim = Simulation::new(SimConfig::default(), 12345);
    /// assert_eq!(sim.tick(), 0);
    /// assert_eq!(sim.seed(), Some(12345));
    /// ```
    #[must_use]
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut sim = Self::with_rng(config, &mut rng);
        sim.seed = Some(seed);
        info!(
            seed,
            asteroids = sim.arena.asteroid_count(),
            "simulation created"
        );
        sim
    }

    /// Validates `config`, then behaves like [`Simulation::new`].
    ///
    /// # Errors
    ///
    /// Returns the first constraint `config` violates.
    pub fn try_new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    /// Creates a simulation whose initial field is drawn from `rng`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Simulation::new`].
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(config: SimConfig, rng: &mut R) -> Self {
        let mut sim = Self::without_field(config);
        for _ in 0..sim.config.field.initial_asteroids {
            let asteroid = Asteroid::random_large(rng, &sim.config);
            let id = sim.arena.spawn_asteroid(asteroid);
            debug!(asteroid = %id, "large asteroid spawned");
        }
        sim
    }

    /// Creates a simulation with a ship and no asteroids.
    ///
    /// Scenarios place their own asteroids through [`Simulation::arena_mut`].
    #[must_use]
    pub fn without_field(config: SimConfig) -> Self {
        let ship = Ship::spawn(&config);
        Self {
            config,
            arena: Arena::new(),
            ship,
            pipeline: Pipeline::new(),
            seed: None,
            pending: Vec::new(),
        }
    }

    /// Executes one tick.
    ///
    /// # Execution Phases
    ///
    /// 1. **FIRE**: `input.fire_events` projectiles are spawned from the ship's
    ///    current position, angle and velocity. Ignored while the ship is dead.
    ///
    /// 2. **INPUT**: Held commands are applied as maneuvers in a fixed order:
    ///    turn left, turn right, thrust, reverse. Ignored while the ship is dead.
    ///
    /// 3. **RESOLUTION**: Kinematics, collision and reclamation run against
    ///    the arena and the ship, reclamation last.
    ///
    /// 4. **APPLY**: The tick counter advances.
    ///
    /// The returned report carries the tick the events belong to, every event
    /// raised since the previous step, and the reclamation counts.
    pub fn step(&mut self, input: &FrameInput) -> TickReport {
        let tick = self.arena.current_tick();
        let mut report = TickReport::new(tick);
        report.events.append(&mut self.pending);

        // PHASE 1: FIRE
        for _ in 0..input.fire_events {
            if let Some(projectile) = self.launch_projectile() {
                report.push(SimEvent::ProjectileFired { projectile });
            }
        }

        // PHASE 2: INPUT
        self.apply_held(input.held);

        // PHASE 3: RESOLUTION
        self.pipeline
            .run(&mut self.arena, &mut self.ship, &self.config, &mut report);

        // PHASE 4: APPLY
        self.arena.advance_tick();

        trace!(
            tick,
            asteroids = self.arena.asteroid_count(),
            projectiles = self.arena.projectile_count(),
            events = report.events.len(),
            "tick complete"
        );
        report
    }

    /// Fires one projectile immediately, outside of [`Simulation::step`].
    ///
    /// The [`SimEvent::ProjectileFired`] event is delivered with the next
    /// step's report. Returns `None` while the ship is dead.
    pub fn fire(&mut self) -> Option<EntityId> {
        let projectile = self.launch_projectile()?;
        self.pending.push(SimEvent::ProjectileFired { projectile });
        Some(projectile)
    }

    fn launch_projectile(&mut self) -> Option<EntityId> {
        if !self.ship.is_alive() {
            return None;
        }
        let mut projectile = Projectile::spawn(self.ship.angle(), self.ship.position(), &self.config.projectile);
        projectile.fire(self.ship.velocity(), self.config.projectile.speed);
        let id = self.arena.spawn_projectile(projectile);
        debug!(projectile = %id, angle = self.ship.angle(), "projectile fired");
        Some(id)
    }

    fn apply_held(&mut self, held: HeldCommands) {
        let ship_config = &self.config.ship;
        if held.contains(HeldCommands::TURN_LEFT) {
            self.ship.turn_left(ship_config);
        }
        if held.contains(HeldCommands::TURN_RIGHT) {
            self.ship.turn_right(ship_config);
        }
        if held.contains(HeldCommands::THRUST) {
            self.ship.thrust(ship_config);
        }
        if held.contains(HeldCommands::REVERSE) {
            self.ship.reverse(ship_config);
        }
    }

    /// Captures what a renderer should draw right now.
    #[must_use]
    pub fn view(&self) -> FrameView {
        FrameView::capture(&self.arena, &self.ship)
    }

    /// Returns true once no asteroids remain.
    #[must_use]
    pub fn is_field_cleared(&self) -> bool {
        self.arena.is_field_cleared()
    }

    /// Returns true once the ship has been destroyed.
    #[must_use]
    pub fn is_ship_destroyed(&self) -> bool {
        !self.ship.is_alive()
    }

    /// Returns a read-only reference to the arena.
    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Returns a mutable reference to the arena.
    ///
    /// Use this for scenario setup (placing asteroids) between steps.
    #[must_use]
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    /// Returns the ship.
    #[must_use]
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Returns a mutable reference to the ship.
    #[must_use]
    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    /// Returns the current simulation tick.
    ///
    /// The tick counter starts at 0 and increments by 1 after each `step()`.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.arena.current_tick()
    }

    /// Returns the seed the initial field was drawn from.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the tuning config.
    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::AsteroidTier;
    use glam::Vec2;

    mod creation_tests {
        use super::*;

        #[test]
        fn new_spawns_initial_field() {
            let sim = Simulation::new(SimConfig::default(), 7);
            assert_eq!(sim.arena().asteroid_count(), 5);
            assert!(sim
                .arena()
                .asteroids()
                .all(|(_, a)| a.tier() == AsteroidTier::Large));
            assert_eq!(sim.ship().position(), Vec2::new(500.0, 400.0));
        }

        #[test]
        fn without_field_is_empty() {
            let sim = Simulation::without_field(SimConfig::default());
            assert!(sim.is_field_cleared());
            assert!(!sim.is_ship_destroyed());
            assert_eq!(sim.seed(), None);
        }

        #[test]
        fn try_new_rejects_invalid_config() {
            let mut config = SimConfig::default();
            config.projectile.life = 0;
            assert!(matches!(
                Simulation::try_new(config, 1),
                Err(ConfigError::NonPositiveLife { life: 0 })
            ));
        }

        #[test]
        fn debug_lists_pipeline_phases() {
            let sim = Simulation::without_field(SimConfig::default());
            assert!(format!("{sim:?}").contains(r#"["kinematics", "collision", "reclaim"]"#));
        }

        #[test]
        #[should_panic]
        fn new_panics_on_inverted_spawn_range() {
            let mut config = SimConfig::default();
            config.field.spawn_x.min = 60;
            config.field.spawn_x.max = 10;
            let _ = Simulation::new(config, 1);
        }

        #[test]
        fn try_new_rejects_inverted_spawn_range() {
            let mut config = SimConfig::default();
            config.field.spawn_x.min = 60;
            config.field.spawn_x.max = 10;
            assert!(matches!(
                Simulation::try_new(config, 1),
                Err(ConfigError::InvalidSpawnRange { .. })
            ));
        }
    }

    mod fire_tests {
        use super::*;

        #[test]
        fn fire_event_spawns_from_ship_pose() {
            let mut sim = Simulation::without_field(SimConfig::default());
            sim.ship_mut().thrust(&SimConfig::default().ship);
            let ship_velocity = sim.ship().velocity();

            let report = sim.step(&FrameInput::fire_once());

            let (id, shot) = sim.arena().projectiles().next().unwrap();
            assert_eq!(report.events, vec![SimEvent::ProjectileFired { projectile: id }]);
            let muzzle = crate::entity::body::heading_vector(90.0) * 10.0;
            assert!((shot.velocity() - (muzzle + ship_velocity)).length() < 1e-5);
            assert_eq!(shot.remaining_life(), 59);
        }

        #[test]
        fn multiple_fire_events_spawn_multiple_projectiles() {
            let mut sim = Simulation::without_field(SimConfig::default());
            sim.step(&FrameInput::default().with_fire(3));
            assert_eq!(sim.arena().projectile_count(), 3);
        }

        #[test]
        fn fire_between_ticks_reports_next_step() {
            let mut sim = Simulation::without_field(SimConfig::default());
            let id = sim.fire().unwrap();
            assert_eq!(sim.arena().projectile_count(), 1);

            let report = sim.step(&FrameInput::default());
            assert_eq!(report.events, vec![SimEvent::ProjectileFired { projectile: id }]);
            assert!(sim.step(&FrameInput::default()).events.is_empty());
        }

        #[test]
        fn dead_ship_cannot_fire() {
            let mut sim = Simulation::without_field(SimConfig::default());
            sim.ship_mut().kill();
            assert!(sim.fire().is_none());
            let report = sim.step(&FrameInput::fire_once());
            assert!(report.events.is_empty());
            assert_eq!(sim.arena().projectile_count(), 0);
        }
    }

    mod input_tests {
        use super::*;

        #[test]
        fn held_commands_apply_once_per_tick() {
            let mut sim = Simulation::without_field(SimConfig::default());
            let input = FrameInput::holding(HeldCommands::TURN_LEFT);
            sim.step(&input);
            sim.step(&input);
            assert_eq!(sim.ship().angle(), 6.0);
        }

        #[test]
        fn opposite_turns_cancel() {
            let mut sim = Simulation::without_field(SimConfig::default());
            sim.step(&FrameInput::holding(HeldCommands::TURN_LEFT | HeldCommands::TURN_RIGHT));
            assert_eq!(sim.ship().angle(), 0.0);
        }

        #[test]
        fn turn_applies_before_thrust() {
            let mut sim = Simulation::without_field(SimConfig::default());
            for _ in 0..29 {
                sim.step(&FrameInput::holding(HeldCommands::TURN_LEFT));
            }
            // 30th turn lands on 90 degrees before the thrust is applied.
            sim.step(&FrameInput::holding(HeldCommands::TURN_LEFT | HeldCommands::THRUST));
            let velocity = sim.ship().velocity();
            assert!((velocity - Vec2::new(-0.25, 0.0)).length() < 1e-5);
        }
    }

    mod pipeline_tests {
        use super::*;

        #[test]
        fn step_advances_tick_and_reports_previous() {
            let mut sim = Simulation::new(SimConfig::default(), 3);
            let first = sim.step(&FrameInput::default());
            let second = sim.step(&FrameInput::default());
            assert_eq!(first.tick, 0);
            assert_eq!(second.tick, 1);
            assert_eq!(sim.tick(), 2);
        }

        #[test]
        fn destroyed_rock_is_gone_from_view_and_arena() {
            let config = SimConfig::default();
            let mut sim = Simulation::without_field(config.clone());
            let mut position = config.bounds.center();
            position.y += 20.0;
            sim.arena_mut()
                .spawn_asteroid(Asteroid::new(AsteroidTier::Small, position, Vec2::ZERO, &config));

            let report = sim.step(&FrameInput::fire_once());

            assert_eq!(report.reclaimed.asteroids, 1);
            assert_eq!(sim.arena().asteroid_count(), 0);
            let view = sim.view();
            assert!(view.asteroids.is_empty());
            assert!(view.field_cleared);
            assert!(sim.is_field_cleared());
        }

        #[test]
        fn view_reflects_state() {
            let mut sim = Simulation::new(SimConfig::default(), 11);
            sim.step(&FrameInput::fire_once());
            let view = sim.view();
            assert_eq!(view.tick, 1);
            assert_eq!(view.asteroids.len(), 5);
            assert_eq!(view.projectiles.len(), 1);
            assert!(view.ship.alive);
        }
    }
}
