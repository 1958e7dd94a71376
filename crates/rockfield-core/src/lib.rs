//! # Rockfield Core
//!
//! Deterministic simulation core for an arcade asteroid shooter.
//!
//! A player ship rotates, thrusts and fires projectiles at drifting asteroids
//! that split into smaller fragments when hit. The playfield wraps at its
//! edges. Rendering and input polling live outside this crate: a renderer
//! feeds a [`FrameInput`] into [`Simulation::step`] once per frame and draws
//! the [`FrameView`] it gets back from [`Simulation::view`].
//!
//! ## Architecture
//!
//! - **Entities**: the ship, projectiles and asteroids, sharing kinematic
//!   state through the [`Kinematic`](entity::Kinematic) trait
//! - **Arena**: id-keyed storage for asteroids and projectiles with deferred
//!   removal
//! - **Resolvers**: the fixed per-tick phases (kinematics, collision,
//!   reclamation)
//!
//! ## Usage
//!
//! ```
//! use rockfield_core::{FrameInput, HeldCommands, SimConfig, Simulation};
//!
//! let mut sim = Simulation::new(SimConfig::default(), 42);
//!
//! for _ in 0..10 {
//!     sim.step(&FrameInput::holding(HeldCommands::THRUST));
//! }
//!
//! let view = sim.view();
//! assert_eq!(view.tick, 10);
//! assert!(!view.field_cleared);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod input;
pub mod resolver;
pub mod simulation;
pub mod view;

pub use arena::{Arena, Reclaimed};
pub use config::SimConfig;
pub use entity::{Asteroid, AsteroidTier, EntityId, EntityKind, Kinematic, Projectile, Ship};
pub use error::ConfigError;
pub use event::{SimEvent, TickReport};
pub use input::{FrameInput, HeldCommands};
pub use simulation::Simulation;
pub use view::FrameView;

#[cfg(test)]
mod tests;
