//! Scenario tests that drive a whole [`Simulation`](crate::simulation::Simulation)
//! through `step`.
//!
//! `determinism` replays scripted input against seeded fields, `integration`
//! stages hand-placed rocks and shots, and `helpers` holds the shared setup.

mod helpers;
mod integration;
