//! Per-frame player input.
//!
//! The renderer polls its input device once per frame and hands the result to
//! [`Simulation::step`](crate::simulation::Simulation::step) as a
//! [`FrameInput`]: the set of commands currently held down plus the number of
//! discrete fire presses since the previous frame.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Commands that apply once per tick for as long as they are held.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct HeldCommands: u8 {
        /// Rotate counter-clockwise
        const TURN_LEFT = 1 << 0;
        /// Rotate clockwise
        const TURN_RIGHT = 1 << 1;
        /// Accelerate along the nose
        const THRUST = 1 << 2;
        /// Accelerate against the nose
        const REVERSE = 1 << 3;
    }
}

impl HeldCommands {
    /// Parses a single command name such as `"turn-left"` or `"thrust"`.
    ///
    /// Names are case-insensitive and accept `_` in place of `-`. Unlike the
    /// generated `from_name`, this accepts the short aliases the CLI uses.
    #[must_use]
    pub fn from_command_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "turn-left" | "left" => Some(Self::TURN_LEFT),
            "turn-right" | "right" => Some(Self::TURN_RIGHT),
            "thrust" | "up" => Some(Self::THRUST),
            "reverse" | "down" => Some(Self::REVERSE),
            _ => None,
        }
    }
}

/// Input sampled for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Frame duration in seconds. Carried for the renderer; motion is per tick
    /// and ignores it.
    pub dt: f32,
    /// Commands held down this frame
    pub held: HeldCommands,
    /// Discrete fire presses since the previous frame
    pub fire_events: u32,
}

impl FrameInput {
    /// Nominal frame duration at 60 frames per second.
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;

    /// Input with the given commands held and no fire presses.
    #[must_use]
    pub fn holding(held: HeldCommands) -> Self {
        Self {
            held,
            ..Self::default()
        }
    }

    /// Input with a single fire press and nothing held.
    #[must_use]
    pub fn fire_once() -> Self {
        Self {
            fire_events: 1,
            ..Self::default()
        }
    }

    /// Adds `count` fire presses, saturating at `u32::MAX`.
    #[must_use]
    pub fn with_fire(mut self, count: u32) -> Self {
        self.fire_events = self.fire_events.saturating_add(count);
        self
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            dt: Self::NOMINAL_DT,
            held: HeldCommands::empty(),
            fire_events: 0,
        }
    }
}
