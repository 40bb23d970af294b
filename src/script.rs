//! Recorded input for headless runs.
//!
//! An input script is a JSON document listing frames of device state. Each
//! frame is held for `repeat` ticks (default 1) and written into
//! [`InputState`] before the tick runs, so the edge flags behave as they
//! would with a real device.
//!
//! ```json
//! {
//!   "frames": [
//!     { "right": true, "repeat": 30 },
//!     { "fire": true, "repeat": 10 },
//!     { "stick": [0.0, 1.0], "fire": true, "repeat": 5 }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;
use crate::resources::input::InputState;

fn one() -> u64 {
    1
}

/// Device state for one or more consecutive ticks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct InputFrame {
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub down: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    /// Fire on both keyboard and gamepad.
    #[serde(default)]
    pub fire: bool,
    /// Left stick, +y is stick up.
    #[serde(default)]
    pub stick: [f32; 2],
    #[serde(default = "one")]
    pub repeat: u64,
}

impl Default for InputFrame {
    fn default() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            fire: false,
            stick: [0.0, 0.0],
            repeat: one(),
        }
    }
}

impl InputFrame {
    /// Write this frame's state into `input`.
    pub fn apply(&self, input: &mut InputState) {
        input.maindirection_up.set(self.up);
        input.maindirection_down.set(self.down);
        input.maindirection_left.set(self.left);
        input.maindirection_right.set(self.right);
        input.action_fire.set(self.fire);
        input.gamepad_fire.set(self.fire);
        input.left_stick = Vec2::new(self.stick[0], self.stick[1]);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct InputScript {
    pub frames: Vec<InputFrame>,
}

impl InputScript {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content)?)
    }

    /// Total number of ticks the script covers.
    pub fn tick_count(&self) -> u64 {
        self.frames.iter().map(|f| f.repeat).sum()
    }

    /// One frame per tick, with repeats expanded.
    pub fn ticks(&self) -> impl Iterator<Item = &InputFrame> + '_ {
        self.frames
            .iter()
            .flat_map(|f| (0..f.repeat).map(move |_| f))
    }
}
