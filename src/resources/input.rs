//! Per-frame input snapshot resource.
//!
//! The simulation never polls a device. Whatever drives the game (a window
//! backend, a replay script, a test) writes the current button and stick
//! state into [`InputState`], and the gameplay systems turn that snapshot
//! into a movement direction and a fire flag according to the active
//! [`InputMode`].
//!
//! Keyboard mapping: `W`/`S` move up/down (-y/+y), `A`/`D` move left/right,
//! `Space` fires. Gamepad mapping: left stick moves (stick up is screen up),
//! `A` button fires.
use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::*;

use crate::error::ConfigError;
use crate::geometry::Vec2;

/// Which device the player is using.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Keyboard,
    Gamepad,
}

impl FromStr for InputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyboard" => Ok(Self::Keyboard),
            "gamepad" => Ok(Self::Gamepad),
            _ => Err(ConfigError::UnknownInputMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyboard => write!(f, "keyboard"),
            Self::Gamepad => write!(f, "gamepad"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean button state with edge flags.
pub struct BoolState {
    /// Whether the button is currently held.
    pub active: bool,
    /// Whether the button went down this frame.
    pub just_pressed: bool,
    /// Whether the button went up this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Record this frame's state and derive the edge flags from the last one.
    pub fn set(&mut self, active: bool) {
        self.just_pressed = active && !self.active;
        self.just_released = !active && self.active;
        self.active = active;
    }
}

/// Resource capturing the per-frame device state relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    pub action_fire: BoolState,
    // Gamepad
    /// Left stick as reported by the device: +y is stick up.
    pub left_stick: Vec2,
    pub gamepad_fire: BoolState,
}

impl InputState {
    /// Unnormalized movement direction in screen space (+y is down).
    ///
    /// Keyboard axes sum to -1, 0 or 1 each, so diagonals have length √2.
    pub fn movement_direction(&self, mode: InputMode) -> Vec2 {
        match mode {
            InputMode::Keyboard => {
                let mut movement = Vec2::ZERO;
                if self.maindirection_up.active {
                    movement.y -= 1.0;
                }
                if self.maindirection_down.active {
                    movement.y += 1.0;
                }
                if self.maindirection_left.active {
                    movement.x -= 1.0;
                }
                if self.maindirection_right.active {
                    movement.x += 1.0;
                }
                movement
            }
            // the stick's y axis points the other way
            InputMode::Gamepad => Vec2::new(self.left_stick.x, -self.left_stick.y),
        }
    }

    /// Whether the fire control for `mode` is held.
    pub fn fire_requested(&self, mode: InputMode) -> bool {
        match mode {
            InputMode::Keyboard => self.action_fire.active,
            InputMode::Gamepad => self.gamepad_fire.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
    }

    #[test]
    fn test_boolstate_edges() {
        let mut bs = BoolState::default();
        bs.set(true);
        assert!(bs.active && bs.just_pressed && !bs.just_released);
        bs.set(true);
        assert!(bs.active && !bs.just_pressed);
        bs.set(false);
        assert!(!bs.active && bs.just_released);
        bs.set(false);
        assert!(!bs.just_released);
    }

    #[test]
    fn test_inputstate_default_is_idle() {
        let input = InputState::default();
        assert_eq!(input.movement_direction(InputMode::Keyboard), Vec2::ZERO);
        assert_eq!(input.movement_direction(InputMode::Gamepad), Vec2::ZERO);
        assert!(!input.fire_requested(InputMode::Keyboard));
        assert!(!input.fire_requested(InputMode::Gamepad));
    }

    #[test]
    fn test_keyboard_direction() {
        let mut input = InputState::default();
        input.maindirection_up.set(true);
        input.maindirection_right.set(true);
        assert_eq!(
            input.movement_direction(InputMode::Keyboard),
            Vec2::new(1.0, -1.0)
        );

        input.maindirection_down.set(true);
        assert_eq!(
            input.movement_direction(InputMode::Keyboard),
            Vec2::new(1.0, 0.0)
        );
    }

    #[test]
    fn test_gamepad_direction_inverts_y() {
        let input = InputState {
            left_stick: Vec2::new(0.25, 0.5),
            ..InputState::default()
        };
        assert_eq!(
            input.movement_direction(InputMode::Gamepad),
            Vec2::new(0.25, -0.5)
        );
        // keyboard mode ignores the stick
        assert_eq!(input.movement_direction(InputMode::Keyboard), Vec2::ZERO);
    }

    #[test]
    fn test_fire_follows_mode() {
        let mut input = InputState::default();
        input.gamepad_fire.set(true);
        assert!(input.fire_requested(InputMode::Gamepad));
        assert!(!input.fire_requested(InputMode::Keyboard));
    }

    #[test]
    fn test_input_mode_parse() {
        assert_eq!("keyboard".parse(), Ok(InputMode::Keyboard));
        assert_eq!(" GamePad ".parse(), Ok(InputMode::Gamepad));
        assert_eq!(
            "mouse".parse::<InputMode>(),
            Err(ConfigError::UnknownInputMode {
                value: "mouse".into()
            })
        );
    }
}
