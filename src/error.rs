//! Configuration errors.
//!
//! The simulation itself never fails; every error in this crate is raised
//! while building configuration so a bad value is rejected before the first
//! tick instead of being silently replaced by a default.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    UnknownInputMode { value: String },
    UnknownFirstShotPolicy { value: String },
    InvalidValue { key: &'static str, value: f32 },
    InvalidDimension { key: &'static str, value: u64 },
    Load { path: String, reason: String },
    Parse { section: String, key: String, reason: String },
    Save { path: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownInputMode { value } => {
                write!(f, "unknown input mode: {value:?} (expected keyboard or gamepad)")
            }
            Self::UnknownFirstShotPolicy { value } => write!(
                f,
                "unknown first shot policy: {value:?} (expected immediate or after_cooldown)"
            ),
            Self::InvalidValue { key, value } => write!(f, "invalid value for {key}: {value}"),
            Self::InvalidDimension { key, value } => write!(
                f,
                "invalid value for {key}: {value} (expected 1..={})",
                i32::MAX
            ),
            Self::Load { path, reason } => {
                write!(f, "failed to load config file {path}: {reason}")
            }
            Self::Parse {
                section,
                key,
                reason,
            } => write!(f, "failed to parse [{section}] {key}: {reason}"),
            Self::Save { path, reason } => {
                write!(f, "failed to save config file {path}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Reject negative, NaN and infinite values.
pub(crate) fn non_negative(key: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue { key, value })
    }
}

/// Reject zero, negative, NaN and infinite values.
pub(crate) fn positive(key: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue { key, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rejects_zero_and_nan() {
        assert!(positive("speed", 1.0).is_ok());
        assert_eq!(
            positive("speed", 0.0),
            Err(ConfigError::InvalidValue {
                key: "speed",
                value: 0.0
            })
        );
        assert!(positive("speed", f32::NAN).is_err());
        assert!(positive("speed", f32::INFINITY).is_err());
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(non_negative("cooldown", 0.0), Ok(0.0));
        assert!(non_negative("cooldown", -0.5).is_err());
    }

    #[test]
    fn test_display_names_the_bad_value() {
        let err = ConfigError::UnknownInputMode {
            value: "joystick".into(),
        };
        assert!(err.to_string().contains("joystick"));

        let err = ConfigError::InvalidDimension {
            key: "viewport_width",
            value: 0,
        };
        assert!(err.to_string().contains("viewport_width: 0"));
    }
}
