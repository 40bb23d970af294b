//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [viewport]
//! width = 800
//! height = 600
//!
//! [player]
//! x = 0
//! y = 0
//! width = 32
//! height = 32
//! speed = 400
//! normalize_diagonal = true
//!
//! [weapon]
//! bullet_speed = 600
//! bullet_width = 8
//! bullet_height = 8
//! cooldown = 0.25
//! first_shot = immediate
//!
//! [input]
//! mode = keyboard
//!
//! [sim]
//! fixed_delta = 0.016666668
//! ticks = 600
//! ```
//!
//! Missing keys keep their current values. Present keys that do not parse,
//! and unknown `mode` / `first_shot` names, are errors.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::player::PlayerConfig;
use crate::components::projectilemanager::{FirstShotPolicy, LauncherConfig};
use crate::error::{self, ConfigError};
use crate::geometry::Vec2;
use crate::resources::input::InputMode;
use crate::resources::screensize::ScreenSize;

/// Default safe values for startup
const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;
const DEFAULT_PLAYER_SPEED: f32 = 400.0;
const DEFAULT_PLAYER_SIZE: f32 = 32.0;
const DEFAULT_BULLET_SPEED: f32 = 600.0;
const DEFAULT_BULLET_SIZE: f32 = 8.0;
const DEFAULT_COOLDOWN: f32 = 0.25;
const DEFAULT_FIXED_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_TICKS: u64 = 600;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub player_x: f32,
    pub player_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    pub normalize_diagonal: bool,
    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    /// Seconds between two shots.
    pub cooldown: f32,
    pub first_shot: FirstShotPolicy,
    pub input_mode: InputMode,
    /// Seconds per tick for the headless driver.
    pub fixed_delta: f32,
    /// Number of ticks the headless driver runs when no script is given.
    pub ticks: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            player_x: 0.0,
            player_y: 0.0,
            player_width: DEFAULT_PLAYER_SIZE,
            player_height: DEFAULT_PLAYER_SIZE,
            player_speed: DEFAULT_PLAYER_SPEED,
            normalize_diagonal: true,
            bullet_speed: DEFAULT_BULLET_SPEED,
            bullet_width: DEFAULT_BULLET_SIZE,
            bullet_height: DEFAULT_BULLET_SIZE,
            cooldown: DEFAULT_COOLDOWN,
            first_shot: FirstShotPolicy::Immediate,
            input_mode: InputMode::Keyboard,
            fixed_delta: DEFAULT_FIXED_DELTA,
            ticks: DEFAULT_TICKS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| ConfigError::Load {
            path: self.config_path.display().to_string(),
            reason: e,
        })?;

        // [viewport] section
        if let Some(width) = get_uint(&config, "viewport", "width")? {
            self.viewport_width = viewport_dimension("viewport_width", width)?.unsigned_abs();
        }
        if let Some(height) = get_uint(&config, "viewport", "height")? {
            self.viewport_height = viewport_dimension("viewport_height", height)?.unsigned_abs();
        }

        // [player] section
        if let Some(x) = get_float(&config, "player", "x")? {
            self.player_x = x;
        }
        if let Some(y) = get_float(&config, "player", "y")? {
            self.player_y = y;
        }
        if let Some(width) = get_float(&config, "player", "width")? {
            self.player_width = width;
        }
        if let Some(height) = get_float(&config, "player", "height")? {
            self.player_height = height;
        }
        if let Some(speed) = get_float(&config, "player", "speed")? {
            self.player_speed = speed;
        }
        if let Some(normalize) = get_bool(&config, "player", "normalize_diagonal")? {
            self.normalize_diagonal = normalize;
        }

        // [weapon] section
        if let Some(speed) = get_float(&config, "weapon", "bullet_speed")? {
            self.bullet_speed = speed;
        }
        if let Some(width) = get_float(&config, "weapon", "bullet_width")? {
            self.bullet_width = width;
        }
        if let Some(height) = get_float(&config, "weapon", "bullet_height")? {
            self.bullet_height = height;
        }
        if let Some(cooldown) = get_float(&config, "weapon", "cooldown")? {
            self.cooldown = cooldown;
        }
        if let Some(policy) = config.get("weapon", "first_shot") {
            self.first_shot = policy.parse()?;
        }

        // [input] section
        if let Some(mode) = config.get("input", "mode") {
            self.input_mode = mode.parse()?;
        }

        // [sim] section
        if let Some(delta) = get_float(&config, "sim", "fixed_delta")? {
            self.fixed_delta = delta;
        }
        if let Some(ticks) = get_uint(&config, "sim", "ticks")? {
            self.ticks = ticks;
        }

        self.validate()?;

        info!(
            "Loaded config: {}x{} viewport, player speed={}, bullet speed={}, cooldown={}s, first shot={}, input={}",
            self.viewport_width,
            self.viewport_height,
            self.player_speed,
            self.bullet_speed,
            self.cooldown,
            self.first_shot,
            self.input_mode
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        // [viewport] section
        config.set("viewport", "width", Some(self.viewport_width.to_string()));
        config.set("viewport", "height", Some(self.viewport_height.to_string()));

        // [player] section
        config.set("player", "x", Some(self.player_x.to_string()));
        config.set("player", "y", Some(self.player_y.to_string()));
        config.set("player", "width", Some(self.player_width.to_string()));
        config.set("player", "height", Some(self.player_height.to_string()));
        config.set("player", "speed", Some(self.player_speed.to_string()));
        config.set(
            "player",
            "normalize_diagonal",
            Some(self.normalize_diagonal.to_string()),
        );

        // [weapon] section
        config.set("weapon", "bullet_speed", Some(self.bullet_speed.to_string()));
        config.set("weapon", "bullet_width", Some(self.bullet_width.to_string()));
        config.set("weapon", "bullet_height", Some(self.bullet_height.to_string()));
        config.set("weapon", "cooldown", Some(self.cooldown.to_string()));
        config.set("weapon", "first_shot", Some(self.first_shot.to_string()));

        // [input] section
        config.set("input", "mode", Some(self.input_mode.to_string()));

        // [sim] section
        config.set("sim", "fixed_delta", Some(self.fixed_delta.to_string()));
        config.set("sim", "ticks", Some(self.ticks.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| ConfigError::Save {
                path: self.config_path.display().to_string(),
                reason: e.to_string(),
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Check every value the simulation will consume.
    ///
    /// Called by [`load_from_file`](Self::load_from_file); call it again after
    /// changing fields by hand.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.screen_size()?;
        error::positive("fixed_delta", self.fixed_delta)?;
        self.player_config()?;
        Ok(())
    }

    /// Viewport as a resource.
    pub fn screen_size(&self) -> Result<ScreenSize, ConfigError> {
        Ok(ScreenSize {
            w: viewport_dimension("viewport_width", u64::from(self.viewport_width))?,
            h: viewport_dimension("viewport_height", u64::from(self.viewport_height))?,
        })
    }

    /// Validated launcher parameters.
    pub fn launcher_config(&self) -> Result<LauncherConfig, ConfigError> {
        LauncherConfig::new(
            self.bullet_speed,
            Vec2::new(self.bullet_width, self.bullet_height),
            self.cooldown,
            self.first_shot,
        )
    }

    /// Validated player parameters.
    pub fn player_config(&self) -> Result<PlayerConfig, ConfigError> {
        PlayerConfig {
            position: Vec2::new(self.player_x, self.player_y),
            size: Vec2::new(self.player_width, self.player_height),
            speed: self.player_speed,
            normalize_diagonal: self.normalize_diagonal,
            launcher: self.launcher_config()?,
        }
        .validated()
    }
}

/// Viewport sides must be positive and fit the `i32` screen size.
fn viewport_dimension(key: &'static str, value: u64) -> Result<i32, ConfigError> {
    match i32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigError::InvalidDimension { key, value }),
    }
}

fn parse_error(section: &str, key: &str, reason: String) -> ConfigError {
    ConfigError::Parse {
        section: section.to_string(),
        key: key.to_string(),
        reason,
    }
}

fn get_float(config: &Ini, section: &str, key: &str) -> Result<Option<f32>, ConfigError> {
    config
        .getfloat(section, key)
        .map(|v| v.map(|v| v as f32))
        .map_err(|e| parse_error(section, key, e))
}

fn get_uint(config: &Ini, section: &str, key: &str) -> Result<Option<u64>, ConfigError> {
    config
        .getuint(section, key)
        .map_err(|e| parse_error(section, key, e))
}

fn get_bool(config: &Ini, section: &str, key: &str) -> Result<Option<bool>, ConfigError> {
    config
        .getbool(section, key)
        .map_err(|e| parse_error(section, key, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_ini(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.screen_size(), Ok(ScreenSize { w: 800, h: 600 }));
    }

    #[test]
    fn test_zero_viewport_rejected_on_load() {
        let file = write_ini("[viewport]\nwidth = 0\n");
        let mut config = GameConfig::with_path(file.path());
        assert_eq!(
            config.load_from_file(),
            Err(ConfigError::InvalidDimension {
                key: "viewport_width",
                value: 0
            })
        );
    }

    #[test]
    fn test_oversized_viewport_rejected_on_load() {
        let file = write_ini("[viewport]\nwidth = 5000000000\n");
        let mut config = GameConfig::with_path(file.path());
        assert_eq!(
            config.load_from_file(),
            Err(ConfigError::InvalidDimension {
                key: "viewport_width",
                value: 5_000_000_000
            })
        );
        // nothing was truncated into the config
        assert_eq!(config.viewport_width, DEFAULT_VIEWPORT_WIDTH);

        let config = GameConfig {
            viewport_height: u32::MAX,
            ..GameConfig::new()
        };
        assert!(config.screen_size().is_err());
    }

    #[test]
    fn test_fixed_delta_checked_by_validate_not_player_config() {
        let config = GameConfig {
            fixed_delta: 0.0,
            ..GameConfig::new()
        };
        assert!(config.player_config().is_ok());
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                key: "fixed_delta",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_invalid_weapon_rejected_on_load() {
        let file = write_ini("[weapon]\nbullet_speed = 0\n");
        let mut config = GameConfig::with_path(file.path());
        assert!(matches!(
            config.load_from_file(),
            Err(ConfigError::InvalidValue {
                key: "bullet_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_load_overrides_present_keys_only() {
        let file = write_ini(
            "[viewport]\nwidth = 1024\n\n[weapon]\ncooldown = 0.5\nfirst_shot = after_cooldown\n\n[input]\nmode = gamepad\n",
        );
        let mut config = GameConfig::with_path(file.path());
        config.load_from_file().unwrap();

        assert_eq!(config.viewport_width, 1024);
        assert_eq!(config.viewport_height, DEFAULT_VIEWPORT_HEIGHT);
        assert!((config.cooldown - 0.5).abs() < 1e-6);
        assert_eq!(config.first_shot, FirstShotPolicy::AfterCooldown);
        assert_eq!(config.input_mode, InputMode::Gamepad);
        assert!((config.player_speed - DEFAULT_PLAYER_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_input_mode_fails_loudly() {
        let file = write_ini("[input]\nmode = joystick\n");
        let mut config = GameConfig::with_path(file.path());
        assert_eq!(
            config.load_from_file(),
            Err(ConfigError::UnknownInputMode {
                value: "joystick".into()
            })
        );
    }

    #[test]
    fn test_unparsable_number_fails() {
        let file = write_ini("[player]\nspeed = fast\n");
        let mut config = GameConfig::with_path(file.path());
        assert!(matches!(
            config.load_from_file(),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_fails() {
        let mut config = GameConfig::with_path("/definitely/not/here/config.ini");
        assert!(matches!(
            config.load_from_file(),
            Err(ConfigError::Load { .. })
        ));
    }

    #[test]
    fn test_invalid_values_rejected_when_building_configs() {
        let config = GameConfig {
            bullet_speed: 0.0,
            ..GameConfig::new()
        };
        assert!(config.launcher_config().is_err());
        assert!(config.player_config().is_err());

        let config = GameConfig {
            player_width: -3.0,
            ..GameConfig::new()
        };
        assert!(config.player_config().is_err());
    }

    #[test]
    fn test_save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut saved = GameConfig::with_path(&path);
        saved.viewport_width = 640;
        saved.player_speed = 250.0;
        saved.normalize_diagonal = false;
        saved.first_shot = FirstShotPolicy::AfterCooldown;
        saved.input_mode = InputMode::Gamepad;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, saved);
    }
}
