//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and pushes the viewport size and input
//! mode into the [`ScreenSize`] and [`InputMode`] resources the gameplay
//! systems read. Player and weapon parameters are only read when a player is
//! spawned.

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputMode;
use crate::resources::screensize::ScreenSize;

/// System that applies game configuration changes.
///
/// Runs the update when [`GameConfig`] is added or modified. Does nothing
/// while no config resource is present. An invalid viewport is logged and
/// the current [`ScreenSize`] kept.
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut screen_size: ResMut<ScreenSize>,
    mut input_mode: ResMut<InputMode>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() || config.is_added() {
        match config.screen_size() {
            Ok(new_size) if *screen_size != new_size => {
                info!(
                    "Viewport changed: {}x{} -> {}x{}",
                    screen_size.w, screen_size.h, new_size.w, new_size.h
                );
                *screen_size = new_size;
            }
            Ok(_) => {}
            Err(e) => warn!("Ignoring viewport change: {e}"),
        }
        if *input_mode != config.input_mode {
            info!("Input mode changed: {} -> {}", *input_mode, config.input_mode);
            *input_mode = config.input_mode;
        }
    }
}
