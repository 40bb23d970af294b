//! Emmy shooter headless driver.
//!
//! Runs the top-down shooter simulation without a window:
//! - **bevy_ecs** holds the player, the obstacle and the targets
//! - **configparser** reads viewport, player and weapon settings from an INI file
//! - an optional JSON input script replays keyboard/gamepad state tick by tick
//!
//! # Main Loop
//!
//! 1. Load the configuration and build the ECS world and resources
//! 2. Spawn the player at its configured position, a 100×100 obstacle at the
//!    viewport centre and a couple of targets
//! 3. For every tick: apply the scripted input, advance [`WorldTime`] by the
//!    fixed delta and run the schedule
//! 4. Log where the player ended up and what the projectiles hit
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --script run.json --config config.ini
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};

use emmyshooter::components::boxcollider::BoxCollider;
use emmyshooter::components::mapposition::MapPosition;
use emmyshooter::components::obstacle::{Obstacle, Target};
use emmyshooter::components::player::Player;
use emmyshooter::events::projectilehit::observe_projectile_hit;
use emmyshooter::resources::gameconfig::GameConfig;
use emmyshooter::resources::hittally::HitTally;
use emmyshooter::resources::input::{InputMode, InputState};
use emmyshooter::resources::worldtime::WorldTime;
use emmyshooter::script::{InputFrame, InputScript};
use emmyshooter::systems::gameconfig::apply_gameconfig_changes;
use emmyshooter::systems::player::player_tick_system;
use emmyshooter::systems::time::update_world_time;

const OBSTACLE_SIZE: f32 = 100.0;
const TARGET_SIZE: f32 = 40.0;

/// Headless top-down shooter simulation
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file. Defaults are used when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured input mode (keyboard or gamepad).
    #[arg(long, value_name = "MODE")]
    input_mode: Option<String>,

    /// JSON input script to replay. Without one the player idles.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Number of ticks to run when no script is given.
    #[arg(long)]
    ticks: Option<u64>,

    /// Seconds per tick.
    #[arg(long)]
    delta: Option<f32>,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // --------------- Configuration ---------------
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = GameConfig::with_path(path);
            config.load_from_file()?;
            config
        }
        None => GameConfig::new(),
    };
    if let Some(mode) = &cli.input_mode {
        config.input_mode = mode.parse()?;
    }
    if let Some(delta) = cli.delta {
        config.fixed_delta = delta;
    }
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }

    // Early-exit: write the config and quit
    if let Some(path) = cli.save_config {
        config.config_path = path;
        config.save_to_file()?;
        return Ok(());
    }

    config.validate()?;
    let player_config = config.player_config()?;
    let screen_size = config.screen_size()?;
    let script = match &cli.script {
        Some(path) => InputScript::load(path)?,
        None => InputScript {
            frames: vec![InputFrame {
                repeat: config.ticks,
                ..InputFrame::default()
            }],
        },
    };
    let delta = config.fixed_delta;

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(screen_size);
    world.insert_resource(config.input_mode);
    world.insert_resource(InputState::default());
    world.insert_resource(HitTally::default());
    world.add_observer(observe_projectile_hit);

    let viewport = screen_size.viewport();
    let player = world
        .spawn((
            Player::new(player_config),
            MapPosition {
                pos: player_config.position,
            },
        ))
        .id();
    world.spawn((
        Obstacle,
        MapPosition::new(viewport.width / 2.0, viewport.height / 2.0),
        BoxCollider::new(OBSTACLE_SIZE, OBSTACLE_SIZE),
    ));
    let targets = [
        MapPosition::new(viewport.width - 2.0 * TARGET_SIZE, viewport.height / 4.0),
        MapPosition::new(viewport.width / 4.0, viewport.height - 2.0 * TARGET_SIZE),
    ];
    for position in targets {
        world.spawn((Target, position, BoxCollider::new(TARGET_SIZE, TARGET_SIZE)));
    }
    world.insert_resource(config);

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes);
    update.add_systems(player_tick_system.after(apply_gameconfig_changes));

    info!(
        "Running {} ticks of {:.4}s in a {}x{} viewport",
        script.tick_count(),
        delta,
        viewport.width,
        viewport.height
    );

    // --------------- Main loop ---------------
    for frame in script.ticks() {
        frame.apply(&mut world.resource_mut::<InputState>());
        update_world_time(&mut world, delta);
        update.run(&mut world);
        world.clear_trackers();
    }

    // --------------- Summary ---------------
    let time = *world.resource::<WorldTime>();
    let (position, live) = world
        .get::<Player>(player)
        .map(|p| (p.position(), p.launcher().len()))
        .ok_or("player entity vanished")?;
    let tally = world.resource::<HitTally>();
    info!(
        "After {} ticks ({:.2}s): player at ({:.1}, {:.1}), {} live projectiles, {} hits on {} targets",
        time.frame_count,
        time.elapsed,
        position.x,
        position.y,
        live,
        tally.total(),
        tally.targets_hit()
    );

    Ok(())
}
