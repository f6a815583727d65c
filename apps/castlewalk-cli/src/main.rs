use std::path::PathBuf;

use castlewalk_common::{Aabb, GameConfig};
use castlewalk_input::KeyBindings;
use castlewalk_kernel::{AxisResult, FrameLoop, Simulation};
use castlewalk_mapgen::{DoorPlan, Primitive};
use castlewalk_render::{DebugTextRenderer, RenderView, Renderer, SceneGraph};
use clap::{Parser, Subcommand, ValueEnum};
use glam::Vec3;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "castlewalk-cli", about = "Inspect the castle map and run scripted walks")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML file overriding the stock dimensions
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Give each room one door chosen from this seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Build the map and print it
    Map {
        /// Emit primitives and colliders as JSON
        #[arg(long)]
        json: bool,
        /// List every primitive in the text dump
        #[arg(long)]
        list: bool,
    },
    /// Walk from the spawn point with fixed keys held and report where the
    /// player ends up
    Walk {
        /// Facing in degrees; 0 looks north (-Z), -90 looks east (+X)
        #[arg(long, default_value = "-90", allow_negative_numbers = true)]
        yaw: f32,
        /// Keys held for the whole walk
        #[arg(long, value_delimiter = ',', default_value = "w")]
        keys: Vec<WalkKey>,
        /// Simulated seconds
        #[arg(long, default_value = "3.6")]
        seconds: f32,
        /// Frames per simulated second
        #[arg(long, default_value = "60")]
        fps: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum WalkKey {
    W,
    A,
    S,
    D,
}

impl WalkKey {
    fn code(self) -> &'static str {
        match self {
            WalkKey::W => "KeyW",
            WalkKey::A => "KeyA",
            WalkKey::S => "KeyS",
            WalkKey::D => "KeyD",
        }
    }
}

#[derive(Serialize)]
struct MapDump<'a> {
    spawn: Vec3,
    primitives: &'a [Primitive],
    colliders: &'a [Aabb],
}

/// Per-axis tallies over a walk.
#[derive(Debug, Default)]
struct WalkReport {
    frames: u64,
    blocked_x: u32,
    blocked_z: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::load_or_default(cli.config.as_deref())?;
    let plan = cli.seed.map_or(DoorPlan::Baseline, DoorPlan::Seeded);

    match cli.command {
        Commands::Info => {
            println!("castlewalk-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", castlewalk_common::crate_info());
            println!("input: {}", castlewalk_input::crate_info());
            println!("kernel: {}", castlewalk_kernel::crate_info());
            println!("mapgen: {}", castlewalk_mapgen::crate_info());
            println!("render: {}", castlewalk_render::crate_info());
            println!(
                "room offset: {} (room {} + corridor {})",
                config.map.room_offset(),
                config.map.room_size,
                config.map.corridor_length
            );
        }
        Commands::Map { json, list } => {
            let mut scene = SceneGraph::new();
            let map = castlewalk_mapgen::build_castle_with(&mut scene, &config.map, plan)?;
            if json {
                let dump = MapDump {
                    spawn: map.spawn,
                    primitives: scene.primitives(),
                    colliders: map.colliders.as_slice(),
                };
                println!("{}", serde_json::to_string_pretty(&dump)?);
            } else {
                let mut renderer = if list {
                    DebugTextRenderer::verbose()
                } else {
                    DebugTextRenderer::new()
                };
                let view = RenderView {
                    eye: map.spawn + Vec3::Y * config.player.eye_height,
                    ..RenderView::default()
                };
                print!("{}", renderer.render(&scene, &view));
                println!(
                    "Rooms: {}  Corridors: {}  Walls: {}  Doorways: {}  Colliders: {}",
                    map.stats.rooms,
                    map.stats.corridors,
                    map.stats.walls,
                    map.stats.doorways,
                    map.colliders.len()
                );
            }
        }
        Commands::Walk {
            yaw,
            keys,
            seconds,
            fps,
        } => {
            anyhow::ensure!(fps > 0, "--fps must be positive");
            let mut scene = SceneGraph::new();
            let map = castlewalk_mapgen::build_castle_with(&mut scene, &config.map, plan)?;
            let mut sim = Simulation::new(config, map.colliders, KeyBindings::wasd_codes(), map.spawn)
                .with_look(yaw.to_radians(), 0.0);
            for key in &keys {
                sim.input_mut().key_down(key.code());
            }

            let mut frame_loop = FrameLoop::new();
            frame_loop.on_update(|sim: &mut Simulation<&'static str>, dt| {
                sim.step(dt);
            });

            let dt = 1.0 / fps as f32;
            let frames = (seconds.max(0.0) * fps as f32).round() as u64;
            tracing::debug!(frames, dt, keys = keys.len(), "scripted walk");
            let mut report = WalkReport::default();
            for _ in 0..frames {
                let outcome = frame_loop.advance(dt, &mut sim, |sim| sim.last_outcome());
                report.frames += 1;
                if outcome.x == AxisResult::Blocked {
                    report.blocked_x += 1;
                }
                if outcome.z == AxisResult::Blocked {
                    report.blocked_z += 1;
                }
            }

            let start = map.spawn;
            let end = sim.player().position;
            println!(
                "Start: ({:.2}, {:.2})  End: ({:.2}, {:.2})",
                start.x, start.z, end.x, end.z
            );
            println!(
                "Frames: {}  Blocked x: {}  Blocked z: {}",
                report.frames, report.blocked_x, report.blocked_z
            );
        }
    }

    Ok(())
}
