//! Command-line entry point running the game headless.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use log::info;
use roller::{init_logging, ControlInput, RollerConfig, RollerPlugin, SessionHandle};

/// Headless run of the rolling growth game
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file overriding the default tuning and level
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of 60 Hz frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,
    /// Constant movement input as `x,y`
    #[arg(short, long, value_parser = parse_drive, allow_hyphen_values = true)]
    drive: Option<Vec2>,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_drive(text: &str) -> Result<Vec2, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{text}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|e| format!("bad axis value `{part}`: {e}"))
    };
    Ok(Vec2::new(parse(x)?, parse(y)?))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => RollerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => RollerConfig::default(),
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )))
        .insert_resource(config)
        .add_plugins(RollerPlugin);
    app.insert_resource(ControlInput {
        move_axis: args.drive.unwrap_or(Vec2::ZERO),
        jump_held: false,
    });

    for frame in 0..args.frames {
        app.update();
        if frame % 60 == 0 {
            let session = app.world().resource::<SessionHandle>();
            let player = session.player();
            info!(
                "frame {frame}: position {:.2}, size {:.2}, holding {}",
                player.body().position,
                player.current_display_size(),
                player.pickup_count()
            );
        }
    }

    let session = app.world().resource::<SessionHandle>();
    info!(
        "finished after {} frames: size {:.2}, {:.1}s left, round {:?}",
        args.frames,
        session.player().current_size(),
        session.round().remaining(),
        session.round().outcome()
    );
    Ok(())
}
