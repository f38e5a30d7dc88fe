mod simulation;

#[cfg(feature = "ui")]
mod ui;

use anyhow::{ensure, Result};
use clap::Parser;
use log::info;

use simulation::{Command, SimWorld};

#[derive(Parser)]
#[command(name = "smart_traffic_sim")]
#[command(about = "Two-road intersection simulation with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "3600")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value = "0.0166667")]
    delta: f32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui();
            return Ok(());
        }
        #[cfg(not(feature = "ui"))]
        anyhow::bail!("UI feature is not enabled. Rebuild with --features ui");
    }

    run_headless(cli.ticks, cli.delta)
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(ticks: u32, delta: f32) -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    ensure!(delta > 0.0, "delta must be positive, got {}", delta);

    info!("Running intersection simulation in headless mode...");
    info!("Ticks: {}, Delta: {}s", ticks, delta);

    let ticks_per_second = (1.0 / delta).ceil() as u32;

    let mut world = SimWorld::new();
    world.apply(Command::StartSimulation);

    info!("Initial state:");
    world.log_summary();

    let mut tick = 0;
    while tick < ticks {
        // Run one simulated second worth of ticks, then report
        let ticks_to_run = ticks_per_second.min(ticks - tick);
        for _ in 0..ticks_to_run {
            tick += 1;
            world.tick(delta);
        }
        world.log_summary();
    }

    info!("=== SIMULATION COMPLETE ===");
    world.log_summary();
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui() {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Smart Traffic Simulation UI...");
    println!();
    println!("Controls:");
    println!("  S           - Start simulation (from menu)");
    println!("  E / ESC     - Exit");
    println!("  1 / 2 / 3   - Force horizontal signal Green / Yellow / Red");
    println!("  G / H / J   - Force vertical signal Green / Yellow / Red");
    println!("  D / N       - Day / Night");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,smart_traffic_sim=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Smart Traffic Simulation".into(),
                        resolution: (900, 900).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(ui::SmartTrafficUiPlugin)
        .run();
}
