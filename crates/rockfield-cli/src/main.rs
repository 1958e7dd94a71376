//! Headless Rockfield driver: runs the simulation with a scripted input
//! pattern and prints the final frame view as JSON.
//!
//! Usage:
//!   cargo run --release -p rockfield-cli -- --seed 7 --ticks 600 --hold turn-left,thrust --fire-every 10
//!   RUST_LOG=rockfield_core=debug cargo run -p rockfield-cli -- --config tuning.json

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rockfield_core::{FrameInput, FrameView, HeldCommands, SimConfig, Simulation};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "rockfield")]
#[command(about = "Run the Rockfield asteroid simulation headless")]
struct Args {
    /// Seed for the initial asteroid field
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Maximum number of ticks to run
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// JSON file overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Commands held every tick, comma separated (turn-left, turn-right, thrust, reverse)
    #[arg(long, default_value = "")]
    hold: String,

    /// Fire once every N ticks, starting on the first tick
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    fire_every: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Keep stepping after the ship is destroyed or the field is cleared
    #[arg(long)]
    keep_running: bool,
}

/// Outcome of a scripted run.
#[derive(Debug)]
struct RunSummary {
    ticks_run: u64,
    splits: usize,
    view: FrameView,
}

fn parse_held(list: &str) -> Result<HeldCommands> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .try_fold(HeldCommands::empty(), |held, name| {
            HeldCommands::from_command_name(name)
                .map(|command| held | command)
                .ok_or_else(|| anyhow!("unknown held command: {name}"))
        })
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    SimConfig::from_json_str(&json).with_context(|| format!("invalid config: {}", path.display()))
}

fn input_for(tick: u64, held: HeldCommands, fire_every: Option<u64>) -> FrameInput {
    let fire = fire_every.is_some_and(|every| tick % every == 0);
    FrameInput::holding(held).with_fire(u32::from(fire))
}

fn run(sim: &mut Simulation, args: &Args, held: HeldCommands) -> RunSummary {
    let mut ticks_run = 0;
    let mut splits = 0;

    while ticks_run < args.ticks {
        let report = sim.step(&input_for(sim.tick(), held, args.fire_every));
        ticks_run += 1;
        splits += report.splits().count();

        for event in &report.events {
            debug!(tick = report.tick, ?event, "event");
        }

        if !args.keep_running && (sim.is_ship_destroyed() || sim.is_field_cleared()) {
            let outcome = if sim.is_ship_destroyed() {
                "ship destroyed"
            } else {
                "field cleared"
            };
            info!(tick = report.tick, outcome, "stopping early");
            break;
        }
    }

    RunSummary {
        ticks_run,
        splits,
        view: sim.view(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let held = parse_held(&args.hold)?;
    let config = load_config(args.config.as_deref())?;
    let mut sim = Simulation::try_new(config, args.seed).context("failed to create simulation")?;

    let summary = run(&mut sim, &args, held);
    info!(
        ticks = summary.ticks_run,
        splits = summary.splits,
        asteroids = summary.view.asteroids.len(),
        ship_destroyed = summary.view.ship_destroyed,
        field_cleared = summary.view.field_cleared,
        "run finished"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&summary.view)
    } else {
        serde_json::to_string(&summary.view)
    }
    .context("failed to serialize frame view")?;
    println!("{json}");

    Ok(())
}
