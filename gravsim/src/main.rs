use gravsim::{spawn_loop, HostEvent, NVec2, Scenario, ScenarioConfig, SnapshotSlot, SpawnPattern, Variant};
use gravsim::{bench_frame, bench_integrator};

use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "blackhole.yaml")]
    file_name: String,

    /// Frames to run before exiting
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Run the benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    info!("loading scenario {}", config_path.display());
    Ok(ScenarioConfig::load(&config_path)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.bench {
        bench_integrator()?;
        bench_frame()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(&scenario_cfg)?;
    let engine = scenario.engine;
    let variant = engine.variant();
    let home = engine.attractor().home;

    let slot = Arc::new(SnapshotSlot::new());
    let (tx, rx) = mpsc::channel();

    // The sandbox starts empty, give it something to pull on
    if variant == Variant::Sandbox {
        tx.send(HostEvent::Spawn {
            pattern: SpawnPattern::Circle,
            at: home + NVec2::new(200.0, 0.0),
        })?;
        tx.send(HostEvent::Spawn {
            pattern: SpawnPattern::HorizontalLine,
            at: home - NVec2::new(0.0, 150.0),
        })?;
    }

    let handle = spawn_loop(engine, Arc::clone(&slot), rx, Some(args.frames))?;

    // Stand-in for the render thread: read whatever was published last
    while !handle.is_finished() {
        thread::sleep(Duration::from_millis(250));
        let snap = slot.latest();
        info!(
            "frame {:5} | particles {:6} | consumed {:4} this frame, {:7} total | {} points",
            snap.frame,
            snap.active_count,
            snap.consumed_this_frame,
            snap.consumed_total,
            snap.points.len()
        );
    }

    let (engine, reason) = handle.join().map_err(|_| anyhow!("physics loop panicked"))?;
    drop(tx);
    info!(
        "{:?} finished: {} frames, {} particles, {} consumed ({:?})",
        variant,
        engine.frame(),
        engine.population().len(),
        engine.consumed_total(),
        reason
    );

    Ok(())
}
