use orrery::{bench_tick_curve, BodyReport, ScenarioConfig, Simulation, SofteningMode};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use std::path::PathBuf;

/// Headless run of a scenario: one tick per frame, report at the end
#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`; the builtin solar system when omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Number of frames (ticks) to run
    #[arg(long, default_value_t = 365)]
    ticks: u64,

    /// Simulated seconds per tick, overrides the scenario
    #[arg(long)]
    step: Option<f64>,

    /// Body to report on, overrides the scenario
    #[arg(long)]
    select: Option<usize>,

    /// Use the raw distance in the force law
    #[arg(long)]
    unsoftened: bool,

    /// Log the selected body every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    report_every: u64,

    /// Print tick timings for growing body counts and exit
    #[arg(long)]
    bench: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut cfg = match &args.file_name {
        Some(file_name) => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
            ScenarioConfig::from_path(&config_path)
                .with_context(|| format!("loading {}", config_path.display()))?
        }
        None => ScenarioConfig::builtin_solar_system().context("loading builtin solar system")?,
    };

    if args.unsoftened {
        cfg.engine.softening = SofteningMode::Unsoftened;
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.bench {
        bench_tick_curve();
        return Ok(());
    }

    let cfg = load_scenario(&args)?;
    let mut sim = Simulation::from_config(&cfg)?;

    if let Some(step) = args.step {
        sim.set_step_seconds(step)?;
    }
    if let Some(index) = args.select {
        sim.select(index)?;
    }

    // the external frame loop: it owns the run flag, the core only ticks
    sim.set_running(true);
    for frame in 1..=args.ticks {
        sim.tick();

        if args.report_every > 0 && frame % args.report_every == 0 {
            if let Some(report) = BodyReport::for_index(&sim, sim.selected()) {
                info!(
                    day = sim.elapsed_days(),
                    body = %report.name,
                    r_au = report.distance_au,
                    speed = report.speed(),
                    "progress"
                );
            }
        }
    }
    sim.set_running(false);

    if sim.has_non_finite_state() {
        tracing::warn!("state contains non-finite values");
    }

    println!("Day: {}", sim.elapsed_days());
    if let Some(report) = BodyReport::for_index(&sim, sim.selected()) {
        println!("{report}");
    }

    Ok(())
}
