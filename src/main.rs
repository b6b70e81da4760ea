use anyhow::Result;
use clap::Parser;
use garden_core::init_logging;
use garden_sim_lib::app::{GardenSimulator, ShutdownManager};
use garden_sim_lib::driver::{self, DriverConfig};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rules config file (TOML)
    #[arg(short, long, default_value = "garden.toml")]
    config: PathBuf,

    /// Plant roster file (JSON)
    #[arg(short, long, default_value = "plants.json")]
    plants: PathBuf,

    /// Number of simulated days
    #[arg(short, long, default_value_t = 10)]
    days: u32,

    /// Daily pest probability, clamped to [0, 1]
    #[arg(long, default_value_t = driver::DEFAULT_PEST_PROBABILITY)]
    pest: f64,

    /// Wall-clock milliseconds per simulated day
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Seed for reproducible runs (overrides the config seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut rules = garden_io::load_rules(&args.config)?;
    if args.seed.is_some() {
        rules.seed = args.seed;
    }

    let config = DriverConfig {
        days: args.days,
        pest_probability: args.pest,
        tick: Duration::from_millis(args.tick_ms),
        seed: rules.seed.map(|s| s.wrapping_add(1)),
    }
    .normalized();

    let mut sim = GardenSimulator::new(rules);
    sim.initialize_garden(&args.plants).await?;

    let initial = sim.get_plants().await?;
    tracing::info!(
        days = config.days,
        pest_probability = config.pest_probability,
        tick_ms = args.tick_ms,
        plants = %args.plants.display(),
        "Simulation config"
    );
    tracing::info!(plants = %serde_json::to_string(&initial)?, "Initial plants");

    let shutdown = ShutdownManager::new();
    shutdown.listen_for_ctrl_c();

    let summary = driver::run(&sim, &config, &shutdown).await;
    shutdown.cleanup(&mut sim).await?;
    let summary = summary?;

    println!(
        "Ran {} day(s) with pestProb={} using plants={}: alive={:?} dead={:?}",
        summary.days_run,
        config.pest_probability,
        args.plants.display(),
        summary.status.alive,
        summary.status.dead
    );
    Ok(())
}
