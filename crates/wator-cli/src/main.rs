//! Driver binary: seed a small world and run it.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wator_core::{SimConfig, Species};
use wator_world::Simulation;

fn main() -> Result<()> {
    init_tracing();

    let config = SimConfig {
        width: 10,
        height: 10,
        starvation_interval: 4,
        spawn_period: 4,
        seed: 41,
        logging: true,
        ..SimConfig::default()
    };

    info!(
        width = config.width,
        height = config.height,
        starvation_interval = config.starvation_interval,
        spawn_period = config.spawn_period,
        seed = config.seed,
        "starting world"
    );

    let mut sim = Simulation::new(config);
    sim.place(2, 2, Species::Predator)?;
    sim.place(3, 2, Species::Prey)?;

    let summary = sim.run(6)?;

    println!("{}", sim.render());
    println!(
        "Prey: {}, Predators: {}",
        summary.population.prey, summary.population.predators
    );

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}
