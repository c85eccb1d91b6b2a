//! Robot soccer decision cycle entry point.
//!
//! Evaluates the soccer behavior tree once against a world snapshot and logs
//! every condition and action encountered along the way.
//!
//! ```bash
//! # Kick-off situation with a random seed
//! cargo run -p robot-cli
//!
//! # Custom situation, reproducible outcome
//! BT_SCENARIO=scenarios/defend.toml BT_SEED=7 cargo run -p robot-cli
//! ```
mod config;
mod logging;

use anyhow::{Context, Result};
use behavior_tree::TracingSink;
use config::CliConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use robot_ai::Scenario;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let scenario = match &config.scenario_path {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => Scenario::initial(),
    };
    tracing::debug!(world = ?scenario.world, "world snapshot");

    let tree = scenario
        .build_tree()
        .context("failed to assemble the soccer tree")?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, tree = tree.name(), "Starting decision cycle");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let status = tree
        .tick(&scenario.world, &mut rng, &mut TracingSink)
        .context("decision cycle aborted")?;

    tracing::info!(%status, "--------------------");
    tracing::info!("Behaviour tree exited.");
    Ok(())
}
