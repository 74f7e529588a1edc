use anyhow::Context;
use std::path::PathBuf;
use stay_logger::Logger;
use stay_shell::{DEFAULT_CONFIG_PATH, ShellConfig, replay};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let path = std::env::args_os().nth(1).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    let cfg = ShellConfig::load(&path)
        .with_context(|| format!("Critical: Configuration {} is malformed", path.display()))?;

    let _log = Logger::from_config(&cfg.stay.logging).context("Critical: Logging setup failed")?;

    let platform = stay::init(&cfg.stay).context("Critical: Hotel catalog could not be seeded")?;

    let summary = replay(&platform, &cfg.requests);
    info!(
        accepted = summary.accepted.len(),
        refused = summary.refused.len(),
        "Replay finished"
    );

    Ok(())
}
