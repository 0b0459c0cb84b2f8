use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mailstart::config::Config;
use mailstart::permissions::{self, ConsentLedger, ConsentRuntime};
use mailstart::strings::Strings;
use mailstart::{logging, ui};

/// Onboarding permissions screen for the mailstart email client.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the config file (default: <config>/mailstart/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the render tick interval in milliseconds.
    #[arg(long)]
    tick_rate: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(tick_rate) = cli.tick_rate {
        config.ui.tick_rate_ms = tick_rate;
        config.validate()?;
    }
    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, "config loaded");

    let strings = Strings::load(&Strings::overrides_path())?;

    let ledger_path = config
        .permissions
        .ledger_path
        .clone()
        .unwrap_or_else(ConsentLedger::default_path);
    let ledger = ConsentLedger::load(&ledger_path)
        .with_context(|| format!("loading consent ledger from {}", ledger_path.display()))?;
    let notifications_supported =
        permissions::notifications_supported(config.permissions.notifications_supported);
    let runtime = ConsentRuntime::new(ledger, notifications_supported);

    let completed = ui::run(&config, strings, Box::new(runtime))?;
    tracing::info!(completed, "onboarding permissions screen closed");
    Ok(())
}
