// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod config;
mod errors;
mod logging;
mod logic;
mod models;
mod mvu;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "parliament-events", version, about = "Catalogue of student parliament events")]
struct Cli {
    /// JSON file with events to open on start
    file: Option<PathBuf>,

    /// Read settings from this TOML file instead of the user config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let log_filter = config
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| config::AppConfig::default().log_filter);
    logging::init(&log_filter);

    let config = config.unwrap_or_else(|err| {
        tracing::warn!(error = ?err, "using default configuration");
        config::AppConfig::default()
    });

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let mut model = mvu::AppModel::default();
    if let Some(path) = &cli.file {
        mvu::open_now(&mut model, path);
    }

    app::run(config, model).map_err(|err| anyhow::anyhow!("UI terminated with an error: {err}"))
}
