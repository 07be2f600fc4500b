// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod config;
mod models;
mod mvu;
mod services;
mod ui;
mod utils;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::services::Services;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    tracing::info!(
        store_dir = %config.store_dir.display(),
        enforce_size_limit = config.enforce_size_limit,
        "starting research archive"
    );

    app::run(Services::local(config)).map_err(|err| anyhow::anyhow!("UI failed: {err}"))
}
