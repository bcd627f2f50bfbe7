pub mod app;
pub mod config;
pub mod page;
pub mod view;

use std::sync::Arc;

use anyhow::Result;
use meterview_axum::AxumApp;
use meterview_core::{BillingApi, MeterConfig};
use meterview_metronome::{MetronomeClient, MetronomeError};

/// Wire the viewer against the real Metronome API, configured from the environment.
pub fn build() -> Result<AxumApp> {
    let cfg = config::config();
    let client = MetronomeClient::from_config(&cfg.snapshot()).map_err(MetronomeError::into_anyhow)?;
    Ok(build_with(cfg, Arc::new(client)))
}

/// Wire the viewer against any billing binding.
pub fn build_with(config: MeterConfig, api: Arc<dyn BillingApi>) -> AxumApp {
    app::meter_app(config, api)
}
