use std::sync::Arc;

use meterview_axum::{axum, AxumApp};
use meterview_core::{BillingApi, MeterApp, MeterConfig};

use crate::page;

/// Routes of the viewer:
/// - `GET /` the page
/// - `GET /health`
/// - `POST /customers`, `POST /embed-url` and the same under `/api`
pub fn meter_app(config: MeterConfig, api: Arc<dyn BillingApi>) -> AxumApp {
    let meter_app = MeterApp::with_config(config, api);

    axum(meter_app)
        .use_get("/", page::index)
        .use_get("/health", || async { "ok" })
        .use_billing("/")
        .use_billing("/api")
        .with_request_tracing()
}
