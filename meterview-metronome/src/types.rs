//! Wire types for the Metronome endpoints meterview calls.

use meterview_core::CustomerRecord;
use serde::{Deserialize, Serialize};

/// Response from `GET /v1/customers`. `data` may be absent or `null`.
#[derive(Debug, Deserialize)]
pub struct ListCustomersResponse {
    #[serde(default)]
    pub data: Option<Vec<CustomerRecord>>,
    #[serde(default)]
    pub next_page: Option<String>,
}

/// Body of `POST /v1/dashboards/getEmbeddableUrl`
#[derive(Debug, Serialize)]
pub struct EmbeddableUrlRequest<'a> {
    pub customer_id: &'a str,
    pub dashboard: &'a str,
}

/// Response from `POST /v1/dashboards/getEmbeddableUrl`
#[derive(Debug, Deserialize)]
pub struct EmbeddableUrlResponse {
    #[serde(default)]
    pub data: Option<EmbeddableUrlData>,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddableUrlData {
    #[serde(default)]
    pub url: Option<String>,
}

impl EmbeddableUrlResponse {
    pub fn into_url(self) -> Option<String> {
        self.data.and_then(|d| d.url)
    }
}
