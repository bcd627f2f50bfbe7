use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    routing::post,
    Json, Router,
};
use meterview_core::{
    bail_meter, Credential, Customer, DashboardKind, DashboardRequest, MeterApp, MeterError,
    MeterResult, MISSING_CREDENTIAL, MISSING_DASHBOARD_FIELDS,
};
use serde::{Deserialize, Serialize};

use crate::{MeterAxumError, MeterAxumState};

#[derive(Debug, Default, Deserialize)]
pub struct CustomersBody {
    #[serde(default, rename = "metronomeApiKey")]
    pub metronome_api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EmbedUrlBody {
    #[serde(default, rename = "metronomeApiKey")]
    pub metronome_api_key: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub dashboard: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomersResponse {
    pub customers: Vec<Customer>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmbedUrlResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

fn map_json_rejection(rejection: JsonRejection) -> MeterAxumError {
    MeterError::validation("Failed to parse the request body as JSON")
        .with_details(rejection.body_text())
        .into()
}

/// Absent and empty are the same thing for required fields.
fn present(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

impl CustomersBody {
    pub fn credential(self) -> MeterResult<Credential> {
        let Some(key) = present(self.metronome_api_key) else {
            bail_meter!(validation, MISSING_CREDENTIAL);
        };
        Ok(Credential::new(key))
    }
}

impl EmbedUrlBody {
    /// All three fields must be present before the dashboard name is checked.
    pub fn into_parts(self) -> MeterResult<(Credential, DashboardRequest)> {
        let (Some(key), Some(customer_id), Some(dashboard)) = (
            present(self.metronome_api_key),
            present(self.customer_id),
            present(self.dashboard),
        ) else {
            bail_meter!(validation, MISSING_DASHBOARD_FIELDS);
        };

        let kind: DashboardKind = dashboard.parse()?;
        Ok((Credential::new(key), DashboardRequest::new(customer_id, kind)))
    }
}

async fn list_customers(
    State(state): State<MeterAxumState>,
    body: Result<Json<CustomersBody>, JsonRejection>,
) -> Result<Json<CustomersResponse>, MeterAxumError> {
    let Json(body) = body.map_err(map_json_rejection)?;
    let credential = body.credential()?;

    let customers = state.app.customers().list(&credential).await?;
    Ok(Json(CustomersResponse { customers }))
}

async fn embed_url(
    State(state): State<MeterAxumState>,
    body: Result<Json<EmbedUrlBody>, JsonRejection>,
) -> Result<Json<EmbedUrlResponse>, MeterAxumError> {
    let Json(body) = body.map_err(map_json_rejection)?;
    let (credential, request) = body.into_parts()?;

    let url = state.app.dashboards().embed_url(&credential, &request).await?;
    Ok(Json(EmbedUrlResponse { url }))
}

/// `POST /customers` and `POST /embed-url`.
pub fn billing_router(app: Arc<MeterApp>) -> Router<()> {
    let state = MeterAxumState { app };

    Router::new()
        .route("/customers", post(list_customers))
        .route("/embed-url", post(embed_url))
        .with_state(state)
}
