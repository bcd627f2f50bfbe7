use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use meterview_core::errors::{ErrorKind, MeterError, Upstream};
use tracing::error;

#[derive(Debug)]
pub struct MeterAxumError(pub anyhow::Error);

impl From<anyhow::Error> for MeterAxumError {
    fn from(e: anyhow::Error) -> Self {
        Self(e)
    }
}

impl From<MeterError> for MeterAxumError {
    fn from(e: MeterError) -> Self {
        Self(e.into_anyhow())
    }
}

/// Answer with exactly what the billing platform answered.
fn passthrough(status: u16, body: String) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = if serde_json::from_str::<serde_json::Value>(&body).is_ok() {
        "application/json"
    } else {
        "text/plain; charset=utf-8"
    };
    (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
}

impl IntoResponse for MeterAxumError {
    fn into_response(self) -> Response {
        // If it's a MeterError (even if wrapped by anyhow contexts), keep its shape
        if let Some(meter) = MeterError::from_anyhow(&self.0) {
            let safe = meter.sanitize_for_client();

            if let (ErrorKind::Remote, Some(Upstream { status: Some(status), body })) =
                (safe.kind, safe.upstream.clone())
            {
                return passthrough(status, body);
            }

            let status = StatusCode::from_u16(safe.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (status, Json(safe.to_json())).into_response();
        }

        // Fallback: anything else is an internal failure
        error!(error = %self.0, "unhandled error");
        let meter = MeterError::general_error(self.0.to_string());
        let status = StatusCode::from_u16(meter.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(meter.to_json())).into_response()
    }
}
