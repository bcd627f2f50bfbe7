use meterview_core::MeterError;
use thiserror::Error;

/// Failures talking to Metronome.
#[derive(Error, Debug)]
pub enum MetronomeError {
    #[error("Invalid Metronome base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Metronome request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("Metronome API error {status}")]
    Status { status: u16, body: String },

    #[error("Failed to parse Metronome response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl MetronomeError {
    /// Map to the core error the services and HTTP layer understand.
    ///
    /// A non-2xx answer keeps its status and body; anything that never
    /// produced a usable answer is a remote error without status.
    pub fn into_meter_error(self) -> MeterError {
        let message = self.to_string();
        match self {
            MetronomeError::Status { status, body } => {
                MeterError::remote(message).with_upstream(Some(status), body)
            }
            MetronomeError::Decode { source, body } => MeterError::remote(message)
                .with_upstream(None, body)
                .with_source(source.into()),
            MetronomeError::Transport { source } => MeterError::remote(message).with_source(source.into()),
            MetronomeError::InvalidBaseUrl { .. } => MeterError::general_error(message),
        }
    }

    pub fn into_anyhow(self) -> anyhow::Error {
        self.into_meter_error().into_anyhow()
    }
}
