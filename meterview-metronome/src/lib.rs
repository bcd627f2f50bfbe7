//! meterview-metronome: Metronome binding for meterview.
//!
//! Implements [`meterview_core::BillingApi`] over the Metronome REST API.
//! The bearer token travels with every call; the client itself only
//! knows the base URL.

mod client;
mod error;
mod types;

pub use client::{MetronomeClient, DEFAULT_BASE_URL};
pub use error::MetronomeError;
pub use types::{EmbeddableUrlData, EmbeddableUrlRequest, EmbeddableUrlResponse, ListCustomersResponse};
