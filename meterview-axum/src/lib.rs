//! meterview-axum: Axum adapter for meterview.
//!
//! Mounts the customer listing and embed-url services of a
//! [`meterview_core::MeterApp`] as JSON POST routes.

pub mod app;
pub mod rest;
pub mod state;
mod error;
pub use error::MeterAxumError;
pub use state::MeterAxumState;

pub use app::{axum, AxumApp};
