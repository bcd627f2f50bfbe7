//! meterview-core: framework-agnostic core for meterview.
//!
//! Holds the billing data model, the `BillingApi` capability that
//! HTTP bindings implement, and the two services built on top of it:
//! customer listing and embeddable dashboard URLs.

pub mod app;
pub mod billing;
pub mod config;
pub mod credential;
pub mod customer;
pub mod dashboard;
pub mod errors;
pub mod service;

pub use app::MeterApp;
pub use billing::{BillingApi, CustomerPage};
pub use config::{MeterConfig, MeterConfigSnapshot};
pub use credential::Credential;
pub use customer::{Customer, CustomerRecord, UNNAMED_CUSTOMER};
pub use dashboard::{embed_snippet, DashboardKind, DashboardRequest, EMBED_STYLE};
pub use errors::{ErrorKind, MeterError, MeterResult};
pub use service::{
    CustomerService, DashboardService, MAX_PAGES, MISSING_CREDENTIAL, MISSING_DASHBOARD_FIELDS,
    PAGE_SIZE,
};
