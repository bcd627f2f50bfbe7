use async_trait::async_trait;

use crate::credential::Credential;
use crate::customer::CustomerRecord;
use crate::dashboard::DashboardKind;
use crate::errors::MeterResult;

/// One page of the upstream customer list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPage {
    pub records: Vec<CustomerRecord>,
    /// Opaque cursor for the next page; never parsed or built locally.
    pub next_cursor: Option<String>,
}

/// What meterview needs from a billing platform.
///
/// The credential is passed on every call; implementations must not
/// keep it. Failures of the platform itself should surface as a
/// `MeterError` of kind `Remote` inside the returned `anyhow::Error`.
#[async_trait]
pub trait BillingApi: Send + Sync {
    /// Fetch up to `limit` customers starting at `cursor` (`None` = first page).
    async fn list_customers(
        &self,
        credential: &Credential,
        cursor: Option<&str>,
        limit: u32,
    ) -> MeterResult<CustomerPage>;

    /// Ask for a signed, embeddable dashboard URL. `None` if the platform omitted it.
    async fn get_embed_url(
        &self,
        credential: &Credential,
        customer_id: &str,
        kind: DashboardKind,
    ) -> MeterResult<Option<String>>;
}
