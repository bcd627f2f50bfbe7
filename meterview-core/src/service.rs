use std::sync::Arc;

use tracing::{debug, warn};

use crate::billing::BillingApi;
use crate::credential::Credential;
use crate::customer::Customer;
use crate::dashboard::DashboardRequest;
use crate::errors::{MeterError, MeterResult};

/// Records requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Hard cap on page fetches per listing. Anything past
/// `PAGE_SIZE * MAX_PAGES` customers is dropped, never fetched.
pub const MAX_PAGES: usize = 5;

pub const MISSING_CREDENTIAL: &str = "Missing metronomeApiKey";
pub const MISSING_DASHBOARD_FIELDS: &str = "Missing metronomeApiKey, customer_id, or dashboard";

/// Lists an account's customers by walking the upstream cursor.
#[derive(Clone)]
pub struct CustomerService {
    api: Arc<dyn BillingApi>,
}

impl CustomerService {
    pub fn new(api: Arc<dyn BillingApi>) -> Self {
        Self { api }
    }

    /// Fetch pages in order until the cursor runs out or `MAX_PAGES`
    /// pages have been fetched, then normalize every record.
    pub async fn list(&self, credential: &Credential) -> MeterResult<Vec<Customer>> {
        if credential.is_empty() {
            return Err(MeterError::validation(MISSING_CREDENTIAL).into_anyhow());
        }

        let mut records = Vec::new();
        let mut cursor: Option<String> = None;

        for page_no in 1..=MAX_PAGES {
            let page = self
                .api
                .list_customers(credential, cursor.as_deref(), PAGE_SIZE)
                .await?;

            debug!(page = page_no, records = page.records.len(), "fetched customer page");
            records.extend(page.records);

            cursor = page.next_cursor.filter(|c| !c.is_empty());
            if cursor.is_none() {
                break;
            }
        }

        if cursor.is_some() {
            warn!(
                max_pages = MAX_PAGES,
                customers = records.len(),
                "customer listing stopped at page cap, remaining pages not fetched"
            );
        }

        Ok(records.into_iter().map(Customer::from).collect())
    }
}

/// Requests embeddable dashboard URLs.
#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn BillingApi>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn BillingApi>) -> Self {
        Self { api }
    }

    /// One upstream call, no retries. The URL is returned untouched.
    pub async fn embed_url(
        &self,
        credential: &Credential,
        request: &DashboardRequest,
    ) -> MeterResult<Option<String>> {
        if credential.is_empty() || request.customer_id.is_empty() {
            return Err(MeterError::validation(MISSING_DASHBOARD_FIELDS).into_anyhow());
        }

        debug!(customer_id = %request.customer_id, dashboard = %request.kind, "requesting embeddable url");

        self.api
            .get_embed_url(credential, &request.customer_id, request.kind)
            .await
    }
}
