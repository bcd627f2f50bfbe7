use std::sync::Arc;

use crate::{BillingApi, CustomerService, DashboardService, MeterConfig};

struct MeterAppInner {
    config: MeterConfig,
    customers: CustomerService,
    dashboards: DashboardService,
}

/// MeterApp is the central application container for meterview.
///
/// Framework-agnostic. Holds:
/// - the customer listing service
/// - the dashboard URL service
/// - config, fixed once the app is built
///
/// Both services share one `BillingApi` binding. Cloning is cheap.
pub struct MeterApp {
    inner: Arc<MeterAppInner>,
}

impl Clone for MeterApp {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl MeterApp {
    pub fn new(api: Arc<dyn BillingApi>) -> Self {
        Self::with_config(MeterConfig::new(), api)
    }

    pub fn with_config(config: MeterConfig, api: Arc<dyn BillingApi>) -> Self {
        Self {
            inner: Arc::new(MeterAppInner {
                config,
                customers: CustomerService::new(Arc::clone(&api)),
                dashboards: DashboardService::new(api),
            }),
        }
    }

    pub fn customers(&self) -> &CustomerService {
        &self.inner.customers
    }

    pub fn dashboards(&self) -> &DashboardService {
        &self.inner.dashboards
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.config.get(key).map(str::to_string)
    }
}
