//! Presentation state for the single-page viewer.
//!
//! All transitions go through [`reduce`], which returns the next view
//! and the effects to run. The page script follows the same rules;
//! this module is the reference for them.

use meterview_core::{embed_snippet, Customer, DashboardKind};

pub const LOAD_CUSTOMERS_FAILED: &str = "Failed to load customers";
pub const DASHBOARD_FAILED: &str = "Failed to generate dashboard URL";

/// The dashboard the page asks for.
pub const PAGE_DASHBOARD: DashboardKind = DashboardKind::Usage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingCustomers,
    CustomersLoaded,
    LoadingDashboard,
    DashboardReady,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub api_key: String,
    pub customers: Vec<Customer>,
    pub selected: String,
    pub dashboard_url: String,
    pub error: String,
    pub loading_customers: bool,
    pub loading_dashboard: bool,
}

impl View {
    pub fn phase(&self) -> Phase {
        if self.loading_customers {
            Phase::LoadingCustomers
        } else if self.loading_dashboard {
            Phase::LoadingDashboard
        } else if !self.dashboard_url.is_empty() {
            Phase::DashboardReady
        } else if !self.customers.is_empty() {
            Phase::CustomersLoaded
        } else {
            Phase::Idle
        }
    }

    /// State of the "Load customers" button.
    pub fn can_load_customers(&self) -> bool {
        !self.api_key.is_empty() && !self.loading_customers
    }

    /// State of the "Show usage dashboard" button.
    pub fn can_show_dashboard(&self) -> bool {
        !self.selected.is_empty() && !self.loading_dashboard
    }

    pub fn snippet(&self) -> String {
        embed_snippet(&self.dashboard_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ApiKeyChanged(String),
    LoadCustomers,
    CustomersLoaded(Vec<Customer>),
    CustomersFailed(Option<String>),
    SelectCustomer(String),
    ShowDashboard,
    DashboardLoaded(Option<String>),
    DashboardFailed(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCustomers {
        api_key: String,
    },
    FetchEmbedUrl {
        api_key: String,
        customer_id: String,
        dashboard: DashboardKind,
    },
}

/// (view, event) -> (next view, effects)
///
/// - a trigger whose button is disabled is ignored
/// - a result arriving when nothing of its kind is in flight is dropped
pub fn reduce(view: &View, event: Event) -> (View, Vec<Effect>) {
    let mut next = view.clone();

    let effects = match event {
        Event::ApiKeyChanged(key) => {
            next.api_key = key;
            vec![]
        }
        Event::LoadCustomers => {
            if !view.can_load_customers() {
                return (next, vec![]);
            }
            next.error.clear();
            next.dashboard_url.clear();
            next.selected.clear();
            next.loading_customers = true;
            vec![Effect::FetchCustomers {
                api_key: view.api_key.clone(),
            }]
        }
        Event::CustomersLoaded(customers) => {
            if view.loading_customers {
                next.customers = customers;
                next.loading_customers = false;
            }
            vec![]
        }
        Event::CustomersFailed(message) => {
            if view.loading_customers {
                next.error = message.unwrap_or_else(|| LOAD_CUSTOMERS_FAILED.to_string());
                next.loading_customers = false;
            }
            vec![]
        }
        Event::SelectCustomer(id) => {
            next.selected = id;
            vec![]
        }
        Event::ShowDashboard => {
            if !view.can_show_dashboard() {
                return (next, vec![]);
            }
            next.error.clear();
            next.dashboard_url.clear();
            next.loading_dashboard = true;
            vec![Effect::FetchEmbedUrl {
                api_key: view.api_key.clone(),
                customer_id: view.selected.clone(),
                dashboard: PAGE_DASHBOARD,
            }]
        }
        Event::DashboardLoaded(url) => {
            if view.loading_dashboard {
                next.dashboard_url = url.unwrap_or_default();
                next.loading_dashboard = false;
            }
            vec![]
        }
        Event::DashboardFailed(message) => {
            if view.loading_dashboard {
                next.error = message.unwrap_or_else(|| DASHBOARD_FAILED.to_string());
                next.loading_dashboard = false;
            }
            vec![]
        }
    };

    (next, effects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: format!("Name {id}"),
        }
    }

    fn apply(view: View, events: Vec<Event>) -> View {
        events.into_iter().fold(view, |v, e| reduce(&v, e).0)
    }

    fn loaded() -> View {
        apply(
            View::default(),
            vec![
                Event::ApiKeyChanged("key".into()),
                Event::LoadCustomers,
                Event::CustomersLoaded(vec![customer("a"), customer("b")]),
            ],
        )
    }

    #[test]
    fn listing_needs_a_key() {
        let (view, effects) = reduce(&View::default(), Event::LoadCustomers);
        assert!(effects.is_empty());
        assert_eq!(view.phase(), Phase::Idle);
    }

    #[test]
    fn listing_success_reaches_customers_loaded() {
        let view = View::default();
        let (view, _) = reduce(&view, Event::ApiKeyChanged("key".into()));
        let (view, effects) = reduce(&view, Event::LoadCustomers);
        assert_eq!(view.phase(), Phase::LoadingCustomers);
        assert_eq!(effects, vec![Effect::FetchCustomers { api_key: "key".into() }]);

        let (view, _) = reduce(&view, Event::CustomersLoaded(vec![customer("a")]));
        assert_eq!(view.phase(), Phase::CustomersLoaded);
        assert!(view.selected.is_empty());
    }

    #[test]
    fn second_listing_trigger_in_flight_is_rejected() {
        let view = apply(
            View::default(),
            vec![Event::ApiKeyChanged("key".into()), Event::LoadCustomers],
        );
        assert!(!view.can_load_customers());

        let (again, effects) = reduce(&view, Event::LoadCustomers);
        assert!(effects.is_empty());
        assert_eq!(again, view);
    }

    #[test]
    fn listing_failure_goes_back_to_idle_with_error() {
        let view = apply(
            View::default(),
            vec![
                Event::ApiKeyChanged("key".into()),
                Event::LoadCustomers,
                Event::CustomersFailed(Some(r#"{"message":"Unauthorized"}"#.into())),
            ],
        );
        assert_eq!(view.phase(), Phase::Idle);
        assert_eq!(view.error, r#"{"message":"Unauthorized"}"#);
        assert!(view.can_load_customers());
    }

    #[test]
    fn new_listing_clears_dashboard_selection_and_error() {
        let view = apply(
            loaded(),
            vec![
                Event::SelectCustomer("a".into()),
                Event::ShowDashboard,
                Event::DashboardLoaded(Some("https://x.example/embed?tok=abc".into())),
            ],
        );
        assert_eq!(view.phase(), Phase::DashboardReady);

        let (view, _) = reduce(&view, Event::LoadCustomers);
        assert!(view.dashboard_url.is_empty());
        assert!(view.selected.is_empty());
        assert!(view.error.is_empty());
    }

    #[test]
    fn dashboard_request_uses_usage_and_keeps_list_and_selection() {
        let view = apply(loaded(), vec![Event::SelectCustomer("b".into())]);
        let (view, effects) = reduce(&view, Event::ShowDashboard);

        assert_eq!(view.phase(), Phase::LoadingDashboard);
        assert_eq!(view.customers.len(), 2);
        assert_eq!(view.selected, "b");
        assert_eq!(
            effects,
            vec![Effect::FetchEmbedUrl {
                api_key: "key".into(),
                customer_id: "b".into(),
                dashboard: DashboardKind::Usage,
            }]
        );
    }

    #[test]
    fn dashboard_needs_a_selection() {
        let (_, effects) = reduce(&loaded(), Event::ShowDashboard);
        assert!(effects.is_empty());
    }

    #[test]
    fn dashboard_failure_stays_on_customers_with_error() {
        let view = apply(
            loaded(),
            vec![
                Event::SelectCustomer("a".into()),
                Event::ShowDashboard,
                Event::DashboardFailed(None),
            ],
        );
        assert_eq!(view.phase(), Phase::CustomersLoaded);
        assert_eq!(view.error, DASHBOARD_FAILED);
        assert_eq!(view.selected, "a");
    }

    #[test]
    fn dashboard_ready_derives_snippet() {
        let view = apply(
            loaded(),
            vec![
                Event::SelectCustomer("a".into()),
                Event::ShowDashboard,
                Event::DashboardLoaded(Some("https://x.example/embed?tok=abc".into())),
            ],
        );
        assert_eq!(
            view.snippet(),
            r#"<iframe src="https://x.example/embed?tok=abc" style="width:100%;height:800px;border:0;" loading="lazy"></iframe>"#
        );
    }

    #[test]
    fn missing_url_leaves_nothing_to_show() {
        let view = apply(
            loaded(),
            vec![
                Event::SelectCustomer("a".into()),
                Event::ShowDashboard,
                Event::DashboardLoaded(None),
            ],
        );
        assert_eq!(view.phase(), Phase::CustomersLoaded);
        assert_eq!(view.snippet(), "");
    }

    #[test]
    fn late_results_are_dropped() {
        let view = loaded();
        let (after, _) = reduce(&view, Event::CustomersLoaded(vec![customer("z")]));
        assert_eq!(after.customers, view.customers);

        let (after, _) = reduce(&view, Event::DashboardLoaded(Some("https://late".into())));
        assert!(after.dashboard_url.is_empty());
    }
}
