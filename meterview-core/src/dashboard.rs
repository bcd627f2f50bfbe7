use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MeterError;

/// Inline style of the embed snippet.
pub const EMBED_STYLE: &str = "width:100%;height:800px;border:0;";

/// Dashboards the billing platform can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardKind {
    Invoices,
    Usage,
    CommitsAndCredits,
}

impl DashboardKind {
    pub const ALL: [DashboardKind; 3] = [
        DashboardKind::Invoices,
        DashboardKind::Usage,
        DashboardKind::CommitsAndCredits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardKind::Invoices => "invoices",
            DashboardKind::Usage => "usage",
            DashboardKind::CommitsAndCredits => "commits_and_credits",
        }
    }
}

impl fmt::Display for DashboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardKind {
    type Err = MeterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| MeterError::validation(format!("Invalid dashboard: {s}")))
    }
}

/// One customer, one dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRequest {
    pub customer_id: String,
    pub kind: DashboardKind,
}

impl DashboardRequest {
    pub fn new(customer_id: impl Into<String>, kind: DashboardKind) -> Self {
        Self {
            customer_id: customer_id.into(),
            kind,
        }
    }
}

/// The copy-paste iframe tag for an embeddable URL. Empty in, empty out.
pub fn embed_snippet(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    format!(r#"<iframe src="{url}" style="{EMBED_STYLE}" loading="lazy"></iframe>"#)
}
