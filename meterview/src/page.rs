use axum::response::Html;
use meterview_core::EMBED_STYLE;

use crate::view::{DASHBOARD_FAILED, LOAD_CUSTOMERS_FAILED, PAGE_DASHBOARD};

const TEMPLATE: &str = include_str!("page.html");

/// The viewer page with its constants filled in.
///
/// `api_prefix` is where the billing routes are mounted (`""` or `"/api"`).
pub fn render(api_prefix: &str) -> String {
    let api_prefix = api_prefix.trim_end_matches('/');
    TEMPLATE
        .replace("{{EMBED_STYLE}}", EMBED_STYLE)
        .replace("{{DASHBOARD}}", PAGE_DASHBOARD.as_str())
        .replace("{{CUSTOMERS_PATH}}", &format!("{api_prefix}/customers"))
        .replace("{{EMBED_URL_PATH}}", &format!("{api_prefix}/embed-url"))
        .replace("{{LOAD_CUSTOMERS_FAILED}}", LOAD_CUSTOMERS_FAILED)
        .replace("{{DASHBOARD_FAILED}}", DASHBOARD_FAILED)
}

pub async fn index() -> Html<String> {
    Html(render("/api"))
}
