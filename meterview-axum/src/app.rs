use std::sync::Arc;

use axum::handler::Handler;
use axum::http::HeaderName;
use axum::routing::get;
use axum::Router;
use meterview_core::MeterApp;
use tokio::net::{TcpListener, ToSocketAddrs};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::rest;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct AxumApp {
    pub app: Arc<MeterApp>,
    pub router: Router<()>,
}

impl AxumApp {
    pub fn new(app: MeterApp) -> Self {
        Self {
            app: Arc::new(app),
            router: Router::new(),
        }
    }

    /// Mount a router under `path`; `""` or `"/"` merges at the root.
    pub fn use_router(mut self, path: &str, router: Router<()>) -> Self {
        self.router = match path {
            "" | "/" => self.router.merge(router),
            _ => self.router.nest(path, router),
        };
        self
    }

    pub fn use_get<H, T>(mut self, path: &str, handler: H) -> Self
    where
        H: Handler<T, ()> + Clone + Send + Sync + 'static,
        T: 'static,
    {
        self.router = self.router.route(path, get(handler));
        self
    }

    /// Mount `POST {path}/customers` and `POST {path}/embed-url`.
    pub fn use_billing(self, path: &str) -> Self {
        let router = rest::billing_router(Arc::clone(&self.app));
        self.use_router(path, router)
    }

    /// Request ids and trace spans for every route mounted so far.
    /// Call after the last route is added.
    pub fn with_request_tracing(mut self) -> Self {
        let header = HeaderName::from_static(REQUEST_ID_HEADER);
        self.router = self
            .router
            .layer(PropagateRequestIdLayer::new(header.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(header, MakeRequestUuid));
        self
    }

    pub async fn listen<A>(self, addr: A) -> anyhow::Result<()>
    where
        A: ToSocketAddrs,
    {
        let listener = TcpListener::bind(addr).await?;
        info!(addr = %listener.local_addr()?, "meterview listening");
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

pub fn axum(app: MeterApp) -> AxumApp {
    AxumApp::new(app)
}
