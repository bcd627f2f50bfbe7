use async_trait::async_trait;
use meterview_core::{BillingApi, Credential, CustomerPage, DashboardKind, MeterConfigSnapshot, MeterResult};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::MetronomeError;
use crate::types::{EmbeddableUrlRequest, EmbeddableUrlResponse, ListCustomersResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.metronome.com";

/// Metronome adapter that makes direct calls to the REST API.
///
/// Holds no credentials: every call is authorised with the bearer
/// token it is given.
#[derive(Debug, Clone)]
pub struct MetronomeClient {
    client: Client,
    base_url: String,
}

impl MetronomeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, MetronomeError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| MetronomeError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build from `metronome.baseUrl`, falling back to the public API.
    pub fn from_config(config: &MeterConfigSnapshot) -> Result<Self, MetronomeError> {
        Self::new(
            config
                .get_string("metronome.baseUrl")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorized(&self, builder: RequestBuilder, credential: &Credential) -> RequestBuilder {
        builder
            .bearer_auth(credential.expose())
            .header("Accept", "application/json")
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, MetronomeError> {
        let response: Response = builder.send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MetronomeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| MetronomeError::Decode { source, body })
    }
}

#[async_trait]
impl BillingApi for MetronomeClient {
    async fn list_customers(
        &self,
        credential: &Credential,
        cursor: Option<&str>,
        limit: u32,
    ) -> MeterResult<CustomerPage> {
        let url = format!("{}/v1/customers", self.base_url);

        let mut query = vec![("limit", limit.to_string())];
        if let Some(cursor) = cursor {
            query.push(("next_page", cursor.to_string()));
        }

        let builder = self.authorized(self.client.get(&url).query(&query), credential);
        let page: ListCustomersResponse = Self::send(builder)
            .await
            .map_err(MetronomeError::into_anyhow)?;

        let records = page.data.unwrap_or_default();
        debug!(records = records.len(), has_next = page.next_page.is_some(), "metronome customers page");

        Ok(CustomerPage {
            records,
            next_cursor: page.next_page,
        })
    }

    async fn get_embed_url(
        &self,
        credential: &Credential,
        customer_id: &str,
        kind: DashboardKind,
    ) -> MeterResult<Option<String>> {
        let url = format!("{}/v1/dashboards/getEmbeddableUrl", self.base_url);
        let body = EmbeddableUrlRequest {
            customer_id,
            dashboard: kind.as_str(),
        };

        let builder = self.authorized(self.client.post(&url).json(&body), credential);
        let response: EmbeddableUrlResponse = Self::send(builder)
            .await
            .map_err(MetronomeError::into_anyhow)?;

        Ok(response.into_url())
    }
}
