//! Public operation surface for the delivery platform

use std::time::Duration;

use async_trait::async_trait;
use paack_domain::{
    ApiResult, CancelResponse, Label, Order, OrderResponse, Parcel, Parcels,
    ReplaceParcelsResponse, UpdateResponse,
};
use reqwest::Method;
use tracing::debug;

use crate::auth::{AuthDomain, Credentials};
use crate::config::{ConfigError, PaackConfig};
use crate::http::HttpClient;
use crate::pipeline::CallPipeline;

/// Default per-request timeout for business and token calls.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The platform's order and label operations.
///
/// Implemented by [`PaackClient`]; kept as a trait so application code can
/// substitute a double in tests.
#[async_trait]
pub trait DeliveryApi: Send + Sync {
    /// Register a new order.
    async fn create_order(&self, order: &Order) -> ApiResult<OrderResponse>;

    /// Fetch an order by its identifier.
    async fn retrieve_order(&self, order_id: &str) -> ApiResult<OrderResponse>;

    /// Replace an existing order wholesale.
    async fn update_order(&self, order_id: &str, order: &Order) -> ApiResult<UpdateResponse>;

    /// Swap an order's parcel manifest.
    async fn replace_order_parcels(
        &self,
        order_id: &str,
        parcels: Vec<Parcel>,
    ) -> ApiResult<ReplaceParcelsResponse>;

    /// Cancel an order.
    async fn cancel_order(&self, order_id: &str) -> ApiResult<CancelResponse>;

    /// Render a shipping label; returns the raw document bytes (PDF/ZPL).
    async fn create_label(&self, label: &Label) -> ApiResult<Vec<u8>>;
}

/// Client for the Paack REST API.
///
/// Operations perform no local validation; malformed payloads are rejected
/// upstream and surface as bad-request errors. The client is cheap to share
/// behind an `Arc` and safe to use from concurrent tasks.
#[derive(Debug)]
pub struct PaackClient {
    pipeline: CallPipeline,
    api_host: String,
    label_host: String,
}

impl PaackClient {
    /// Build a client from validated configuration with the default
    /// transport.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration is incomplete or the
    /// transport cannot be constructed.
    pub fn new(config: &PaackConfig) -> Result<Self, ConfigError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("paack-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        Self::with_http_client(config, http)
    }

    /// Build a client over a caller-supplied transport (custom timeouts or
    /// default headers).
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration is incomplete.
    pub fn with_http_client(config: &PaackConfig, http: HttpClient) -> Result<Self, ConfigError> {
        config.validate()?;

        let orders = Credentials {
            client_id: config.order_client_id.clone(),
            client_secret: config.order_client_secret.clone(),
            audience: config.order_audience.clone(),
            token_endpoint: trim_trailing_slash(&config.order_token_endpoint),
        };
        let labels = Credentials {
            client_id: config.label_client_id.clone(),
            client_secret: config.label_client_secret.clone(),
            audience: config.label_audience.clone(),
            token_endpoint: trim_trailing_slash(&config.label_token_endpoint),
        };

        Ok(Self {
            pipeline: CallPipeline::new(http, orders, labels),
            api_host: trim_trailing_slash(&config.api_host),
            label_host: trim_trailing_slash(&config.label_host),
        })
    }
}

#[async_trait]
impl DeliveryApi for PaackClient {
    async fn create_order(&self, order: &Order) -> ApiResult<OrderResponse> {
        debug!(external_id = %order.external_id, "create order");
        let url = format!("{}/public/v3/orders", self.api_host);
        self.pipeline.call_json(Method::POST, &url, Some(order), AuthDomain::Orders).await
    }

    async fn retrieve_order(&self, order_id: &str) -> ApiResult<OrderResponse> {
        debug!(order_id, "retrieve order");
        let url = format!("{}/public/v3/orders/{order_id}", self.api_host);
        self.pipeline.call_json::<_, ()>(Method::GET, &url, None, AuthDomain::Orders).await
    }

    async fn update_order(&self, order_id: &str, order: &Order) -> ApiResult<UpdateResponse> {
        debug!(order_id, "update order");
        let url = format!("{}/public/v3/orders/{order_id}", self.api_host);
        self.pipeline.call_json(Method::PUT, &url, Some(order), AuthDomain::Orders).await
    }

    async fn replace_order_parcels(
        &self,
        order_id: &str,
        parcels: Vec<Parcel>,
    ) -> ApiResult<ReplaceParcelsResponse> {
        debug!(order_id, count = parcels.len(), "replace order parcels");
        let url = format!("{}/public/v3/orders/{order_id}/parcels", self.api_host);
        let manifest = Parcels { parcels };
        self.pipeline.call_json(Method::PUT, &url, Some(&manifest), AuthDomain::Orders).await
    }

    async fn cancel_order(&self, order_id: &str) -> ApiResult<CancelResponse> {
        debug!(order_id, "cancel order");
        let url = format!("{}/public/v3/orders/{order_id}", self.api_host);
        self.pipeline.call_json::<_, ()>(Method::DELETE, &url, None, AuthDomain::Orders).await
    }

    async fn create_label(&self, label: &Label) -> ApiResult<Vec<u8>> {
        debug!("create label");
        let url = format!("{}/v3/labels", self.label_host);
        self.pipeline.call_bytes(Method::POST, &url, Some(label), AuthDomain::Labels).await
    }
}

fn trim_trailing_slash(host: &str) -> String {
    host.trim_end_matches('/').to_string()
}
