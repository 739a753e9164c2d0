//! Shared helpers for the client integration suites

use chrono::{TimeZone, Utc};
use paack_client::{PaackClient, PaackConfig};
use paack_domain::{Address, Customer, Label, Order, Parcel, ScheduleSlot};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Install the test tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Four mock servers standing in for the platform: business API, label API,
/// and one token issuer per auth domain.
pub struct TestPlatform {
    pub api: MockServer,
    pub labels: MockServer,
    pub order_issuer: MockServer,
    pub label_issuer: MockServer,
}

impl TestPlatform {
    pub async fn start() -> Self {
        init_tracing();
        Self {
            api: MockServer::start().await,
            labels: MockServer::start().await,
            order_issuer: MockServer::start().await,
            label_issuer: MockServer::start().await,
        }
    }

    pub fn config(&self) -> PaackConfig {
        PaackConfig {
            api_host: self.api.uri(),
            label_host: self.labels.uri(),
            order_token_endpoint: self.order_issuer.uri(),
            label_token_endpoint: self.label_issuer.uri(),
            order_client_id: "order-client".to_string(),
            order_client_secret: "order-secret".to_string(),
            order_audience: "https://api.test.paack.app".to_string(),
            label_client_id: "label-client".to_string(),
            label_client_secret: "label-secret".to_string(),
            label_audience: "https://labels.test.paack.app".to_string(),
        }
    }

    pub fn client(&self) -> PaackClient {
        PaackClient::new(&self.config()).expect("client should build from mock config")
    }

    /// Mount an order-domain issuer that always hands out `token`.
    pub async fn issue_order_tokens(&self, token: &str) {
        mount_issuer(&self.order_issuer, token).await;
    }

    /// Mount a label-domain issuer that always hands out `token`.
    pub async fn issue_label_tokens(&self, token: &str) {
        mount_issuer(&self.label_issuer, token).await;
    }

    pub async fn order_token_request_count(&self) -> usize {
        self.order_issuer.received_requests().await.expect("requests recorded").len()
    }

    pub async fn label_token_request_count(&self) -> usize {
        self.label_issuer.received_requests().await.expect("requests recorded").len()
    }
}

async fn mount_issuer(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "access_token": token })),
        )
        .mount(server)
        .await;
}

pub fn sample_parcel(barcode: &str) -> Parcel {
    Parcel {
        barcode: barcode.to_string(),
        height: 84,
        length: 33,
        parcel_type: "standard".to_string(),
        volumetric_weight: 3475,
        weight: 83,
        width: 22,
    }
}

pub fn sample_order(external_id: &str) -> Order {
    let pick_up_start =
        Utc.with_ymd_and_hms(2024, 3, 8, 17, 0, 0).single().expect("valid timestamp");
    let pick_up_end = Utc.with_ymd_and_hms(2024, 3, 8, 19, 0, 0).single().expect("valid timestamp");
    let delivery_start =
        Utc.with_ymd_and_hms(2024, 3, 8, 18, 0, 0).single().expect("valid timestamp");
    let delivery_end =
        Utc.with_ymd_and_hms(2024, 3, 8, 20, 0, 0).single().expect("valid timestamp");

    Order {
        order_id: None,
        tracking_id: None,
        cod_currency: Some("EUR".to_string()),
        cod_value: Some(40.5),
        customer: Customer {
            first_name: "Loic".to_string(),
            last_name: "Couturier".to_string(),
            language: "fr".to_string(),
            ..Customer::default()
        },
        delivery_address: Address {
            city: "STRASBOURG".to_string(),
            country: "FR".to_string(),
            line1: "3 RUE DU PARC".to_string(),
            post_code: "67000".to_string(),
            ..Address::default()
        },
        delivery_instructions: None,
        delivery_type: "direct".to_string(),
        expected_delivery: ScheduleSlot::new(&delivery_start, &delivery_end),
        expected_pick_up: ScheduleSlot::new(&pick_up_start, &pick_up_end),
        external_id: external_id.to_string(),
        insured_currency: Some("EUR".to_string()),
        insured_value: Some(40.5),
        parcels: vec![sample_parcel(&format!("{external_id}-1"))],
        pick_up_address: Address {
            city: "BEZONS".to_string(),
            country: "FR".to_string(),
            line1: "1 RUE JEAN CARRASSO".to_string(),
            post_code: "95870".to_string(),
            ..Address::default()
        },
        pick_up_instructions: None,
        service_type: "ST2".to_string(),
        undeliverable_address: None,
        undeliverable_instructions: None,
        sale_number: None,
        order_details: vec![],
    }
}

pub fn sample_label(external_id: &str) -> Label {
    Label {
        external_id: Some(external_id.to_string()),
        parcels: vec![sample_parcel(&format!("{external_id}-1"))],
        service_type: Some("ST2".to_string()),
        ..Label::default()
    }
}
