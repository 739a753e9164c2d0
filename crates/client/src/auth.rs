//! Per-domain OAuth2 token acquisition and caching
//!
//! The platform splits authentication across two independent issuers: one
//! for order operations and one for label operations. Each domain owns its
//! own credentials and cached bearer token; nothing in one domain's
//! lifecycle may touch the other's.

use std::fmt;

use paack_domain::{ApiError, ApiResult, TokenRequest, TokenResponse};
use reqwest::header::ACCEPT;
use reqwest::Method;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::http::HttpClient;
use crate::pipeline::classify_failure;

/// One of the two independent OAuth2 credential scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDomain {
    /// Order create/retrieve/update/cancel and parcel replacement.
    Orders,
    /// Label rendering.
    Labels,
}

impl fmt::Display for AuthDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Orders => write!(f, "orders"),
            Self::Labels => write!(f, "labels"),
        }
    }
}

/// Client-credentials grant material for one auth domain.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub audience: String,
    /// Issuer base; the grant is posted to `{token_endpoint}/oauth/token`.
    pub token_endpoint: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("audience", &self.audience)
            .field("token_endpoint", &self.token_endpoint)
            .finish()
    }
}

/// Cached bearer token for a single auth domain.
///
/// The slot is a mutex so acquisition serializes per domain: callers racing
/// on an empty slot produce exactly one token request, and invalidation only
/// clears the token the failed call actually used.
#[derive(Debug)]
pub(crate) struct TokenCache {
    domain: AuthDomain,
    credentials: Credentials,
    token: Mutex<Option<String>>,
}

impl TokenCache {
    pub(crate) fn new(domain: AuthDomain, credentials: Credentials) -> Self {
        Self { domain, credentials, token: Mutex::new(None) }
    }

    /// Return the cached token, fetching a fresh one if the slot is empty.
    ///
    /// Holds the domain lock across the fetch. Business calls only take the
    /// lock long enough to copy the token out, so they run concurrently once
    /// a token exists.
    pub(crate) async fn get_or_fetch(&self, http: &HttpClient) -> ApiResult<String> {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }

        debug!(domain = %self.domain, "no cached token, authenticating");
        let token = authenticate(http, &self.credentials).await?;
        info!(domain = %self.domain, "obtained access token");
        *slot = Some(token.clone());
        Ok(token)
    }

    /// Drop the cached token if it is still the one a failed call used.
    ///
    /// A concurrent call may have re-authenticated in the meantime; its
    /// newer token must survive.
    pub(crate) async fn invalidate(&self, stale: &str) {
        let mut slot = self.token.lock().await;
        if slot.as_deref() == Some(stale) {
            warn!(domain = %self.domain, "discarding rejected access token");
            *slot = None;
        }
    }
}

/// Post the client-credentials grant to the domain's token endpoint.
async fn authenticate(http: &HttpClient, credentials: &Credentials) -> ApiResult<String> {
    let url = format!("{}/oauth/token", credentials.token_endpoint);
    let grant = TokenRequest::client_credentials(
        credentials.client_id.clone(),
        credentials.client_secret.clone(),
        credentials.audience.clone(),
    );

    let request = http.request(Method::POST, &url).header(ACCEPT, "application/json").json(&grant);

    let response = http.send(request).await?;
    let status = response.status();
    let body = response.bytes().await.map_err(|err| ApiError::Transport(err.to_string()))?;

    if !status.is_success() {
        warn!(status = status.as_u16(), %url, "token endpoint refused the grant");
        return Err(classify_failure(status, &body));
    }

    let token: TokenResponse = serde_json::from_slice(&body)
        .map_err(|err| ApiError::Decode(format!("token endpoint response: {err}")))?;

    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_credentials(endpoint: String) -> Credentials {
        Credentials {
            client_id: "client-1".to_string(),
            client_secret: "secret-1".to_string(),
            audience: "https://api.test".to_string(),
            token_endpoint: endpoint,
        }
    }

    #[tokio::test]
    async fn fetches_token_once_and_reuses_it() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_partial_json(serde_json::json!({
                "grant_type": "client_credentials",
                "client_id": "client-1",
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"access_token": "tok-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let http = HttpClient::new().expect("http client");
        let cache = TokenCache::new(AuthDomain::Orders, test_credentials(server.uri()));

        let first = cache.get_or_fetch(&http).await.expect("token");
        let second = cache.get_or_fetch(&http).await.expect("token");

        assert_eq!(first, "tok-1");
        assert_eq!(second, "tok-1");
    }

    #[tokio::test]
    async fn invalidate_ignores_tokens_it_did_not_issue() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"access_token": "tok-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let http = HttpClient::new().expect("http client");
        let cache = TokenCache::new(AuthDomain::Orders, test_credentials(server.uri()));

        let token = cache.get_or_fetch(&http).await.expect("token");
        // a stale value from an older call must not clear the current token
        cache.invalidate("tok-0").await;

        let still_cached = cache.get_or_fetch(&http).await.expect("token");
        assert_eq!(still_cached, token);
    }

    #[tokio::test]
    async fn grant_rejection_propagates_classified_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(serde_json::json!({"message": "unknown client"})),
            )
            .mount(&server)
            .await;

        let http = HttpClient::new().expect("http client");
        let cache = TokenCache::new(AuthDomain::Labels, test_credentials(server.uri()));

        let err = cache.get_or_fetch(&http).await.expect_err("grant must fail");
        match err {
            ApiError::Forbidden(detail) => {
                assert_eq!(detail.message.as_deref(), Some("unknown client"));
            }
            other => panic!("expected forbidden, got {other:?}"),
        }
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let credentials = test_credentials("https://issuer.test".to_string());
        let rendered = format!("{credentials:?}");

        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("secret-1"));
    }
}
