//! Shared call pipeline
//!
//! Every operation funnels through here: serialize the payload, ensure a
//! bearer token for the operation's auth domain, execute the exchange,
//! classify the status, decode the result. A 401 invalidates the token that
//! was used and retries the whole call exactly once with a forced
//! re-authentication; a second 401 is terminal. The label endpoint is the
//! only one whose success body is returned as raw bytes instead of JSON.

use paack_domain::{ApiError, ApiResult, ErrorDetail};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::auth::{AuthDomain, Credentials, TokenCache};
use crate::http::HttpClient;

/// Forced re-authentications allowed per call before a 401 is terminal.
const MAX_AUTH_RETRIES: u32 = 1;

/// Request/auth/retry/decode engine shared by all operations.
///
/// Owns the transport and one token cache per auth domain. Token mutation is
/// serialized per domain inside [`TokenCache`]; business exchanges run
/// outside those locks.
#[derive(Debug)]
pub struct CallPipeline {
    http: HttpClient,
    orders: TokenCache,
    labels: TokenCache,
}

impl CallPipeline {
    /// Wire up the pipeline with one credential set per auth domain.
    pub fn new(http: HttpClient, orders: Credentials, labels: Credentials) -> Self {
        Self {
            http,
            orders: TokenCache::new(AuthDomain::Orders, orders),
            labels: TokenCache::new(AuthDomain::Labels, labels),
        }
    }

    fn cache(&self, domain: AuthDomain) -> &TokenCache {
        match domain {
            AuthDomain::Orders => &self.orders,
            AuthDomain::Labels => &self.labels,
        }
    }

    /// Execute a call whose success body is JSON.
    ///
    /// # Errors
    /// Any [`ApiError`]; a success body that does not decode into `T`
    /// reports [`ApiError::Decode`].
    pub async fn call_json<T, B>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        domain: AuthDomain,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = encode_body(body)?;
        let bytes = self.dispatch(method, url, payload, domain).await?;

        serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::Decode(format!("response body: {err}")))
    }

    /// Execute a call whose success body is an opaque document (labels).
    ///
    /// The bytes are returned exactly as received; no decoding is attempted
    /// on a 2xx response.
    ///
    /// # Errors
    /// Any [`ApiError`]; failure bodies are still classified as JSON.
    pub async fn call_bytes<B>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        domain: AuthDomain,
    ) -> ApiResult<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let payload = encode_body(body)?;
        self.dispatch(method, url, payload, domain).await
    }

    /// Run the exchange with the bounded re-authentication retry.
    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        payload: Vec<u8>,
        domain: AuthDomain,
    ) -> ApiResult<Vec<u8>> {
        let mut auth_retries = 0;

        loop {
            let token = self.cache(domain).get_or_fetch(&self.http).await?;

            let request = self
                .http
                .request(method.clone(), url)
                .header(ACCEPT, "application/json")
                .header(CONTENT_TYPE, "application/json")
                .bearer_auth(&token)
                .body(payload.clone());

            let response = self.http.send(request).await?;
            let status = response.status();
            let body =
                response.bytes().await.map_err(|err| ApiError::Transport(err.to_string()))?;

            if status == StatusCode::UNAUTHORIZED {
                // Only the domain this call authenticated against is
                // affected; the other domain's token stays cached.
                self.cache(domain).invalidate(&token).await;

                if auth_retries < MAX_AUTH_RETRIES {
                    auth_retries += 1;
                    warn!(%url, domain = %domain, "401 received, re-authenticating and retrying once");
                    continue;
                }

                warn!(%url, domain = %domain, "401 received again after re-authentication");
                return Err(ApiError::UnauthorizedAfterRetry(detail_or_raw(&body)));
            }

            if status.is_success() {
                return Ok(body.to_vec());
            }

            return Err(classify_failure(status, &body));
        }
    }
}

/// Serialize the payload, or the `{}` sentinel for bodiless requests.
///
/// The upstream API expects a body marker even on reads, so GET and DELETE
/// still send an empty JSON object.
fn encode_body<B: Serialize + ?Sized>(body: Option<&B>) -> ApiResult<Vec<u8>> {
    match body {
        Some(payload) => serde_json::to_vec(payload)
            .map_err(|err| ApiError::Decode(format!("request body: {err}"))),
        None => Ok(b"{}".to_vec()),
    }
}

/// Map a non-2xx, non-401 response onto the error taxonomy.
///
/// The server's detail document is decoded from the body; if that decode
/// fails the call reports the decode failure instead of the status
/// classification.
pub(crate) fn classify_failure(status: StatusCode, body: &[u8]) -> ApiError {
    let detail = match ErrorDetail::from_body(body) {
        Ok(detail) => detail,
        Err(err) => return ApiError::Decode(format!("error response body: {err}")),
    };

    match status.as_u16() {
        400 => ApiError::BadRequest(detail),
        403 => ApiError::Forbidden(detail),
        404 => ApiError::NotFound(detail),
        status => ApiError::Undefined { status, detail },
    }
}

/// 401 bodies are frequently empty or non-JSON; keep whatever was sent.
fn detail_or_raw(body: &[u8]) -> ErrorDetail {
    ErrorDetail::from_body(body).unwrap_or_else(|_| ErrorDetail {
        message: None,
        raw: String::from_utf8_lossy(body).into_owned(),
    })
}
