//! OAuth2 token endpoint wire types

use serde::{Deserialize, Serialize};

/// Client-credentials grant request accepted by both token issuers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRequest {
    pub client_id: String,
    pub client_secret: String,
    pub audience: String,
    pub grant_type: String,
}

impl TokenRequest {
    /// Build the only grant shape the platform supports.
    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            audience: audience.into(),
            grant_type: "client_credentials".to_string(),
        }
    }
}

/// Issuer response; only the access token is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_type_is_fixed() {
        let request = TokenRequest::client_credentials("id", "secret", "https://api.example");

        assert_eq!(request.grant_type, "client_credentials");
        let value = serde_json::to_value(&request).expect("request serializes");
        assert_eq!(value.get("audience").and_then(|v| v.as_str()), Some("https://api.example"));
    }

    #[test]
    fn response_ignores_extra_issuer_fields() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"access_token":"tok-1","token_type":"Bearer","expires_in":86400}"#,
        )
        .expect("response decodes");

        assert_eq!(response.access_token, "tok-1");
    }
}
