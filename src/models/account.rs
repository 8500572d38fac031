//! Account models and the `account.json` endpoints.

use serde::{Deserialize, Serialize};

use crate::client::WordnikClient;
use crate::error::{require, require_segment, Result};
use crate::models::word_list::WordList;
use crate::query::{QueryOption, QueryParams};

/// Credential scoping requests to one user.
///
/// Returned by [`WordnikClient::authenticate`]; pass `token` to the
/// account and word list calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationToken {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user_signature: String,
}

/// Usage status of the API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTokenStatus {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub resets_in_millis: i64,
    #[serde(default)]
    pub remaining_calls: i64,
    #[serde(default)]
    pub expires_in_millis: i64,
    #[serde(default)]
    pub total_requests: i64,
}

/// A Wordnik user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: i64,
    #[serde(rename = "faceBookId", default)]
    pub facebook_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl AuthenticationToken {
    /// Returns true if the service issued a usable token.
    pub fn is_valid(&self) -> bool {
        !self.token.is_empty() && self.user_id != 0
    }
}

fn authenticate_path(username: &str) -> String {
    format!("account.json/authenticate/{}", urlencoding::encode(username))
}

impl WordnikClient {
    /// Authenticate a user, sending the password as a query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WordnikError::InvalidArgument`] if either argument
    /// is empty.
    #[tracing::instrument(skip(self, password))]
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationToken> {
        require_segment("username", username)?;
        require("password", password)?;
        let params = QueryParams::with_defaults(&[("password", password)]);
        self.get_json(&authenticate_path(username), params, &[])
            .await
    }

    /// Authenticate a user, sending the password in the request body.
    #[tracing::instrument(skip(self, password))]
    pub async fn authenticate_post(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationToken> {
        require_segment("username", username)?;
        require("password", password)?;
        let request = self.form_request(
            &authenticate_path(username),
            &QueryParams::new(),
            "POST",
            Some(password.as_bytes().to_vec()),
        )?;
        self.execute(request).await
    }

    /// Get the usage status of this client's API key.
    #[tracing::instrument(skip(self))]
    pub async fn api_token_status(&self) -> Result<ApiTokenStatus> {
        self.get_json("account.json/apiTokenStatus", QueryParams::new(), &[])
            .await
    }

    /// Get the user owning `auth_token`.
    #[tracing::instrument(skip_all)]
    pub async fn logged_in_user(&self, auth_token: &str) -> Result<User> {
        require("auth token", auth_token)?;
        let request =
            self.form_user_request("account.json/user", &QueryParams::new(), "GET", None, auth_token)?;
        self.execute(request).await
    }

    /// Get the word lists of the user owning `auth_token`.
    ///
    /// Defaults: `skip=0`, `limit=50`.
    #[tracing::instrument(skip_all)]
    pub async fn word_lists_for_user(
        &self,
        auth_token: &str,
        options: &[QueryOption],
    ) -> Result<Vec<WordList>> {
        require("auth token", auth_token)?;
        let mut params = QueryParams::with_defaults(&[("skip", "0"), ("limit", "50")]);
        params.apply(options);
        let request =
            self.form_user_request("account.json/wordLists", &params, "GET", None, auth_token)?;
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_token_deserialize() {
        let json = r#"{"token": "abc", "userId": 42, "userSignature": "sig"}"#;
        let auth: AuthenticationToken = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(auth.token, "abc");
        assert_eq!(auth.user_id, 42);
        assert!(auth.is_valid());
    }

    #[test]
    fn test_authentication_token_from_error_body_is_invalid() {
        let auth: AuthenticationToken =
            serde_json::from_str(r#"{"type": "error", "message": "bad password"}"#).unwrap();
        assert!(!auth.is_valid());
    }

    #[test]
    fn test_api_token_status_deserialize() {
        let json = r#"{
            "valid": true,
            "token": "key",
            "resetsInMillis": 1000,
            "remainingCalls": 14999,
            "expiresInMillis": 0,
            "totalRequests": 1
        }"#;
        let status: ApiTokenStatus = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(status.valid);
        assert_eq!(status.remaining_calls, 14999);
    }

    #[test]
    fn test_user_deserialize() {
        let json = r#"{"id": 7, "username": "lexi", "faceBookId": null, "displayName": "Lexi"}"#;
        let user: User = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(user.username, "lexi");
        assert!(user.facebook_id.is_none());
        assert_eq!(user.display_name.as_deref(), Some("Lexi"));
    }

    #[test]
    fn test_authenticate_path_encodes_username() {
        assert_eq!(
            authenticate_path("a user"),
            "account.json/authenticate/a%20user"
        );
    }
}
