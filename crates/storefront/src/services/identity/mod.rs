//! Identity provider client.
//!
//! Credential storage, session issuance, OTP delivery, and email
//! verification all happen inside the hosted provider; this client only
//! shapes requests and maps failures. The cart store has no dependency on
//! identity - authentication gates UI flows, never cart semantics.

mod error;

pub use error::AuthError;

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use tamarind_core::{Email, UserId};

use crate::config::IdentityConfig;
use error::from_status;

/// A session issued by the identity provider.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    /// Provider-side account identifier; matches the `users` document id.
    pub user_id: UserId,
    /// Short-lived token attached to authenticated requests.
    pub id_token: String,
    /// Long-lived token used to mint new id tokens.
    pub refresh_token: String,
    /// Whether the account's email has been verified.
    pub email_verified: bool,
}

/// Third-party single-sign-on providers the storefront accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SsoProvider {
    Google,
    Facebook,
}

// Request bodies, one per provider operation.

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    display_name: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct OtpSendRequest<'a> {
    phone: &'a str,
}

#[derive(Serialize)]
struct OtpVerifyRequest<'a> {
    phone: &'a str,
    code: &'a str,
}

#[derive(Serialize)]
struct SsoRequest<'a> {
    provider: SsoProvider,
    access_token: &'a str,
}

#[derive(Serialize)]
struct PasswordResetRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct EmailVerificationRequest<'a> {
    id_token: &'a str,
}

/// Client for the hosted identity provider.
///
/// Every operation is a single request/response call: no retries, no local
/// credential state.
#[derive(Clone)]
pub struct IdentityClient {
    inner: Arc<IdentityClientInner>,
}

struct IdentityClientInner {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl IdentityClient {
    /// Create a new identity provider client.
    #[must_use]
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            inner: Arc::new(IdentityClientInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint.clone(),
                api_key: config.api_key.expose_secret().to_owned(),
            }),
        }
    }

    /// Issue one provider call and parse the typed response.
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, AuthError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/{path}",
            self.inner.endpoint.as_str().trim_end_matches('/')
        );

        let response = self
            .inner
            .client
            .post(url)
            .bearer_auth(&self.inner.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            debug!(status = %status, detail = %detail, "identity provider rejected request");
            return Err(from_status(status));
        }

        Ok(response.json().await?)
    }

    /// Fire a provider call whose response body carries nothing of interest.
    async fn post_unit<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), AuthError> {
        let _: serde_json::Value = self.post(path, body).await?;
        Ok(())
    }

    /// Register a new account with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UserAlreadyExists`] when the email is taken, or
    /// another [`AuthError`] for provider/transport failures.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        email: &Email,
        password: &str,
        display_name: &str,
    ) -> Result<AuthSession, AuthError> {
        self.post(
            "v1/accounts/register",
            &RegisterRequest {
                email: email.as_str(),
                password,
                display_name,
            },
        )
        .await
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for a wrong password or
    /// unknown account, or another [`AuthError`] for provider/transport
    /// failures.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &Email, password: &str) -> Result<AuthSession, AuthError> {
        self.post(
            "v1/sessions/password",
            &LoginRequest {
                email: email.as_str(),
                password,
            },
        )
        .await
    }

    /// Ask the provider to deliver a one-time code to a phone number.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the provider refuses or is unreachable.
    #[instrument(skip(self))]
    pub async fn request_phone_otp(&self, phone: &str) -> Result<(), AuthError> {
        self.post_unit("v1/otp/send", &OtpSendRequest { phone })
            .await
    }

    /// Exchange a delivered one-time code for a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::OtpRejected`] for a wrong or expired code, or
    /// another [`AuthError`] for provider/transport failures.
    #[instrument(skip(self, code))]
    pub async fn verify_phone_otp(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<AuthSession, AuthError> {
        self.post("v1/otp/verify", &OtpVerifyRequest { phone, code })
            .await
    }

    /// Exchange a third-party SSO access token for a session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the token is rejected or the provider
    /// is unreachable.
    #[instrument(skip(self, access_token))]
    pub async fn sso_login(
        &self,
        provider: SsoProvider,
        access_token: &str,
    ) -> Result<AuthSession, AuthError> {
        self.post(
            "v1/sessions/sso",
            &SsoRequest {
                provider,
                access_token,
            },
        )
        .await
    }

    /// Ask the provider to send a password reset email.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the provider refuses or is unreachable.
    #[instrument(skip(self))]
    pub async fn request_password_reset(&self, email: &Email) -> Result<(), AuthError> {
        self.post_unit(
            "v1/accounts/password-reset",
            &PasswordResetRequest {
                email: email.as_str(),
            },
        )
        .await
    }

    /// Ask the provider to send a verification email for the session's
    /// account.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the token is rejected or the provider
    /// is unreachable.
    #[instrument(skip(self, id_token))]
    pub async fn send_email_verification(&self, id_token: &str) -> Result<(), AuthError> {
        self.post_unit(
            "v1/accounts/email-verification",
            &EmailVerificationRequest { id_token },
        )
        .await
    }
}

impl std::fmt::Debug for IdentityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
