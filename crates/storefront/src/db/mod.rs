//! Hosted document store access.
//!
//! The backend is a managed collection-of-documents database reached over
//! JSON REST. Collections used by the storefront:
//!
//! - `products` - seller listings
//! - `users` - account profiles (credentials live in the identity provider)
//! - `posts` - community posts
//! - `shops` - seller shops
//!
//! # Error policy
//!
//! Wrappers are deliberately thin: one call per function, no retries, no
//! pagination, no caching, no cross-document transactionality. On failure the
//! provider-specific detail is logged here and discarded; callers receive a
//! [`DataError`] carrying a fixed, user-presentable message per operation,
//! suitable for a transient notification.

pub mod posts;
pub mod products;
pub mod shops;
pub mod users;

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use url::Url;

use crate::config::DocstoreConfig;

// =============================================================================
// Error Types
// =============================================================================

/// Generic wrapper failure surfaced to the user.
///
/// Carries only the fixed message for the failed operation; the underlying
/// provider error has already been logged at the wrapper boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DataError(pub &'static str);

/// Provider-level failure, internal to this module.
///
/// Logged and collapsed into a [`DataError`] before leaving the wrapper.
#[derive(Debug, Error)]
pub(crate) enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Build the error mapper for one wrapper operation: logs the provider
/// detail, returns the operation's fixed message.
pub(crate) fn fail(message: &'static str) -> impl FnOnce(ProviderError) -> DataError {
    move |e| {
        error!(error = %e, "document store operation failed");
        DataError(message)
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// A stored document: the record fields plus the store-assigned identifier.
///
/// The id is the only thing the data access layer adds to a record; no other
/// transformation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document<T> {
    /// Store-assigned document identifier.
    pub id: String,
    /// The record fields, flattened alongside the id on the wire.
    #[serde(flatten)]
    pub data: T,
}

/// Response shape for collection listings.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    documents: Vec<Document<T>>,
}

// =============================================================================
// DocumentClient
// =============================================================================

/// Client for the hosted document store's REST surface.
///
/// Cheaply cloneable via `Arc`. All collection wrappers in this module go
/// through one instance.
#[derive(Clone)]
pub struct DocumentClient {
    inner: Arc<DocumentClientInner>,
}

struct DocumentClientInner {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl DocumentClient {
    /// Create a new document store client.
    #[must_use]
    pub fn new(config: &DocstoreConfig) -> Self {
        Self {
            inner: Arc::new(DocumentClientInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint.clone(),
                api_key: config.api_key.expose_secret().to_owned(),
            }),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/collections/{collection}/documents",
            self.inner.endpoint.as_str().trim_end_matches('/')
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{id}", self.collection_url(collection))
    }

    /// Turn a response into either its body or a status error.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ProviderError::Status { status, body })
    }

    /// List a collection, newest documents first.
    ///
    /// `filter` is an optional field/value equality constraint, matching the
    /// provider's simple query support. No cursor-based pagination exists.
    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
        filter: Option<(&str, &str)>,
    ) -> Result<Vec<Document<T>>, ProviderError> {
        let mut query = vec![("order_by", "created_at"), ("direction", "desc")];
        if let Some((field, value)) = filter {
            query.push(("filter_field", field));
            query.push(("filter_value", value));
        }

        let response = self
            .inner
            .client
            .get(self.collection_url(collection))
            .bearer_auth(&self.inner.api_key)
            .query(&query)
            .send()
            .await?;

        let listing: ListResponse<T> = Self::check(response).await?.json().await?;
        Ok(listing.documents)
    }

    /// Fetch a single document by id.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Document<T>, ProviderError> {
        let response = self
            .inner
            .client
            .get(self.document_url(collection, id))
            .bearer_auth(&self.inner.api_key)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Create a document; the store assigns and returns its id.
    pub(crate) async fn create<B, T>(
        &self,
        collection: &str,
        record: &B,
    ) -> Result<Document<T>, ProviderError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .inner
            .client
            .post(self.collection_url(collection))
            .bearer_auth(&self.inner.api_key)
            .json(record)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Partially update a document, returning its new contents.
    pub(crate) async fn update<B, T>(
        &self,
        collection: &str,
        id: &str,
        changes: &B,
    ) -> Result<Document<T>, ProviderError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .inner
            .client
            .patch(self.document_url(collection, id))
            .bearer_auth(&self.inner.api_key)
            .json(changes)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Delete a document.
    pub(crate) async fn delete(&self, collection: &str, id: &str) -> Result<(), ProviderError> {
        let response = self
            .inner
            .client
            .delete(self.document_url(collection, id))
            .bearer_auth(&self.inner.api_key)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}

impl std::fmt::Debug for DocumentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
