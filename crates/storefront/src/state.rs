//! Application state shared across the storefront.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::db::DocumentClient;
use crate::services::identity::IdentityClient;

/// Shared handles to configuration and the hosted backend clients.
///
/// Cheaply cloneable via `Arc`. The cart store is deliberately NOT part of
/// this state: it is mutable per-client data with a single owner, so the host
/// constructs a [`crate::cart::CartStore`] itself at startup and passes it by
/// reference to whatever consumes it.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    documents: DocumentClient,
    identity: IdentityClient,
}

impl AppState {
    /// Create the application state from loaded configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let documents = DocumentClient::new(&config.docstore);
        let identity = IdentityClient::new(&config.identity);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                documents,
                identity,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the document store client.
    #[must_use]
    pub fn documents(&self) -> &DocumentClient {
        &self.inner.documents
    }

    /// Get a reference to the identity provider client.
    #[must_use]
    pub fn identity(&self) -> &IdentityClient {
        &self.inner.identity
    }
}
