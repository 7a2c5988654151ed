//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::ApiConfig;
use crate::services::{AuthError, AuthService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the loaded catalog, and the auth service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    catalog: CatalogStore,
    auth: AuthService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the auth service fails to hash its demo
    /// credential.
    pub fn new(config: ApiConfig, catalog: CatalogStore) -> Result<Self, AuthError> {
        let auth = AuthService::new(config.jwt_secret.clone())?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                auth,
            }),
        })
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the auth service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }
}
