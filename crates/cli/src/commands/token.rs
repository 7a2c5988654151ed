//! Development token minting.
//!
//! Signs a bearer token with the same secret resolution the API uses
//! (`JWT_SECRET`, falling back to the built-in development secret), so the
//! minted token is accepted by a locally running server.

use thiserror::Error;

use toolshed_api::config::{ApiConfig, ConfigError};
use toolshed_api::services::{AuthError, AuthService};
use toolshed_core::{Email, EmailError, UserId};

/// Errors that can occur while minting a token.
#[derive(Debug, Error)]
pub enum TokenCmdError {
    /// Configuration failed to load.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The supplied email is invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The auth service failed to sign the token.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Mint a bearer token for the given identity.
pub fn mint(email: &str, user_id: &str) -> Result<(), TokenCmdError> {
    let config = ApiConfig::from_env()?;
    let email = Email::parse(email)?;

    let auth = AuthService::new(config.jwt_secret)?;
    let token = auth.mint_token(&UserId::new(user_id), &email)?;

    tracing::info!("Token for {email} ({user_id}), valid 24h:");
    tracing::info!("{token}");
    tracing::info!("Use it as: Authorization: Bearer <token>");

    Ok(())
}
