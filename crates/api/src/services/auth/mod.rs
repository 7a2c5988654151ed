//! Authentication service.
//!
//! Placeholder authentication: registration fabricates a user and signs a
//! token without storing anything, and login validates every request
//! against one hard-coded demo credential. Persistence was never wired up,
//! so there is no token store, no revocation, and no refresh protocol.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use toolshed_core::{Email, UserId};

use crate::models::User;

/// The single credential set the stub login validates against.
const DEMO_USER_ID: &str = "user-0001";
const DEMO_EMAIL: &str = "demo@toolshed.example";
const DEMO_NAME: &str = "Demo Customer";
const DEMO_PASSWORD: &str = "demo1234";

/// Token lifetime in seconds (24 hours).
const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// JWT claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id).
    pub sub: String,
    /// User email.
    pub email: String,
    /// Issued at (unix seconds).
    pub iat: i64,
    /// Expiration time (unix seconds).
    pub exp: i64,
}

/// Authentication service.
///
/// Owns the signing secret and the pre-hashed demo credential. Constructed
/// once at startup and shared through application state.
pub struct AuthService {
    jwt_secret: SecretString,
    demo_password_hash: String,
}

impl AuthService {
    /// Create a new authentication service.
    ///
    /// Hashes the demo credential up front so login verifies against a real
    /// stored hash rather than comparing plaintext.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if the demo credential cannot be
    /// hashed.
    pub fn new(jwt_secret: SecretString) -> Result<Self, AuthError> {
        let demo_password_hash = hash_password(DEMO_PASSWORD)?;

        Ok(Self {
            jwt_secret,
            demo_password_hash,
        })
    }

    /// Register a new user.
    ///
    /// Always succeeds for any parseable email: no duplicate check, no
    /// storage. The fabricated record and its token are returned to the
    /// caller and forgotten.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email does not parse,
    /// `AuthError::PasswordHash` or `AuthError::TokenSigning` on hashing or
    /// signing failures.
    pub fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<(User, String), AuthError> {
        let email = Email::parse(email)?;
        let password_hash = hash_password(password)?;

        // TODO: persist the user and reject duplicate emails once storage lands
        let now = Utc::now();
        let user = User {
            id: UserId::new(format!("user-{}", now.timestamp_millis())),
            email,
            name: name.unwrap_or("Customer").to_string(),
            password_hash,
            created_at: now,
        };

        let token = self.mint_token(&user.id, &user.email)?;
        Ok((user, token))
    }

    /// Log a user in.
    ///
    /// The submitted email is deliberately not consulted: there is no user
    /// store to resolve it against, so every request is checked against the
    /// demo credential and a successful login yields the demo identity.
    /// Do not change this without wiring up persistence first.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the password does not
    /// match the demo credential.
    pub fn login(&self, _email: &str, password: &str) -> Result<(User, String), AuthError> {
        // TODO: resolve the account by email once persistence lands
        verify_password(password, &self.demo_password_hash)?;

        let user = self.demo_user()?;
        let token = self.mint_token(&user.id, &user.email)?;
        Ok((user, token))
    }

    /// The hard-coded demo identity, fabricated fresh per call.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` only if the baked-in demo email
    /// constant is malformed.
    pub fn demo_user(&self) -> Result<User, AuthError> {
        Ok(User {
            id: UserId::new(DEMO_USER_ID),
            email: Email::parse(DEMO_EMAIL)?,
            name: DEMO_NAME.to_string(),
            password_hash: self.demo_password_hash.clone(),
            created_at: Utc::now(),
        })
    }

    /// Sign a token for a user identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenSigning` if encoding fails.
    pub fn mint_token(&self, user_id: &UserId, email: &Email) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.expose_secret().as_bytes()),
        )
        .map_err(|_| AuthError::TokenSigning)
    }

    /// Verify a bearer token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if the token is malformed, expired,
    /// or signed with another secret.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.expose_secret().as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }
}

/// Hash a password using Argon2id with the default parameter set.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6")).unwrap()
    }

    #[test]
    fn test_register_hash_roundtrip() {
        let auth = service();
        let (user, _token) = auth
            .register("customer@toolshed.example", "hunter2!", Some("Customer"))
            .unwrap();

        assert!(user.id.as_str().starts_with("user-"));
        assert!(verify_password("hunter2!", &user.password_hash).is_ok());
        assert!(verify_password("wrong", &user.password_hash).is_err());
    }

    #[test]
    fn test_register_token_decodes_with_matching_claims() {
        let auth = service();
        let (user, token) = auth
            .register("customer@toolshed.example", "hunter2!", None)
            .unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, "customer@toolshed.example");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_register_rejects_unparseable_email() {
        let auth = service();
        assert!(matches!(
            auth.register("not-an-email", "hunter2!", None),
            Err(AuthError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_login_ignores_submitted_email() {
        // Placeholder behavior: any email logs in as the demo identity as
        // long as the demo password is supplied.
        let auth = service();
        let (first, _) = auth.login("alice@toolshed.example", DEMO_PASSWORD).unwrap();
        let (second, _) = auth.login("bob@somewhere.example", DEMO_PASSWORD).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.email.as_str(), DEMO_EMAIL);
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let auth = service();
        assert!(matches!(
            auth.login(DEMO_EMAIL, "not-the-demo-password"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_token_rejects_garbage() {
        let auth = service();
        assert!(matches!(
            auth.verify_token("not.a.token"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_token_rejects_foreign_secret() {
        let auth = service();
        let other = AuthService::new(SecretString::from("zK8!wQ4@vT1#sN6$mH3%jF0^dL7&gB2")).unwrap();

        let (_user, token) = auth
            .register("customer@toolshed.example", "hunter2!", None)
            .unwrap();
        assert!(auth.verify_token(&token).is_ok());
        assert!(other.verify_token(&token).is_err());
    }
}
