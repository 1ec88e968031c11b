//! Session token library
//!
//! Provides reusable session infrastructure for services:
//! - JWT claim construction (subject, issue time, expiry)
//! - HS256 token signing and signature validation
//! - Expiry enforcement against a caller-supplied clock
//!
//! Each service defines its own issuer/verifier traits and adapts these implementations.
//!
//! # Examples
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_subject("a@x.com", Utc::now(), Duration::hours(1));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded, claims);
//! ```
//!
//! ## Session Flow
//! ```
//! use auth::Authenticator;
//! use chrono::{Duration, Utc};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let now = Utc::now();
//!
//! let result = auth.issue("a@x.com", now).unwrap();
//! let claims = auth.verify(&result.access_token, now).unwrap();
//! assert_eq!(claims.sub, "a@x.com");
//!
//! // Three days later the same token is rejected
//! assert!(auth.verify(&result.access_token, now + Duration::hours(72)).is_err());
//! ```

pub mod authenticator;
pub mod jwt;

// Re-export commonly used items
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::DEFAULT_SESSION_TTL_HOURS;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
