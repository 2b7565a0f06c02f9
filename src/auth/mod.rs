//! Authentication Module
//! Mission: Gate the catalog behind signed tokens and a role check
//!
//! Request flow for protected routes: [`auth_middleware`] validates the bearer
//! token and attaches an [`AuthenticatedIdentity`], then [`role_gate`] checks
//! the identity's role. Login and config echo bypass both.

pub mod api;
pub mod credential_store;
pub mod error;
pub mod gate;
pub mod issuer;
pub mod jwt;
pub mod middleware;
pub mod models;

pub use api::AuthState;
pub use credential_store::CredentialStore;
pub use error::AuthError;
pub use gate::{authorize, role_gate, RequiredRole};
pub use issuer::{IssuedToken, TokenIssuer};
pub use jwt::{JwtHandler, JwtSecret};
pub use middleware::{auth_middleware, Authenticated};
pub use models::{AuthenticatedIdentity, Claims, Credential, Role};
