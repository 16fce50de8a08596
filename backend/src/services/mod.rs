//! External service integrations.

pub mod google_oidc;

pub use google_oidc::{GoogleOidcVerifier, IdTokenVerifier, VerifyError, GOOGLE_PROVIDER};
