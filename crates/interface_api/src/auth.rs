//! Authentication
//!
//! Requests authenticate with HTTP Basic credentials (email and password).
//! The supplied password is compared against the stored credential with a
//! constant-time equality check.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};
use domain_split::{CredentialVerifier, User};
use subtle::ConstantTimeEq;

use crate::error::ApiError;
use crate::AppState;

/// The authenticated user, extracted from the request's Basic credentials
///
/// Handlers that take this extractor are authenticated routes: a missing
/// header, unknown email, or wrong password all reject with 401 before the
/// handler body runs.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) = parts
            .extract::<TypedHeader<Authorization<Basic>>>()
            .await
            .map_err(|_| ApiError::Unauthorized)?;

        let user = state
            .service
            .authenticate(basic.username(), basic.password())
            .await?
            .ok_or(ApiError::Unauthorized)?;

        Ok(CurrentUser(user))
    }
}

/// Constant-time credential verifier
///
/// Credentials are stored as supplied; the comparison must still not leak
/// how many prefix bytes matched, so it runs over every byte regardless of
/// where the first difference is.
#[derive(Debug, Default, Clone)]
pub struct TimingSafeVerifier;

impl CredentialVerifier for TimingSafeVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        supplied.as_bytes().ct_eq(stored.as_bytes()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_equal_credentials() {
        let verifier = TimingSafeVerifier;
        assert!(verifier.verify("hunter2", "hunter2"));
    }

    #[test]
    fn test_verify_rejects_mismatch() {
        let verifier = TimingSafeVerifier;
        assert!(!verifier.verify("hunter2", "hunter3"));
        assert!(!verifier.verify("hunter", "hunter2"));
        assert!(!verifier.verify("", "hunter2"));
    }
}
