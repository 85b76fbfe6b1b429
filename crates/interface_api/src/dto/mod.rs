//! Request/response data transfer objects

pub mod bills;
pub mod groups;
pub mod transactions;
pub mod users;

use validator::Validate;

use crate::error::ApiError;

/// Runs declarative validation on a request body, mapping failures to the
/// API's validation error.
pub(crate) fn validated<T: Validate>(value: T) -> Result<T, ApiError> {
    value
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    Ok(value)
}
