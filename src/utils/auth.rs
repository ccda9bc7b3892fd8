// ABOUTME: Bearer token extraction from Authorization headers
// ABOUTME: Distinguishes a missing credential from a malformed one for 401 reporting

use crate::errors::{AppError, AppResult};

const BEARER_PREFIX: &str = "Bearer ";

/// Extract bearer token from an optional Authorization header
///
/// # Errors
///
/// Returns `AUTH_MISSING` if the header is absent, and `AUTH_INVALID` if it
/// does not use the Bearer scheme or carries an empty token.
pub fn extract_bearer_token(auth_header: Option<&str>) -> AppResult<&str> {
    let header = auth_header.ok_or_else(AppError::auth_required)?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AppError::auth_invalid("Invalid authorization header format"))?
        .trim();

    if token.is_empty() {
        return Err(AppError::auth_invalid("Empty bearer token"));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_extracts_token() {
        assert_eq!(extract_bearer_token(Some("Bearer abc.def")).unwrap(), "abc.def");
        assert_eq!(extract_bearer_token(Some("Bearer   padded  ")).unwrap(), "padded");
    }

    #[test]
    fn test_missing_header_is_auth_missing() {
        let err = extract_bearer_token(None).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthRequired);
    }

    #[test]
    fn test_wrong_scheme_is_auth_invalid() {
        let err = extract_bearer_token(Some("Basic dXNlcjpwYXNz")).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthInvalid);
    }

    #[test]
    fn test_empty_token_is_auth_invalid() {
        let err = extract_bearer_token(Some("Bearer    ")).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthInvalid);
    }
}
