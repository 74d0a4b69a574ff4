//! Ownership guard for mutating handlers.

use crate::error::ApiError;

/// Confirm the acting account owns the resource being mutated.
///
/// Pure comparison, no side effects. Callers run this after fetching the
/// resource, so a nonexistent resource reports 404 before this 403 is
/// ever reachable.
pub fn ensure_owner(actor_id: &str, owner_id: &str, denied: &'static str) -> Result<(), ApiError> {
    if actor_id == owner_id {
        Ok(())
    } else {
        Err(ApiError::Forbidden(denied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_passes() {
        assert!(ensure_owner("u-1", "u-1", "denied").is_ok());
    }

    #[test]
    fn test_non_owner_forbidden() {
        let err = ensure_owner("u-2", "u-1", "Not authorized to update this post").unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
        assert_eq!(err.to_string(), "Not authorized to update this post");
    }
}
