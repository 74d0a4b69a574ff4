//! Resource handlers for users, posts and categories.

pub mod categories;
pub mod posts;
pub mod users;

use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// Validate a request DTO, surfacing the first failure message.
pub fn check<T: Validate>(dto: &T) -> Result<(), ApiError> {
    dto.validate()
        .map_err(|e| ApiError::Validation(first_message(&e)))
}

fn first_message(errors: &ValidationErrors) -> String {
    for (field, field_errors) in errors.field_errors() {
        if let Some(err) = field_errors.first() {
            return match &err.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            };
        }
    }
    "Invalid request".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Validate)]
    struct Dto {
        #[validate(length(min = 1, message = "title is required"))]
        title: String,
    }

    #[test]
    fn test_check_reports_first_message() {
        let err = check(&Dto {
            title: String::new(),
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn test_check_passes_valid_dto() {
        assert!(check(&Dto {
            title: "ok".to_string()
        })
        .is_ok());
    }
}
