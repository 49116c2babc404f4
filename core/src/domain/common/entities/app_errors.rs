use thiserror::Error;

use crate::domain::profile::entities::ProfileField;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<ProfileField>),

    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: ProfileField, reason: String },

    #[error("{field} must be a positive number, got {value:?}")]
    InvalidNumber { field: ProfileField, value: String },

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoreError::MissingFields(_)
                | CoreError::InvalidField { .. }
                | CoreError::InvalidNumber { .. }
        )
    }
}

fn join_fields(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_keys() {
        let error = CoreError::MissingFields(vec![
            ProfileField::FullName,
            ProfileField::AllergicReactions,
        ]);
        assert_eq!(
            error.to_string(),
            "missing required fields: full_name, allergic_reactions"
        );
        assert!(error.is_validation());
    }

    #[test]
    fn external_errors_are_not_validation() {
        let error = CoreError::ExternalServiceError("quota exceeded".to_string());
        assert!(!error.is_validation());
    }
}
