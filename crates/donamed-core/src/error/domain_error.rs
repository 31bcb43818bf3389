//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Not-found variants carry the requested identifier for logging; the
/// display strings are the fixed messages rendered to API clients.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Donor not found")]
    DonorNotFound(i64),

    #[error("Equipment not found")]
    EquipmentNotFound(i64),

    #[error("Delivery not found")]
    DeliveryNotFound(i64),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Check if this error represents a missing keyed record
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DonorNotFound(_) | Self::EquipmentNotFound(_) | Self::DeliveryNotFound(_)
        )
    }

    /// Check if this error represents rejected input
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(DomainError::DonorNotFound(1).is_not_found());
        assert!(DomainError::EquipmentNotFound(99999).is_not_found());
        assert!(DomainError::DeliveryNotFound(3).is_not_found());
        assert!(!DomainError::DatabaseError("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_not_found_messages_are_fixed() {
        // The identifier must not leak into the client-facing message
        assert_eq!(DomainError::DonorNotFound(42).to_string(), "Donor not found");
        assert_eq!(
            DomainError::EquipmentNotFound(99999).to_string(),
            "Equipment not found"
        );
        assert_eq!(
            DomainError::DeliveryNotFound(7).to_string(),
            "Delivery not found"
        );
    }
}
